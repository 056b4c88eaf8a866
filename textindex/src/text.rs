// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that a text cannot be indexed.
///
/// This error is returned by [`TextIndex::new()`](crate::TextIndex::new) and
/// [`TextIndex::with_config()`](crate::TextIndex::with_config) when the text or its declared
/// alphabet is invalid. Nothing is built when construction fails.
///
/// # Examples
///
/// ```
/// use textindex::{InvalidInput, TextIndex};
///
/// let index = TextIndex::new(vec![0, 1, 4], 4);
///
/// assert!(matches!(
///     index,
///     Err(InvalidInput::SymbolOutOfRange { position: 2, symbol: 4, alphabet_size: 4 }),
/// ));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidInput {
    /// The alphabet size is 0 but the text is not empty
    EmptyAlphabet,
    /// A symbol is not less than the alphabet size
    SymbolOutOfRange {
        /// The offset of the offending symbol in the text
        position: usize,
        /// The offending symbol
        symbol: u32,
        /// The declared alphabet size
        alphabet_size: usize,
    },
    /// The text has more symbols than a `u32` offset can address
    TextTooLong(usize),
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InvalidInput::EmptyAlphabet => write!(f, "alphabet size must be positive"),
            InvalidInput::SymbolOutOfRange {
                position,
                symbol,
                alphabet_size,
            } => write!(
                f,
                "symbol {symbol} at offset {position} is outside of alphabet [0, {alphabet_size})",
            ),
            InvalidInput::TextTooLong(len) => {
                write!(f, "text of length {len} exceeds the maximum of {}", u32::MAX)
            }
        }
    }
}

impl Error for InvalidInput {}

/// An immutable, validated sequence of symbols together with its alphabet size.
///
/// Every symbol is guaranteed to be less than `alphabet_size` and the length is guaranteed to fit
/// in a `u32`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Text {
    symbols: Box<[u32]>,
    alphabet_size: usize,
}

impl Text {
    pub(crate) fn new(symbols: Vec<u32>, alphabet_size: usize) -> Result<Self, InvalidInput> {
        if symbols.len() > u32::MAX as usize {
            return Err(InvalidInput::TextTooLong(symbols.len()));
        }
        if alphabet_size == 0 && !symbols.is_empty() {
            return Err(InvalidInput::EmptyAlphabet);
        }
        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, &symbol)| symbol as usize >= alphabet_size)
        {
            return Err(InvalidInput::SymbolOutOfRange {
                position,
                symbol,
                alphabet_size,
            });
        }

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
            alphabet_size,
        })
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            symbols: bytes.iter().map(|&b| u32::from(b)).collect(),
            alphabet_size: 1 << u8::BITS,
        }
    }

    pub(crate) fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    pub(crate) fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}
