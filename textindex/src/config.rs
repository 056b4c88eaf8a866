// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Configuration options for building a [`TextIndex`](crate::TextIndex)
///
/// The defaults describe a byte alphabet with lazily built arrays, which suits most callers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct IndexConfig {
    alphabet_size: usize,
    eager: bool,
}

impl IndexConfig {
    /// Creates a new configuration with the default options
    ///
    /// This configuration can be reused across index constructions.
    pub const fn new() -> Self {
        Self {
            alphabet_size: Self::DEFAULT_ALPHABET_SIZE,
            eager: false,
        }
    }

    /// Sets the alphabet size, an exclusive upper bound on every symbol of the text.
    ///
    /// Construction time and memory grow with the alphabet size during the first sorting pass, so
    /// a tight bound is preferable for texts over small alphabets.
    pub fn alphabet_size(&mut self, alphabet_size: usize) -> &mut Self {
        self.alphabet_size = alphabet_size;
        self
    }

    /// Sets whether the suffix and LCP arrays are built during construction.
    ///
    /// When `false`, each array is built the first time it is requested instead.
    pub fn eager(&mut self, eager: bool) -> &mut Self {
        self.eager = eager;
        self
    }

    pub(crate) fn get_alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub(crate) fn is_eager(&self) -> bool {
        self.eager
    }

    /// The default alphabet size, covering every byte value
    pub const DEFAULT_ALPHABET_SIZE: usize = 256;
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}
