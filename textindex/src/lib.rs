// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix array and LCP array construction over integer alphabets.
//!
//! A [`TextIndex`] wraps an immutable text of symbols drawn from a dense alphabet `0..n` and
//! lazily builds its suffix array (by prefix doubling, *O*(*n* log *n*)) and its LCP array (by
//! Kasai's algorithm, *O*(*n*)). Each array is built at most once, on first request.
//!
//! # Examples
//!
//! Indexing a byte string:
//!
//! ```
//! use textindex::TextIndex;
//!
//! let index = TextIndex::from_bytes(b"banana");
//!
//! assert_eq!(index.suffix_array(), &[5, 3, 1, 0, 4, 2]);
//! assert_eq!(index.lcp_array(), &[0, 1, 3, 0, 0, 2]);
//! ```
//!
//! Indexing a text over a custom alphabet:
//!
//! ```
//! use textindex::{InvalidInput, TextIndex};
//!
//! # fn main() -> Result<(), InvalidInput> {
//! // A DNA sequence with A, C, G, T encoded as 0, 1, 2, 3
//! let index = TextIndex::new(vec![2, 0, 3, 0, 3, 0], 4)?;
//!
//! assert!(index.contains(&[0, 3, 0]));
//! assert_eq!(index.occurrences(&[0, 3]), &[3, 1]);
//!
//! // Symbols outside of the alphabet are rejected
//! assert!(TextIndex::new(vec![0, 4], 4).is_err());
//! # Ok(())
//! # }
//! ```

mod config;
mod doubling;
mod index;
mod lcp;
mod rank;
mod text;

pub use config::IndexConfig;
pub use index::TextIndex;
pub use text::InvalidInput;
