// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cmp::Ordering, ops::Range, sync::OnceLock};

use crate::{
    config::IndexConfig,
    doubling, lcp,
    text::{InvalidInput, Text},
};

/// A suffix array and LCP array over an immutable text.
///
/// Both arrays are built lazily. The suffix array is built the first time it is requested, and the
/// LCP array is built the first time it is requested, building the suffix array beforehand if
/// needed. Each array is built at most once per index and never changes afterwards, so repeated
/// requests return the same slice.
///
/// Concurrent first requests from multiple threads are serialized, with exactly one of them doing
/// the work.
#[derive(Clone, Debug)]
pub struct TextIndex {
    text: Text,
    suffix_array: OnceLock<Vec<u32>>,
    lcp: OnceLock<Vec<u32>>,
}

impl TextIndex {
    /// Creates a new `TextIndex` for `symbols`, each of which must be less than `alphabet_size`.
    ///
    /// No arrays are built until requested.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is not less than `alphabet_size`, if `alphabet_size` is 0 and
    /// `symbols` is not empty, or if `symbols.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::TextIndex;
    ///
    /// # fn main() -> Result<(), textindex::InvalidInput> {
    /// // "acgca" over the alphabet {a, c, g} = {0, 1, 2}
    /// let index = TextIndex::new(vec![0, 1, 2, 1, 0], 3)?;
    ///
    /// assert_eq!(index.suffix_array(), &[4, 0, 3, 1, 2]);
    /// assert_eq!(index.lcp_array(), &[0, 1, 0, 1, 0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(symbols: Vec<u32>, alphabet_size: usize) -> Result<Self, InvalidInput> {
        Self::with_config(symbols, IndexConfig::new().alphabet_size(alphabet_size))
    }

    /// Creates a new `TextIndex` for `symbols` using the options in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`TextIndex::new()`], with the alphabet size
    /// taken from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::{IndexConfig, TextIndex};
    ///
    /// # fn main() -> Result<(), textindex::InvalidInput> {
    /// let mut config = IndexConfig::new();
    /// config.alphabet_size(2).eager(true);
    ///
    /// let index = TextIndex::with_config(vec![1, 0, 1], &config)?;
    /// assert!(index.is_lcp_array_built());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(symbols: Vec<u32>, config: &IndexConfig) -> Result<Self, InvalidInput> {
        let text = Text::new(symbols, config.get_alphabet_size())?;
        let index = Self::from_text(text);

        if config.is_eager() {
            index.lcp_array();
        }

        Ok(index)
    }

    /// Creates a new `TextIndex` for a byte string.
    ///
    /// Every byte is a valid symbol, so this cannot fail for inputs that fit in memory.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::TextIndex;
    ///
    /// let index = TextIndex::from_bytes(b"banana");
    ///
    /// assert_eq!(index.suffix_array(), &[5, 3, 1, 0, 4, 2]);
    /// assert_eq!(index.lcp_array(), &[0, 1, 3, 0, 0, 2]);
    /// ```
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        assert!(
            data.len() <= u32::MAX as usize,
            "`data` must not be longer than u32::MAX",
        );

        Self::from_text(Text::from_bytes(data))
    }

    fn from_text(text: Text) -> Self {
        Self {
            text,
            suffix_array: OnceLock::new(),
            lcp: OnceLock::new(),
        }
    }

    /// Returns the number of symbols in the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.len() == 0
    }

    /// Returns the indexed text.
    #[must_use]
    pub fn text(&self) -> &[u32] {
        self.text.symbols()
    }

    /// Returns the alphabet size the text was validated against.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.text.alphabet_size()
    }

    /// Returns the suffix array, building it if this is the first request.
    ///
    /// Entry `k` is the offset of the `k`-th smallest suffix in lexicographic order, where a
    /// suffix that is a prefix of another sorts first.
    ///
    /// Construction is *O*(*n* log *n*).
    pub fn suffix_array(&self) -> &[u32] {
        self.suffix_array
            .get_or_init(|| doubling::suffix_array(&self.text))
    }

    /// Returns the LCP array, building it (and the suffix array) if this is the first request.
    ///
    /// Entry `k` is the length of the longest common prefix of the suffixes at
    /// `suffix_array()[k - 1]` and `suffix_array()[k]`. Entry 0 is always 0.
    ///
    /// Construction is *O*(*n*) once the suffix array exists.
    pub fn lcp_array(&self) -> &[u32] {
        self.lcp
            .get_or_init(|| lcp::lcp_array(self.text.symbols(), self.suffix_array()))
    }

    /// Returns `true` if the suffix array has already been built.
    #[must_use]
    pub fn is_suffix_array_built(&self) -> bool {
        self.suffix_array.get().is_some()
    }

    /// Returns `true` if the LCP array has already been built.
    #[must_use]
    pub fn is_lcp_array_built(&self) -> bool {
        self.lcp.get().is_some()
    }

    /// Returns the inverse of the suffix array, i.e., the sorted position of every suffix.
    ///
    /// The inverse is not cached; every call computes it anew in *O*(*n*).
    #[must_use]
    pub fn inverse_suffix_array(&self) -> Vec<u32> {
        lcp::inverse(self.suffix_array())
    }

    /// Returns `true` if and only if `pattern` is contained in the text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::TextIndex;
    ///
    /// let index = TextIndex::from_bytes(b"Hello, world!");
    ///
    /// assert!(index.contains(&[u32::from(b'w'), u32::from(b'o')]));
    /// assert!(!index.contains(&[u32::from(b'x')]));
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u32]) -> bool {
        pattern.is_empty()
            || self
                .suffix_array()
                .binary_search_by(|&suffix| self.compare_prefix(suffix, pattern))
                .is_ok()
    }

    /// Returns the offsets of all suffixes starting with `pattern`, in suffix array order.
    ///
    /// The result is a contiguous range of the suffix array. It is empty if `pattern` does not
    /// occur and is the whole suffix array if `pattern` is empty.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::TextIndex;
    ///
    /// let index = TextIndex::from_bytes(b"banana");
    /// let ana: Vec<u32> = b"ana".iter().copied().map(u32::from).collect();
    ///
    /// assert_eq!(index.occurrences(&ana), &[3, 1]);
    /// ```
    #[must_use]
    pub fn occurrences(&self, pattern: &[u32]) -> &[u32] {
        let suffix_array = self.suffix_array();
        let start = suffix_array
            .partition_point(|&suffix| self.compare_prefix(suffix, pattern) == Ordering::Less);
        let end = suffix_array
            .partition_point(|&suffix| self.compare_prefix(suffix, pattern) != Ordering::Greater);

        &suffix_array[start..end]
    }

    /// Returns the range of the text holding the longest substring that occurs at least twice.
    ///
    /// Among several candidates of equal length, the one whose occurrence comes first in suffix
    /// array order is returned. Returns `None` if no symbol occurs twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::TextIndex;
    ///
    /// let index = TextIndex::from_bytes(b"banana");
    ///
    /// assert_eq!(index.longest_repeated_substring(), Some(1..4));
    /// ```
    #[must_use]
    pub fn longest_repeated_substring(&self) -> Option<Range<usize>> {
        let (k, &len) = self
            .lcp_array()
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &len)| len)?;

        if len == 0 {
            None
        } else {
            let start = self.suffix_array()[k] as usize;
            Some(start..start + len as usize)
        }
    }

    /// Compares the first `pattern.len()` symbols of the suffix at `suffix` with `pattern`.
    fn compare_prefix(&self, suffix: u32, pattern: &[u32]) -> Ordering {
        self.text.symbols()[suffix as usize..]
            .iter()
            .take(pattern.len())
            .cmp(pattern.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(data: &[u8]) -> Vec<u32> {
        data.iter().map(|&b| u32::from(b)).collect()
    }

    #[test]
    fn banana() {
        let index = TextIndex::from_bytes(b"banana");

        assert_eq!(index.len(), 6);
        assert_eq!(index.suffix_array(), &[5, 3, 1, 0, 4, 2]);
        assert_eq!(index.lcp_array(), &[0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn repeated_symbol() {
        let index = TextIndex::from_bytes(b"cccccc");

        assert_eq!(index.suffix_array(), &[5, 4, 3, 2, 1, 0]);
        assert_eq!(index.lcp_array(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn special_characters() {
        // '!' < '#' < '$' < '%' < '&' < '*' < '@' < '^'
        let index = TextIndex::from_bytes(b"!@#$%^&*");

        assert_eq!(index.suffix_array(), &[0, 2, 3, 4, 6, 7, 1, 5]);
        assert_eq!(index.lcp_array(), &[0; 8]);
    }

    #[test]
    fn descending_distinct_symbols() {
        let index = TextIndex::from_bytes(b"^@*&%$#!");

        assert_eq!(index.suffix_array(), &[7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(index.lcp_array(), &[0; 8]);
    }

    #[test]
    fn empty_text() {
        let index = TextIndex::from_bytes(b"");

        assert!(index.is_empty());
        assert!(index.suffix_array().is_empty());
        assert!(index.lcp_array().is_empty());
    }

    #[test]
    fn single_symbol() {
        let index = TextIndex::from_bytes(b"a");

        assert_eq!(index.suffix_array(), &[0]);
        assert_eq!(index.lcp_array(), &[0]);
    }

    #[test]
    fn builds_lazily() {
        let index = TextIndex::from_bytes(b"mississippi");

        assert!(!index.is_suffix_array_built());
        assert!(!index.is_lcp_array_built());

        index.suffix_array();
        assert!(index.is_suffix_array_built());
        assert!(!index.is_lcp_array_built());
    }

    #[test]
    fn lcp_request_builds_suffix_array() {
        let index = TextIndex::from_bytes(b"mississippi");

        index.lcp_array();

        assert!(index.is_suffix_array_built());
        assert!(index.is_lcp_array_built());
    }

    #[test]
    fn repeated_requests_return_same_arrays() {
        let index = TextIndex::from_bytes(b"abracadabra");

        let first_sa = index.suffix_array();
        let first_lcp = index.lcp_array();

        assert!(std::ptr::eq(first_sa, index.suffix_array()));
        assert!(std::ptr::eq(first_lcp, index.lcp_array()));
    }

    #[test]
    fn eager_config_builds_both_arrays() {
        let mut config = IndexConfig::new();
        config.eager(true);

        let index = TextIndex::with_config(symbols(b"abracadabra"), &config).unwrap();

        assert!(index.is_suffix_array_built());
        assert!(index.is_lcp_array_built());
        assert_eq!(
            index.suffix_array(),
            TextIndex::from_bytes(b"abracadabra").suffix_array(),
        );
    }

    #[test]
    fn rejects_out_of_range_symbol() {
        let index = TextIndex::new(vec![0, 3, 1], 3);

        assert!(matches!(
            index,
            Err(InvalidInput::SymbolOutOfRange {
                position: 1,
                symbol: 3,
                alphabet_size: 3,
            }),
        ));
    }

    #[test]
    fn rejects_empty_alphabet() {
        assert!(matches!(
            TextIndex::new(vec![0], 0),
            Err(InvalidInput::EmptyAlphabet),
        ));
    }

    #[test]
    fn empty_text_with_empty_alphabet() {
        let index = TextIndex::new(Vec::new(), 0).unwrap();

        assert!(index.suffix_array().is_empty());
        assert!(index.lcp_array().is_empty());
    }

    #[test]
    fn inverse_suffix_array() {
        let index = TextIndex::from_bytes(b"banana");

        assert_eq!(index.inverse_suffix_array(), [3, 2, 5, 1, 4, 0]);
    }

    #[test]
    fn contains_over_small_alphabet() {
        // "ACGTACGGT" with A, C, G, T encoded as 0, 1, 2, 3
        let index = TextIndex::new(vec![0, 1, 2, 3, 0, 1, 2, 2, 3], 4).unwrap();

        assert!(index.contains(&[0, 1, 2]));
        assert!(index.contains(&[2, 2, 3]));
        assert!(index.contains(&[3]));
        assert!(!index.contains(&[3, 3]));
        assert!(!index.contains(&[1, 2, 3, 0, 1, 2, 3]));
    }

    #[test]
    fn contains_at_repeated_prefix_boundary() {
        let index = TextIndex::from_bytes(b"aaaab");

        assert!(index.contains(&symbols(b"aaaa")));
        assert!(index.contains(&symbols(b"aaab")));
        assert!(!index.contains(&symbols(b"aaaaa")));
        assert!(!index.contains(&symbols(b"ba")));
    }

    #[test]
    fn contains_symbols_beyond_byte_range() {
        let index = TextIndex::new(vec![70_000, 3, 70_000, 3], 70_001).unwrap();

        assert!(index.contains(&[3, 70_000]));
        assert!(!index.contains(&[3, 3]));
        assert_eq!(index.occurrences(&[70_000, 3]), &[2, 0]);
    }

    #[test]
    fn huge_alphabet_size() {
        let index = TextIndex::new(vec![0, 1, 0], usize::MAX).unwrap();

        assert_eq!(index.suffix_array(), &[2, 0, 1]);
        assert_eq!(index.lcp_array(), &[0, 1, 0]);

        let empty = TextIndex::new(Vec::new(), usize::MAX).unwrap();

        assert!(empty.suffix_array().is_empty());
        assert!(empty.lcp_array().is_empty());
    }

    #[test]
    fn contains_empty_pattern() {
        assert!(TextIndex::from_bytes(b"").contains(&[]));
        assert!(TextIndex::from_bytes(b"abc").contains(&[]));
    }

    #[test]
    fn pattern_longer_than_text() {
        let index = TextIndex::from_bytes(b"ab");

        assert!(!index.contains(&symbols(b"abc")));
        assert!(index.occurrences(&symbols(b"abc")).is_empty());
    }

    #[test]
    fn occurrences_in_suffix_array_order() {
        let index = TextIndex::from_bytes(b"mississippi");

        assert_eq!(index.occurrences(&symbols(b"ssi")), &[5, 2]);
        assert_eq!(index.occurrences(&symbols(b"i")), &[10, 7, 4, 1]);
        assert!(index.occurrences(&symbols(b"sp")).is_empty());
    }

    #[test]
    fn occurrences_of_empty_pattern() {
        let index = TextIndex::from_bytes(b"banana");

        assert_eq!(index.occurrences(&[]), index.suffix_array());
    }

    #[test]
    fn longest_repeated_substring() {
        let index = TextIndex::from_bytes(b"mississippi");

        // "issi" occurs at offsets 1 and 4
        assert_eq!(index.longest_repeated_substring(), Some(1..5));
    }

    #[test]
    fn no_repeated_substring() {
        assert_eq!(TextIndex::from_bytes(b"abc").longest_repeated_substring(), None);
        assert_eq!(TextIndex::from_bytes(b"a").longest_repeated_substring(), None);
        assert_eq!(TextIndex::from_bytes(b"").longest_repeated_substring(), None);
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<TextIndex>();
    }
}
