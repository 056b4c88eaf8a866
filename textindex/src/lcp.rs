// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the inverse permutation of `suffix_array`, i.e., the rank of every suffix.
pub(crate) fn inverse(suffix_array: &[u32]) -> Vec<u32> {
    let mut inv = vec![0; suffix_array.len()];
    for (k, &offset) in suffix_array.iter().enumerate() {
        inv[offset as usize] = k as u32;
    }

    inv
}

/// Computes the LCP array of `text` from its suffix array using [Kasai's algorithm].
///
/// `lcp[k]` is the length of the longest common prefix of the suffixes at `suffix_array[k - 1]`
/// and `suffix_array[k]`, and `lcp[0]` is 0.
///
/// Suffixes are visited in text order rather than suffix array order. Dropping the first symbol
/// of a suffix shortens its common prefix with its predecessor by at most one, so the running
/// length only ever decreases by one per step and the whole pass is *O*(*n*).
///
/// [Kasai's algorithm]: https://doi.org/10.1007/3-540-48194-X_17
pub(crate) fn lcp_array(text: &[u32], suffix_array: &[u32]) -> Vec<u32> {
    assert_eq!(
        text.len(),
        suffix_array.len(),
        "suffix array must have one entry per symbol",
    );

    let n = text.len();
    let inv = inverse(suffix_array);
    let mut lcp = vec![0; n];
    let mut len = 0;

    for i in 0..n {
        let k = inv[i] as usize;
        if k == 0 {
            // No predecessor; `len` carries over unchanged
            continue;
        }

        let j = suffix_array[k - 1] as usize;
        while i + len < n && j + len < n && text[i + len] == text[j + len] {
            len += 1;
        }
        lcp[k] = len as u32;
        len = len.saturating_sub(1);
    }

    tracing::debug!(len = n, "constructed LCP array");

    lcp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(data: &[u8]) -> Vec<u32> {
        data.iter().map(|&b| u32::from(b)).collect()
    }

    #[test]
    fn inverse_of_banana() {
        assert_eq!(inverse(&[5, 3, 1, 0, 4, 2]), [3, 2, 5, 1, 4, 0]);
    }

    #[test]
    fn banana() {
        let lcp = lcp_array(&symbols(b"banana"), &[5, 3, 1, 0, 4, 2]);

        assert_eq!(lcp, [0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn repeated_symbol() {
        let lcp = lcp_array(&symbols(b"cccccc"), &[5, 4, 3, 2, 1, 0]);

        assert_eq!(lcp, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn distinct_symbols() {
        let lcp = lcp_array(&symbols(b"dcba"), &[3, 2, 1, 0]);

        assert_eq!(lcp, [0, 0, 0, 0]);
    }

    #[test]
    fn empty_and_single() {
        assert!(lcp_array(&[], &[]).is_empty());
        assert_eq!(lcp_array(&[7], &[0]), [0]);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths() {
        let _ = lcp_array(&[1, 2, 3], &[0, 1]);
    }
}
