// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::text::Text;

/// Stably sorts `input` into `output` by `key` using a single counting sort pass.
///
/// `key` must return values in `0..buckets`. `counts` is scratch space which is resized and
/// overwritten, letting callers reuse one allocation across passes.
///
/// Offsets are placed by scanning `input` from the end and decrementing each bucket's running
/// end, so elements with equal keys keep their relative order.
pub(crate) fn counting_sort<K>(
    input: &[u32],
    output: &mut [u32],
    buckets: usize,
    counts: &mut Vec<usize>,
    key: K,
) where
    K: Fn(u32) -> usize,
{
    assert_eq!(
        input.len(),
        output.len(),
        "input and output of a counting sort must have the same length",
    );

    counts.clear();
    counts.resize(buckets, 0);

    for &offset in input {
        counts[key(offset)] += 1;
    }

    // Convert counts into the exclusive end of each bucket
    for i in 1..buckets {
        counts[i] += counts[i - 1];
    }

    for &offset in input.iter().rev() {
        let bucket = &mut counts[key(offset)];
        *bucket -= 1;
        output[*bucket] = offset;
    }
}

/// The result of ordering suffixes by their first symbol only.
pub(crate) struct InitialRanks {
    /// Suffix offsets sorted by first symbol, ties in text order
    pub(crate) suffix_array: Vec<u32>,
    /// The raw first symbol of each suffix
    pub(crate) rank: Vec<u32>,
    /// An exclusive upper bound on the values in `rank`
    pub(crate) classes: usize,
}

/// Buckets every suffix of `text` by its first symbol.
///
/// The ranks are the raw symbols and are therefore not dense; they are compacted by the first
/// doubling round.
///
/// Only symbols up to the largest one present get a bucket, so the declared alphabet size may be
/// arbitrarily large.
pub(crate) fn initial_ranks(text: &Text, counts: &mut Vec<usize>) -> InitialRanks {
    let rank = text.symbols().to_vec();
    let offsets: Vec<u32> = (0..text.len() as u32).collect();
    let mut suffix_array = vec![0; text.len()];
    let classes = rank
        .iter()
        .max()
        .map_or(0, |&symbol| symbol as usize + 1)
        .min(text.alphabet_size());

    counting_sort(
        &offsets,
        &mut suffix_array,
        classes,
        counts,
        |offset| rank[offset as usize] as usize,
    );

    InitialRanks {
        suffix_array,
        rank,
        classes,
    }
}
