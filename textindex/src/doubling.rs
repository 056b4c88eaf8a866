// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::mem;

use crate::{
    rank::{InitialRanks, counting_sort, initial_ranks},
    text::Text,
};

/// Computes the suffix array of `text` by prefix doubling.
///
/// Suffixes start out bucketed by their first symbol. Each round with offset `p` then sorts them
/// by the pair `(rank[i], rank[i + p])` and renames the pairs into dense equivalence classes, so
/// that after the round two suffixes share a class if and only if their first `2p` symbols are
/// equal (a suffix shorter than `2p` only matches another suffix of the same length). Rounds stop
/// as soon as every suffix is in a class of its own.
///
/// Each round is two stable counting sorts over the current number of classes, giving
/// *O*(*n* log *n*) time overall.
pub(crate) fn suffix_array(text: &Text) -> Vec<u32> {
    let n = text.len();
    let mut counts = Vec::new();
    let InitialRanks {
        mut suffix_array,
        mut rank,
        mut classes,
    } = initial_ranks(text, &mut counts);

    if n <= 1 {
        return suffix_array;
    }

    let mut by_second_key = vec![0; n];
    let mut next_rank = vec![0; n];
    let mut rounds = 0;
    let mut p = 1;

    while p < n {
        debug_assert_eq!(rank.len(), n, "rank array must cover the whole text");
        debug_assert_eq!(suffix_array.len(), n, "suffix array must cover the whole text");

        // Least significant key first. Shifting ranks up by one frees bucket 0 for the sentinel.
        counting_sort(
            &suffix_array,
            &mut by_second_key,
            classes + 1,
            &mut counts,
            |i| second_key(&rank, i as usize, p).map_or(0, |r| r as usize + 1),
        );
        counting_sort(
            &by_second_key,
            &mut suffix_array,
            classes,
            &mut counts,
            |i| rank[i as usize] as usize,
        );

        let last_class = rename(&suffix_array, &rank, &mut next_rank, p);
        mem::swap(&mut rank, &mut next_rank);
        classes = last_class as usize + 1;
        rounds += 1;

        tracing::trace!(p, classes, "refined suffix ranks");

        if classes == n {
            break;
        }
        p <<= 1;
    }

    tracing::debug!(len = n, rounds, "constructed suffix array");

    suffix_array
}

/// Returns the rank of the suffix `p` symbols after `i`, or `None` if that suffix is empty.
///
/// `None` orders before every real rank, which makes a suffix that runs out of symbols sort
/// before any longer suffix it is a prefix of.
fn second_key(rank: &[u32], i: usize, p: usize) -> Option<u32> {
    rank.get(i + p).copied()
}

/// Assigns dense classes to the suffixes in `suffix_array`, which must be sorted by
/// `(rank[i], second_key(i))`, and returns the highest class assigned.
fn rename(suffix_array: &[u32], rank: &[u32], next_rank: &mut [u32], p: usize) -> u32 {
    let key = |i: u32| (rank[i as usize], second_key(rank, i as usize, p));

    let mut class = 0;
    next_rank[suffix_array[0] as usize] = 0;
    for pair in suffix_array.windows(2) {
        if key(pair[0]) != key(pair[1]) {
            class += 1;
        }
        next_rank[pair[1] as usize] = class;
    }

    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sa(data: &[u8]) -> Vec<u32> {
        suffix_array(&Text::from_bytes(data))
    }

    #[test]
    fn banana() {
        assert_eq!(sa(b"banana"), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn repeated_symbol() {
        assert_eq!(sa(b"cccccc"), [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn empty_text() {
        assert!(sa(b"").is_empty());
    }

    #[test]
    fn single_symbol() {
        assert_eq!(sa(b"a"), [0]);
    }

    #[test]
    fn length_not_power_of_two() {
        // Seven symbols need rounds with p = 1, 2 and 4, the last of which reads past the end
        // for every suffix starting after offset 2
        assert_eq!(sa(b"aaaaaab"), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(sa(b"abaabaa"), [6, 5, 2, 3, 0, 4, 1]);
    }

    #[test]
    fn small_alphabet() {
        let text = Text::new(vec![1, 0, 1, 0, 1], 2).unwrap();

        assert_eq!(suffix_array(&text), [3, 1, 4, 2, 0]);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(sa(b"abab"), [2, 0, 3, 1]);
    }

    #[test]
    fn second_key_past_end_is_sentinel() {
        let rank = [3, 1, 2];

        assert_eq!(second_key(&rank, 0, 2), Some(2));
        assert_eq!(second_key(&rank, 1, 2), None);
        assert!(None < Some(0));
    }
}
