// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-ordered child storage shared by every group layer.
//!
//! Children are kept in a `Vec` sorted by [`SortKey`]: depth first, then the
//! sequence number the child was given when it was attached. Because
//! sequence numbers are unique, every key is unique, which makes lookups a
//! plain binary search and keeps ties in insertion order no matter how often
//! depths change.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// The ordering key of an attached child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SortKey {
    pub(crate) depth: f32,
    pub(crate) seq: u64,
}

impl SortKey {
    #[inline]
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        self.depth
            .total_cmp(&other.depth)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Returns a key lookup over the graph's depth and sequence arrays.
#[inline]
pub(crate) fn keys<'a>(depth: &'a [f32], seq: &'a [u64]) -> impl Fn(u32) -> SortKey + 'a {
    move |c| SortKey {
        depth: depth[c as usize],
        seq: seq[c as usize],
    }
}

/// A sorted list of child slot indices.
#[derive(Clone, Debug, Default)]
pub(crate) struct ChildList {
    items: Vec<u32>,
}

impl ChildList {
    #[inline]
    pub(crate) fn as_slice(&self) -> &[u32] {
        &self.items
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<u32> {
        self.items.last().copied()
    }

    /// Inserts `child` (whose key is `key`) and returns its index.
    pub(crate) fn insert(
        &mut self,
        child: u32,
        key: SortKey,
        key_of: impl Fn(u32) -> SortKey,
    ) -> usize {
        // Appending is the common case (most layers share depth 0 and the
        // newcomer has the highest sequence number), so check the tail first.
        let idx = match self.items.last() {
            None => 0,
            Some(&last) if key_of(last).compare(&key).is_le() => self.items.len(),
            Some(_) => self
                .items
                .partition_point(|&c| key_of(c).compare(&key).is_lt()),
        };
        self.items.insert(idx, child);
        idx
    }

    /// Returns the index of `child`, looked up by its current `key`.
    pub(crate) fn find(
        &self,
        child: u32,
        key: SortKey,
        key_of: impl Fn(u32) -> SortKey,
    ) -> Option<usize> {
        self.items
            .binary_search_by(|&c| key_of(c).compare(&key))
            .ok()
            .filter(|&i| self.items[i] == child)
    }

    /// Removes `child` and returns the index it occupied.
    pub(crate) fn remove(
        &mut self,
        child: u32,
        key: SortKey,
        key_of: impl Fn(u32) -> SortKey,
    ) -> Option<usize> {
        let idx = self.find(child, key, key_of)?;
        self.items.remove(idx);
        Some(idx)
    }

    /// Removes and returns the last (highest-key) child.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<u32> {
        self.items.pop()
    }

    /// Moves `child` from the slot matching `old` to the slot matching `new`.
    ///
    /// `key_of` must already report `new` for `child`. Returns
    /// `(old_index, new_index)`, or `None` if `child` wasn't found.
    pub(crate) fn reposition(
        &mut self,
        child: u32,
        old: SortKey,
        new: SortKey,
        key_of: impl Fn(u32) -> SortKey,
    ) -> Option<(usize, usize)> {
        let old_idx = self.find(child, old, |c| if c == child { old } else { key_of(c) })?;
        let len = self.items.len();

        // Fast path: the new key still fits between the neighbours.
        let left_ok = old_idx == 0 || key_of(self.items[old_idx - 1]).compare(&new).is_le();
        let right_ok = old_idx + 1 == len || key_of(self.items[old_idx + 1]).compare(&new).is_ge();
        if left_ok && right_ok {
            return Some((old_idx, old_idx));
        }

        let new_idx = if new.compare(&old).is_gt() {
            let after = self.items[old_idx + 1..].partition_point(|&c| key_of(c).compare(&new).is_lt());
            let new_idx = old_idx + after;
            self.items[old_idx..=new_idx].rotate_left(1);
            new_idx
        } else {
            let new_idx = self.items[..old_idx].partition_point(|&c| key_of(c).compare(&new).is_lt());
            self.items[new_idx..=old_idx].rotate_right(1);
            new_idx
        };
        Some((old_idx, new_idx))
    }
}
