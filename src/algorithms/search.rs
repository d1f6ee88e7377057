//! Linear and binary search over a sequence.

use crate::containers::Sequence;

impl<T: PartialEq> Sequence<T> {
    /// Find `key` by linear scan
    ///
    /// A match at position `i > 0` is swapped with its left neighbour and
    /// `i - 1` is returned, so repeatedly searched keys drift to the front.
    /// Positions of found elements are therefore not stable across calls.
    pub fn linear_search(&mut self, key: &T) -> Option<usize> {
        let index = self.iter().position(|item| item == key)?;
        if index == 0 {
            return Some(0);
        }
        self.as_mut_slice().swap(index, index - 1);
        Some(index - 1)
    }
}

impl<T: PartialOrd> Sequence<T> {
    /// Find `key` by iterative binary search over `[low, high)`
    ///
    /// The sequence must be in ascending order; this is not checked and an
    /// unsorted receiver gives an unspecified (but memory-safe) answer.
    pub fn binary_search_loop(&self, key: &T) -> Option<usize> {
        let items = self.as_slice();
        let (mut low, mut high) = (0, items.len());
        while low < high {
            let mid = low + (high - low) / 2;
            if *key == items[mid] {
                return Some(mid);
            } else if *key < items[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        None
    }
}
