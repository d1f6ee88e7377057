//! Pair-with-target-sum queries.

use crate::algorithms::numeric::Integer;
use crate::containers::Sequence;
use crate::error::{Result, SeqError};
use ahash::AHashSet;
use std::cmp::Ordering;

impl<T: Integer> Sequence<T> {
    /// Find two elements summing to `target` by two-pointer convergence
    ///
    /// Requires ascending order and fails with `NotSorted` otherwise. The
    /// pointers start at both ends: a small sum advances the low pointer, a
    /// large one retreats the high pointer, so the outermost matching pair
    /// is found first (`[10, 20, 30, 40]`, target 50 gives `(10, 40)`).
    /// Sums are computed in `i128` and cannot overflow.
    pub fn pair_with_sum_sorted(&self, target: T) -> Result<Option<(T, T)>> {
        if !self.is_sorted() {
            return Err(SeqError::not_sorted("pair_with_sum_sorted"));
        }
        let items = self.as_slice();
        if items.len() < 2 {
            return Ok(None);
        }

        let target = target.to_i128();
        let (mut low, mut high) = (0, items.len() - 1);
        while low < high {
            let sum = items[low].to_i128() + items[high].to_i128();
            match sum.cmp(&target) {
                Ordering::Equal => return Ok(Some((items[low], items[high]))),
                Ordering::Less => low += 1,
                Ordering::Greater => high -= 1,
            }
        }
        Ok(None)
    }

    /// Find two elements summing to `target` with a seen-set, any order
    ///
    /// Returns `(complement, value)` for the first element whose complement
    /// appeared earlier. Complements outside `T`'s range are never looked up.
    pub fn pair_with_sum_hashed(&self, target: T) -> Option<(T, T)> {
        let target = target.to_i128();
        let mut seen = AHashSet::with_capacity(self.len());
        for &value in self.iter() {
            if let Some(complement) = T::from_i128(target - value.to_i128()) {
                if seen.contains(&complement) {
                    return Some((complement, value));
                }
            }
            seen.insert(value);
        }
        None
    }
}
