//! Aggregate queries: extremes, sum and average.

use crate::algorithms::numeric::Integer;
use crate::containers::Sequence;
use crate::error::{Result, SeqError};

impl<T: PartialOrd + Clone> Sequence<T> {
    /// Largest element
    pub fn max(&self) -> Result<T> {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| SeqError::empty("max"))?;
        let mut best = first;
        for item in rest {
            if item > best {
                best = item;
            }
        }
        Ok(best.clone())
    }

    /// Smallest element
    pub fn min(&self) -> Result<T> {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| SeqError::empty("min"))?;
        let mut best = first;
        for item in rest {
            if item < best {
                best = item;
            }
        }
        Ok(best.clone())
    }

    /// Smallest and largest element in one pass of roughly `3n/2` comparisons
    ///
    /// Elements are taken in adjacent pairs: the pair is ordered first, then
    /// only its smaller value is compared with the running minimum and only
    /// its larger value with the running maximum. An odd-length sequence
    /// seeds both extremes from its first element.
    pub fn min_max(&self) -> Option<(T, T)> {
        let items = self.as_slice();
        let (mut lo, mut hi, start) = match items {
            [] => return None,
            [only] => return Some((only.clone(), only.clone())),
            [a, b, ..] if items.len() % 2 == 0 => {
                if a < b {
                    (a, b, 2)
                } else {
                    (b, a, 2)
                }
            }
            [a, ..] => (a, a, 1),
        };

        for pair in items[start..].chunks_exact(2) {
            let (small, large) = if pair[0] < pair[1] {
                (&pair[0], &pair[1])
            } else {
                (&pair[1], &pair[0])
            };
            if small < lo {
                lo = small;
            }
            if large > hi {
                hi = large;
            }
        }
        Some((lo.clone(), hi.clone()))
    }
}

impl<T: Integer> Sequence<T> {
    /// Sum of all elements; zero for an empty sequence
    ///
    /// Fails with `Overflow` when the total does not fit in `T`; use
    /// [`sum_wide`](Self::sum_wide) for a total that cannot overflow.
    pub fn sum(&self) -> Result<T> {
        self.iter().try_fold(T::ZERO, |acc, &item| {
            acc.checked_add(item).ok_or_else(|| SeqError::overflow("sum"))
        })
    }

    /// Sum of all elements widened to `i128`; zero for an empty sequence
    ///
    /// Never overflows: the widest element types are 64 bits, so any
    /// sequence that fits in memory sums within `i128`.
    pub fn sum_wide(&self) -> i128 {
        self.iter().map(|item| item.to_i128()).sum()
    }

    /// Arithmetic mean
    ///
    /// Accumulates in `i128`, so it never overflows for any element type.
    pub fn avg(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(SeqError::empty("avg"));
        }
        Ok(self.sum_wide() as f64 / self.len() as f64)
    }
}
