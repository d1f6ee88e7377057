//! Missing-element detection in integer runs
//!
//! Three strategies:
//!
//! - **Difference method** (sorted input): in a gap-free ascending run
//!   starting at `a[0]`, `a[i] - i` is constant. The first index where it
//!   changes marks a gap.
//! - **XOR method** (unsorted input, exactly one value missing): XOR of the
//!   elements cancels against the XOR of the full range `[min, min + len]`,
//!   leaving the missing value.
//! - **Presence table** (unsorted input, any number missing): mark each
//!   value's offset from the minimum in a table sized `max - min + 1`.

use crate::algorithms::numeric::Integer;
use crate::containers::Sequence;
use crate::error::{Result, SeqError};

impl<T: Integer> Sequence<T> {
    /// First missing value of an ascending run (difference method)
    ///
    /// Returns `None` for an empty sequence or a run without gaps.
    pub fn missing_single_sorted(&self) -> Option<T> {
        let items = self.as_slice();
        let expected_diff = items.first()?.to_i128();
        items
            .iter()
            .enumerate()
            .find(|(i, item)| item.to_i128() - *i as i128 != expected_diff)
            .and_then(|(i, _)| T::from_i128(i as i128 + expected_diff))
    }

    /// Every missing value of an ascending run (difference method)
    ///
    /// On each gap the expected difference is advanced one value at a time
    /// until it matches `a[i] - i` again. Fails with `RangeTooLarge` if the
    /// gaps add up to more values than `max_presence_table_len`.
    pub fn missing_multiple_sorted(&self) -> Result<Vec<T>> {
        let items = self.as_slice();
        let mut missing = Vec::new();
        let Some(first) = items.first() else {
            return Ok(missing);
        };

        let limit = self.config().max_presence_table_len;
        let mut expected_diff = first.to_i128();
        let mut reported: u128 = 0;
        for (i, item) in items.iter().enumerate() {
            let diff = item.to_i128() - i as i128;
            if diff <= expected_diff {
                continue;
            }
            reported += (diff - expected_diff) as u128;
            if reported > limit as u128 {
                return Err(SeqError::range_too_large(reported, limit));
            }
            while expected_diff < diff {
                missing.extend(T::from_i128(i as i128 + expected_diff));
                expected_diff += 1;
            }
        }
        Ok(missing)
    }

    /// The single missing value of an unsorted contiguous range (XOR method)
    ///
    /// The sequence must hold all but one value of `[min, min + len]`. This
    /// is not validated: for other inputs the value produced by the XOR
    /// identity is returned as is. Returns `None` when the sequence is
    /// empty or when `min + len` is not representable in `T`.
    pub fn missing_single_xor(&self) -> Option<T> {
        let items = self.as_slice();
        let min = items.iter().copied().min()?;
        let present = items.iter().fold(T::ZERO, |acc, &item| acc ^ item);

        let low = min.to_i128();
        let high = low + items.len() as i128;
        if T::from_i128(high).is_none() {
            log::warn!(
                "missing_single_xor: expected range [{}, {}] exceeds the element type",
                low,
                high
            );
            return None;
        }

        let mut expected = T::ZERO;
        for value in low..=high {
            expected = expected ^ T::from_i128(value)?;
        }
        Some(present ^ expected)
    }

    /// Every value absent from `[min, max]` (presence table method)
    ///
    /// Works on unsorted input, reporting values in ascending order. A
    /// sequence whose elements are all equal has no gaps. Fails with
    /// `RangeTooLarge` when `max - min + 1` exceeds `max_presence_table_len`.
    pub fn missing_multiple_hashed(&self) -> Result<Vec<T>> {
        let Some((min, max)) = self.min_max() else {
            return Ok(Vec::new());
        };
        if min == max {
            return Ok(Vec::new());
        }

        let low = min.to_i128();
        let span = (max.to_i128() - low + 1) as u128;
        let limit = self.config().max_presence_table_len;
        if span > limit as u128 {
            return Err(SeqError::range_too_large(span, limit));
        }

        let mut present = vec![false; span as usize];
        for item in self.iter() {
            present[(item.to_i128() - low) as usize] = true;
        }

        Ok(present
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .filter_map(|(offset, _)| T::from_i128(low + offset as i128))
            .collect())
    }
}
