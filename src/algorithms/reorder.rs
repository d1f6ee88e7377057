//! Reversal, sorted insertion and sign partitioning.

use crate::algorithms::numeric::Integer;
use crate::containers::Sequence;
use crate::error::Result;
use std::ptr;

impl<T> Sequence<T> {
    /// Reverse through an auxiliary buffer of `len()` slots
    ///
    /// The mirror image is written into the scratch buffer and copied back.
    /// O(n) time and O(n) extra space; fails only if the scratch buffer
    /// cannot be allocated, in which case the sequence is unchanged.
    pub fn reverse(&mut self) -> Result<()> {
        let len = self.len();
        if len < 2 {
            return Ok(());
        }

        // Scratch keeps len 0: dropping it frees the buffer without
        // touching the values moved through it.
        let mut scratch: Sequence<T> = self.sibling(len)?;
        unsafe {
            let src = self.as_mut_ptr();
            let dst = scratch.as_mut_ptr();
            for i in 0..len {
                ptr::copy_nonoverlapping(src.add(len - 1 - i), dst.add(i), 1);
            }
            ptr::copy_nonoverlapping(dst, src, len);
        }
        Ok(())
    }

    /// Reverse by swapping from both ends toward the middle, O(1) space
    pub fn reverse_in_place(&mut self) {
        let items = self.as_mut_slice();
        if items.len() < 2 {
            return;
        }
        let (mut i, mut j) = (0, items.len() - 1);
        while i < j {
            items.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
}

impl<T: PartialOrd> Sequence<T> {
    /// Insert `value` after every element not greater than it, scanning from the end
    ///
    /// Keeps ascending order only if the sequence was ascending before.
    pub fn insert_sort(&mut self, value: T) -> Result<()> {
        let items = self.as_slice();
        let mut index = items.len();
        while index > 0 && items[index - 1] > value {
            index -= 1;
        }
        self.insert(index, value)
    }

    /// Check for ascending (non-decreasing) order
    ///
    /// Empty and single-element sequences are sorted.
    pub fn is_sorted(&self) -> bool {
        self.as_slice().windows(2).all(|pair| !(pair[0] > pair[1]))
    }
}

impl<T: Integer> Sequence<T> {
    /// Move negative values before non-negative ones
    ///
    /// Two-pointer partition; not stable and not a sort.
    pub fn rearrange(&mut self) {
        let items = self.as_mut_slice();
        if items.len() < 2 {
            return;
        }
        let (mut i, mut j) = (0, items.len() - 1);
        while i < j {
            while i < j && items[i] < T::ZERO {
                i += 1;
            }
            while j > i && items[j] >= T::ZERO {
                j -= 1;
            }
            if i < j {
                items.swap(i, j);
            }
        }
    }
}
