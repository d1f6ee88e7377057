//! Two-pointer set algebra over ascending sequences
//!
//! Every operation walks both operands once, O(n + m), and returns a newly
//! allocated sequence. Operands must be sorted ascending; unsorted input is
//! not rejected and produces an unspecified result.
//!
//! | operation      | equal keys                     | result capacity |
//! |----------------|--------------------------------|-----------------|
//! | `merge`        | take from `self` first, keep both | `n + m`      |
//! | `union`        | emit once, advance both        | `n + m`         |
//! | `intersection` | emit once, advance both        | `min(n, m)`     |
//! | `difference`   | skip both                      | `n`             |

use crate::containers::Sequence;
use crate::error::Result;

impl<T: PartialOrd + Clone> Sequence<T> {
    /// Merge two ascending sequences, keeping duplicates from both
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = self.sibling(a.len() + b.len())?;
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] <= b[j] {
                result.append(a[i].clone())?;
                i += 1;
            } else {
                result.append(b[j].clone())?;
                j += 1;
            }
        }
        for item in a[i..].iter().chain(&b[j..]) {
            result.append(item.clone())?;
        }
        Ok(result)
    }

    /// Union of two ascending sequences
    ///
    /// A value present in both operands is emitted once; duplicates inside a
    /// single operand are kept.
    pub fn union(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = self.sibling(a.len() + b.len())?;
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                result.append(a[i].clone())?;
                i += 1;
            } else if b[j] < a[i] {
                result.append(b[j].clone())?;
                j += 1;
            } else {
                result.append(a[i].clone())?;
                i += 1;
                j += 1;
            }
        }
        for item in a[i..].iter().chain(&b[j..]) {
            result.append(item.clone())?;
        }
        Ok(result)
    }

    /// Values present in both ascending sequences
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = self.sibling(a.len().min(b.len()))?;
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                i += 1;
            } else if b[j] < a[i] {
                j += 1;
            } else {
                result.append(a[i].clone())?;
                i += 1;
                j += 1;
            }
        }
        Ok(result)
    }

    /// Values of `self` not matched in `other` (`self - other`)
    pub fn difference(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = self.sibling(a.len())?;
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                result.append(a[i].clone())?;
                i += 1;
            } else if b[j] < a[i] {
                j += 1;
            } else {
                i += 1;
                j += 1;
            }
        }
        for item in &a[i..] {
            result.append(item.clone())?;
        }
        Ok(result)
    }
}
