//! Algorithms over [`Sequence`](crate::Sequence) storage
//!
//! Each module adds an `impl` block to `Sequence<T>` with the bounds its
//! algorithms need:
//!
//! - [`search`]: linear search with move-to-front, iterative binary search
//! - [`reorder`]: reversal, sorted insertion, sortedness check, sign partition
//! - [`set_operations`]: merge, union, intersection, difference of sorted inputs
//! - [`aggregate`]: max, min, single-scan min/max, sum, average
//! - [`missing`]: missing-element detection (difference, XOR, presence table)
//! - [`duplicates`]: duplicate detection (sorted, hashed, brute force)
//! - [`pair_sum`]: pair with target sum (sorted two-pointer, hashed)
//!
//! Algorithms marked as requiring ascending order do not check it unless
//! their documentation says so.

pub mod aggregate;
pub mod duplicates;
pub mod missing;
pub mod numeric;
pub mod pair_sum;
pub mod reorder;
pub mod search;
pub mod set_operations;

pub use duplicates::Duplicate;
pub use numeric::Integer;
