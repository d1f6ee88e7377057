//! # seqkit: growable sequence and classic array algorithms
//!
//! This crate provides [`Sequence<T>`], a vector that manages its own buffer
//! with explicit capacity and length, together with algorithms that operate
//! directly on its contiguous storage.
//!
//! ## Key Features
//!
//! - **Storage core**: amortized doubling growth, deep copy, move-out
//! - **Positional operations**: append, insert, delete, get, set
//! - **Search**: linear search with move-to-front, binary search
//! - **Reordering**: reversal (scratch buffer and in place), sorted insert,
//!   sign partition
//! - **Sorted-set algebra**: merge, union, intersection, difference
//! - **Analytics**: missing elements, duplicates, pair with target sum,
//!   single-scan min/max
//!
//! ## Quick Start
//!
//! ```rust
//! use seqkit::Sequence;
//!
//! let mut seq = Sequence::new(0).unwrap();
//! for value in [1, 2, 4, 5] {
//!     seq.append(value).unwrap();
//! }
//! assert_eq!(seq.missing_single_sorted(), Some(3));
//! assert_eq!(seq.binary_search_loop(&4), Some(2));
//!
//! let other = Sequence::from_slice(&[2, 3, 4]).unwrap();
//! let common = seq.intersection(&other).unwrap();
//! assert_eq!(common.as_slice(), &[2, 4]);
//!
//! assert_eq!(seq.pair_with_sum_sorted(6).unwrap(), Some((1, 5)));
//! assert_eq!(seq.min_max(), Some((1, 5)));
//! ```
//!
//! ## Error policy
//!
//! Lookups that may legitimately find nothing return `Option`. Contract
//! violations (bad index, empty sequence, unsorted input where sortedness
//! is checked) return [`SeqError`]. Allocation failure is reported as
//! [`SeqError::OutOfMemory`].

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;

pub use algorithms::{Duplicate, Integer};
pub use config::{Config, SequenceConfig};
pub use containers::{Sequence, TraceEvent, TraceHook};
pub use error::{Result, SeqError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing seqkit v{}", VERSION);
}
