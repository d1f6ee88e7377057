//! Buffer lifecycle observation
//!
//! A [`Sequence`](crate::Sequence) reports allocation, growth, copy, move
//! and release of its buffer as [`TraceEvent`]s. Events go to the `log`
//! facade at trace level and, when installed, to a per-sequence
//! [`TraceHook`]. No hook is installed by default.

use std::fmt;
use std::sync::Arc;

/// A buffer lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A buffer with `capacity` slots was allocated for a new sequence
    Allocated {
        /// Allocated slot count
        capacity: usize,
    },
    /// The buffer was replaced by a larger one
    Grown {
        /// Capacity before growth
        from: usize,
        /// Capacity after growth
        to: usize,
    },
    /// A deep copy was made
    Copied {
        /// Capacity of the copy
        capacity: usize,
        /// Live elements copied
        len: usize,
    },
    /// Ownership of the buffer was transferred out, leaving the source empty
    Moved {
        /// Live elements transferred
        len: usize,
    },
    /// The buffer was released
    Released {
        /// Capacity of the released buffer
        capacity: usize,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocated { capacity } => write!(f, "allocated {} slots", capacity),
            Self::Grown { from, to } => write!(f, "grew from {} to {} slots", from, to),
            Self::Copied { capacity, len } => {
                write!(f, "copied {} elements into {} slots", len, capacity)
            }
            Self::Moved { len } => write!(f, "moved {} elements", len),
            Self::Released { capacity } => write!(f, "released {} slots", capacity),
        }
    }
}

/// Callback invoked for every [`TraceEvent`] of a sequence
pub type TraceHook = Arc<dyn Fn(&TraceEvent) + Send + Sync>;
