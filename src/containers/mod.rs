//! Container types
//!
//! - **`Sequence<T>`** - growable vector with explicit capacity/length,
//!   deep copy and move-out semantics
//! - **`trace`** - optional lifecycle hook for sequence buffers

mod sequence;
pub mod trace;

pub use sequence::Sequence;
pub use trace::{TraceEvent, TraceHook};
