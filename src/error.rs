//! Error handling for the seqkit library
//!
//! Contract violations (bad index, empty input, broken sortedness) are
//! reported as [`SeqError`] values. Expected "not found" outcomes are not
//! errors and use `Option` instead.

use thiserror::Error;

/// Main error type for the seqkit library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Memory allocation failures, including capacity arithmetic overflow
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Position outside the valid range of the operation
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Operation undefined on an empty sequence
    #[error("Empty sequence: {operation} requires at least one element")]
    Empty {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Operation requires ascending order and detected otherwise
    #[error("Sequence not sorted: {operation} requires ascending order")]
    NotSorted {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Value range too wide for a presence table
    #[error("Range too large: span {span} exceeds limit {limit}")]
    RangeTooLarge {
        /// Number of slots the table would need
        span: u128,
        /// Configured maximum
        limit: usize,
    },

    /// Arithmetic result not representable in the element type
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the overflowing operation
        operation: &'static str,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl SeqError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an empty-sequence error
    pub fn empty(operation: &'static str) -> Self {
        Self::Empty { operation }
    }

    /// Create a not-sorted error
    pub fn not_sorted(operation: &'static str) -> Self {
        Self::NotSorted { operation }
    }

    /// Create a range-too-large error
    pub fn range_too_large(span: u128, limit: usize) -> Self {
        Self::RangeTooLarge { span, limit }
    }

    /// Create an overflow error
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => false,
            Self::OutOfBounds { .. } => true,
            Self::Empty { .. } => true,
            Self::NotSorted { .. } => true,
            Self::RangeTooLarge { .. } => true,
            Self::Overflow { .. } => true,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::OutOfBounds { .. } => "bounds",
            Self::Empty { .. } => "empty",
            Self::NotSorted { .. } => "order",
            Self::RangeTooLarge { .. } => "range",
            Self::Overflow { .. } => "arithmetic",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SeqError>;

/// Assert that an index addresses a live element
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(SeqError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that an index is a valid insertion point (`index <= size`)
#[inline]
pub fn check_insert_position(index: usize, size: usize) -> Result<()> {
    if index > size {
        Err(SeqError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
