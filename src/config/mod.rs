//! Configuration APIs for seqkit
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON persistence for configuration types. The only
//! configuration type today is [`SequenceConfig`], which controls the
//! growth policy of [`Sequence`](crate::Sequence) and the limits of the
//! analytic algorithms.
//!
//! ```rust
//! use seqkit::config::{Config, SequenceConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize from environment variables with the SEQKIT_ prefix
//! let config = SequenceConfig::from_env()?;
//! assert!(config.validate().is_ok());
//!
//! let fast = SequenceConfig::performance_preset();
//! assert!(fast.default_capacity > config.default_capacity);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod sequence;


pub use sequence::SequenceConfig;

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `SEQKIT_{COMPONENT}_{FIELD}`,
    /// for example `SEQKIT_SEQ_GROWTH_FACTOR=4`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("SEQKIT_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset trading memory for fewer reallocations.
    fn performance_preset() -> Self;

    /// Preset keeping allocations as small as possible.
    fn memory_preset() -> Self;

    /// Preset with predictable allocation sizes and tight analytic limits.
    fn realtime_preset() -> Self;

    /// Balanced preset, the default for most callers.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load configuration from a file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when unset or malformed.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
