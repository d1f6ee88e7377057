//! Sequence growth and algorithm limit configuration.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{Result, SeqError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`Sequence`](crate::Sequence) allocation and growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Capacity used when a sequence is constructed with capacity zero
    pub default_capacity: usize,
    /// Smallest capacity a grow step produces
    pub min_grow_capacity: usize,
    /// Multiplier applied to the old capacity on each grow step
    pub growth_factor: usize,
    /// Largest value range the missing-element scans may cover
    ///
    /// Bounds the presence table built by `missing_multiple_hashed` and the
    /// number of values `missing_multiple_sorted` may report.
    pub max_presence_table_len: usize,
    /// Emit `log` trace records for buffer lifecycle events
    pub log_lifecycle: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            default_capacity: 10,
            min_grow_capacity: 10,
            growth_factor: 2,
            max_presence_table_len: 16 * 1024 * 1024,
            log_lifecycle: true,
        }
    }
}

impl Config for SequenceConfig {
    fn validate(&self) -> Result<()> {
        if self.default_capacity == 0 {
            return Err(SeqError::configuration("default_capacity must be greater than 0"));
        }
        if self.min_grow_capacity == 0 {
            return Err(SeqError::configuration("min_grow_capacity must be greater than 0"));
        }
        if self.growth_factor < 2 {
            return Err(SeqError::configuration(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.max_presence_table_len == 0 {
            return Err(SeqError::configuration(
                "max_presence_table_len must be greater than 0",
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.default_capacity =
            parse_env_var(&format!("{}SEQ_DEFAULT_CAPACITY", prefix), config.default_capacity);
        config.min_grow_capacity =
            parse_env_var(&format!("{}SEQ_MIN_GROW_CAPACITY", prefix), config.min_grow_capacity);
        config.growth_factor =
            parse_env_var(&format!("{}SEQ_GROWTH_FACTOR", prefix), config.growth_factor);
        config.max_presence_table_len = parse_env_var(
            &format!("{}SEQ_MAX_PRESENCE_TABLE", prefix),
            config.max_presence_table_len,
        );
        config.log_lifecycle =
            parse_env_bool(&format!("{}SEQ_LOG_LIFECYCLE", prefix), config.log_lifecycle);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            default_capacity: 64,
            min_grow_capacity: 64,
            growth_factor: 2,
            max_presence_table_len: 256 * 1024 * 1024,
            log_lifecycle: false,
        }
    }

    fn memory_preset() -> Self {
        Self {
            default_capacity: 4,
            min_grow_capacity: 4,
            growth_factor: 2,
            max_presence_table_len: 1024 * 1024,
            log_lifecycle: false,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            default_capacity: 32,
            min_grow_capacity: 32,
            growth_factor: 4,
            max_presence_table_len: 64 * 1024,
            log_lifecycle: false,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            SeqError::configuration(format!("Failed to serialize sequence config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            SeqError::configuration(format!("Failed to write sequence config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeqError::configuration(format!("Failed to read sequence config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SeqError::configuration(format!("Failed to parse sequence config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
