//! Runtime settings and table options.

use std::path::PathBuf;

use crate::error::{BlockError, Result};

/// Default number of table buckets
pub const DEFAULT_TABLE_SIZE: usize = 1873;

/// Smallest allowable number of table buckets
pub const MIN_TABLE_SIZE: usize = 3;

/// Table builder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of buckets, fixed for the table's lifetime
    pub size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl TableOptions {
    /// Create new table options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket count.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Reject sizes below `MIN_TABLE_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_TABLE_SIZE {
            return Err(BlockError::TableTooSmall {
                size: self.size,
                min: MIN_TABLE_SIZE,
            });
        }
        Ok(())
    }
}

/// How the stats report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

/// Settings delivered by the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Blocklist file to load
    pub blocklist: PathBuf,
    /// Table options
    pub table: TableOptions,
    /// Emit table stats to stderr before querying
    pub stats: Option<StatsFormat>,
}

impl Config {
    /// Create a config for `blocklist` with default table options and no stats.
    pub fn new(blocklist: impl Into<PathBuf>) -> Self {
        Self {
            blocklist: blocklist.into(),
            table: TableOptions::default(),
            stats: None,
        }
    }

    /// Set the table size.
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.table = self.table.with_size(size);
        self
    }

    /// Request a stats report.
    pub fn with_stats(mut self, format: StatsFormat) -> Self {
        self.stats = Some(format);
        self
    }

    /// Check the settings before any table is built.
    pub fn validate(&self) -> Result<()> {
        if self.blocklist.as_os_str().is_empty() {
            return Err(BlockError::Config("blockfile is required".into()));
        }
        self.table.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_options() {
        let options = TableOptions::new();
        assert_eq!(options.size, DEFAULT_TABLE_SIZE);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_minimum_size() {
        for size in 0..MIN_TABLE_SIZE {
            let err = TableOptions::new().with_size(size).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config);
        }
        assert!(TableOptions::new().with_size(MIN_TABLE_SIZE).validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new("/tmp/block.txt")
            .with_table_size(101)
            .with_stats(StatsFormat::Json);
        assert_eq!(config.table.size, 101);
        assert_eq!(config.stats, Some(StatsFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_requires_blocklist() {
        let err = Config::new("").validate().unwrap_err();
        assert!(matches!(err, BlockError::Config(_)));
    }

    #[test]
    fn test_config_rejects_small_table() {
        let err = Config::new("block.txt")
            .with_table_size(2)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BlockError::TableTooSmall { size: 2, min: 3 }));
    }
}
