//! dnsblock - A hash-table blocklist engine for domain names
//!
//! Loads a list of blocked names into a fixed-size hash table with chained
//! buckets, then classifies names read from a query stream as blocked or
//! not blocked. Matching is exact and byte-for-byte: no case folding and no
//! trimming beyond the trailing newline.
//!
//! # Example
//!
//! ```rust
//! use dnsblock::{load_reader, Table, Verdict, classify};
//!
//! let blocklist = "
//! ads.example.com
//! ## trackers
//! tracker.example.net
//! ads.example.com
//! ";
//!
//! let mut table = Table::new(1873).unwrap();
//! let report = load_reader(&mut table, blocklist.as_bytes()).unwrap();
//! assert_eq!(report.inserted, 2);
//! assert_eq!(report.duplicates, 1);
//!
//! assert_eq!(classify(&table, "ads.example.com"), Verdict::Blocked);
//! assert_eq!(classify(&table, "safe.example.org"), Verdict::NotBlocked);
//! ```
//!
//! # Blocklist Format
//!
//! | Line | Effect |
//! |------|--------|
//! | `ads.example.com` | Stored as `ads.example.com` |
//! | `# comment` | Skipped |
//! | (empty) | Skipped |
//! | ` padded.com ` | Stored with its spaces |
//!
//! Query lines are never skipped: an empty line queries the empty name.

pub mod chain;
pub mod config;
pub mod error;
pub mod hash;
pub mod loader;
pub mod query;
pub mod stats;
pub mod table;

use std::io::{BufRead, Write};

use tracing::debug;

// Re-export commonly used items
pub use chain::Chain;
pub use config::{Config, StatsFormat, TableOptions, DEFAULT_TABLE_SIZE, MIN_TABLE_SIZE};
pub use error::{BlockError, ErrorKind, Result};
pub use hash::hash;
pub use loader::{is_loadable, load_file, load_reader, strip_line_terminator, LoadReport};
pub use query::{classify, query_stream, write_verdict, QueryReport, Verdict};
pub use stats::TableStats;
pub use table::{LoadOutcome, Table};

/// Build, load and query a table in one pass.
///
/// Loads `config.blocklist`, writes the stats report to `diag` when
/// requested, then answers every line of `input` on `output`. The table is
/// dropped on return.
pub fn run<R, W, E>(config: &Config, input: R, output: W, mut diag: E) -> Result<QueryReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    config.validate()?;

    let mut table = Table::with_options(config.table)?;
    let loaded = load_file(&mut table, &config.blocklist)?;
    debug!(
        path = %config.blocklist.display(),
        inserted = loaded.inserted,
        duplicates = loaded.duplicates,
        "blocklist ready"
    );

    match config.stats {
        Some(StatsFormat::Text) => write!(diag, "{}", table.stats())?,
        Some(StatsFormat::Json) => writeln!(diag, "{}", table.stats().to_json()?)?,
        None => {}
    }
    diag.flush()?;

    query_stream(&table, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_full_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.txt");
        fs::write(
            &path,
            "ads.example.com\n# comment\n\ntracker.example.net\nads.example.com\n",
        )
        .unwrap();

        let config = Config::new(&path).with_stats(StatsFormat::Text);
        let input = "ads.example.com\ntracker.example.net\nsafe.example.org\n\n";
        let mut output = Vec::new();
        let mut diag = Vec::new();

        let report = run(&config, input.as_bytes(), &mut output, &mut diag).unwrap();
        assert_eq!(report.queries, 4);
        assert_eq!(report.blocked, 2);

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ads.example.com [blocked]\n\
             tracker.example.net [blocked]\n\
             safe.example.org [not blocked]\n \
             [not blocked]\n"
        );

        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("Table size: 1873"), "got: {}", diag);
        assert!(diag.contains("Total entries: 2"), "got: {}", diag);
    }

    #[test]
    fn test_run_json_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.txt");
        fs::write(&path, "a.com\nb.com\n").unwrap();

        let config = Config::new(&path)
            .with_table_size(3)
            .with_stats(StatsFormat::Json);
        let mut diag = Vec::new();
        run(&config, "".as_bytes(), Vec::new(), &mut diag).unwrap();

        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("\"size\":3"), "got: {}", diag);
        assert!(diag.contains("\"total_entries\":2"), "got: {}", diag);
    }

    #[test]
    fn test_run_without_stats_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.txt");
        fs::write(&path, "a.com\n").unwrap();

        let mut diag = Vec::new();
        run(&Config::new(&path), "a.com\n".as_bytes(), Vec::new(), &mut diag).unwrap();
        assert!(diag.is_empty());
    }

    #[test]
    fn test_run_missing_blocklist() {
        let config = Config::new("/nonexistent/path/block.txt");
        let err = run(&config, "".as_bytes(), Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_run_small_table() {
        let config = Config::new("block.txt").with_table_size(2);
        let err = run(&config, "".as_bytes(), Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
