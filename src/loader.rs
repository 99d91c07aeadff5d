//! Blocklist loading.
//!
//! One candidate name per line. Lines that are empty or start with `#` are
//! skipped; everything else is stored exactly as written, minus the
//! trailing newline. Surrounding whitespace is part of the name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BlockError, Result};
use crate::table::{LoadOutcome, Table};

/// Counters for one load pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Lines read
    pub lines: usize,
    /// Names stored
    pub inserted: usize,
    /// Names already present
    pub duplicates: usize,
    /// Blank and comment lines
    pub skipped: usize,
}

/// Remove exactly one trailing `\n`, if present.
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}

/// Whether a stripped blocklist line carries a name.
pub fn is_loadable(line: &[u8]) -> bool {
    !line.is_empty() && line[0] != b'#'
}

/// Load every name from a blocklist reader into the table.
///
/// Duplicates are reported and skipped. Allocation failure aborts the load.
pub fn load_reader<R: BufRead>(table: &mut Table, mut reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines += 1;

        let name = strip_line_terminator(&buf);
        if !is_loadable(name) {
            report.skipped += 1;
            continue;
        }

        match table.load(name)? {
            LoadOutcome::Inserted => report.inserted += 1,
            LoadOutcome::Duplicate => {
                info!("Duplicate entry: {}", name.escape_ascii());
                report.duplicates += 1;
            }
        }
    }

    debug!(
        lines = report.lines,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "blocklist loaded"
    );
    Ok(report)
}

/// Load a blocklist file into the table.
pub fn load_file(table: &mut Table, path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BlockError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(table, BufReader::new(file))
}
