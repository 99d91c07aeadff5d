//! Query stream classification.
//!
//! Unlike loading, queries are not filtered: a blank line looks up the
//! empty name and a `#` line is looked up literally.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::loader::strip_line_terminator;
use crate::table::Table;

/// Classification of a queried name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Blocked,
    NotBlocked,
}

impl Verdict {
    /// Output tag for this verdict
    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::Blocked => "[blocked]",
            Verdict::NotBlocked => "[not blocked]",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Blocked)
    }
}

impl From<bool> for Verdict {
    fn from(blocked: bool) -> Self {
        if blocked {
            Verdict::Blocked
        } else {
            Verdict::NotBlocked
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Counters for one query pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryReport {
    /// Lines classified
    pub queries: usize,
    /// Lines found in the table
    pub blocked: usize,
}

/// Classify a single name.
pub fn classify(table: &Table, name: impl AsRef<[u8]>) -> Verdict {
    Verdict::from(table.query(name))
}

/// Write `<name> <tag>` followed by a newline.
pub fn write_verdict<W: Write>(mut writer: W, name: &[u8], verdict: Verdict) -> Result<()> {
    writer.write_all(name)?;
    writer.write_all(b" ")?;
    writer.write_all(verdict.tag().as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Classify each line of `reader` and write the results to `writer`.
///
/// Output is flushed after every line so interactive callers see each
/// answer as soon as it is computed.
pub fn query_stream<R, W>(table: &Table, mut reader: R, mut writer: W) -> Result<QueryReport>
where
    R: BufRead,
    W: Write,
{
    let mut report = QueryReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let name = strip_line_terminator(&buf);
        let verdict = classify(table, name);
        write_verdict(&mut writer, name, verdict)?;
        writer.flush()?;

        report.queries += 1;
        if verdict.is_blocked() {
            report.blocked += 1;
        }
    }

    debug!(
        queries = report.queries,
        blocked = report.blocked,
        "query stream finished"
    );
    Ok(report)
}
