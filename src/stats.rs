//! Table population statistics.

use std::fmt;

use serde::Serialize;

/// Chain population counts for a table.
///
/// `shortest_chain` only considers populated buckets and is `0` when
/// every bucket is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableStats {
    /// Number of buckets
    pub size: usize,
    /// Entries across all chains
    pub total_entries: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Length of the shortest non-empty chain
    pub shortest_chain: usize,
}

impl TableStats {
    /// Fold chain lengths into a stats record.
    pub fn from_chain_lengths(size: usize, lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut total_entries = 0;
        let mut longest_chain = 0;
        let mut shortest_chain: Option<usize> = None;

        for len in lengths.into_iter().filter(|&len| len > 0) {
            total_entries += len;
            longest_chain = longest_chain.max(len);
            shortest_chain = Some(shortest_chain.map_or(len, |s| s.min(len)));
        }

        Self {
            size,
            total_entries,
            longest_chain,
            shortest_chain: shortest_chain.unwrap_or(0),
        }
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table size: {}", self.size)?;
        writeln!(f, "Total entries: {}", self.total_entries)?;
        writeln!(f, "Longest chain: {}", self.longest_chain)?;
        writeln!(f, "Shortest chain: {}", self.shortest_chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty() {
        let stats = TableStats::from_chain_lengths(5, [0, 0, 0, 0, 0]);
        assert_eq!(stats.size, 5);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.longest_chain, 0);
        assert_eq!(stats.shortest_chain, 0);
    }

    #[test]
    fn test_shortest_ignores_empty_buckets() {
        let stats = TableStats::from_chain_lengths(4, [0, 3, 1, 0]);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.longest_chain, 3);
        assert_eq!(stats.shortest_chain, 1);
    }

    #[test]
    fn test_display() {
        let stats = TableStats {
            size: 1873,
            total_entries: 2,
            longest_chain: 1,
            shortest_chain: 1,
        };
        assert_eq!(
            stats.to_string(),
            "Table size: 1873\nTotal entries: 2\nLongest chain: 1\nShortest chain: 1\n"
        );
    }

    #[test]
    fn test_json() {
        let stats = TableStats::from_chain_lengths(3, [2, 0, 1]);
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"size\":3"), "got: {}", json);
        assert!(json.contains("\"total_entries\":3"), "got: {}", json);
        assert!(json.contains("\"longest_chain\":2"), "got: {}", json);
        assert!(json.contains("\"shortest_chain\":1"), "got: {}", json);
    }
}
