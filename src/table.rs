//! Fixed-size hash table of collision chains.
//!
//! The table is filled once during a load phase and only read afterwards.
//! Every query takes `&self`, so a loaded table can be shared freely
//! between readers.

use tracing::debug;

use crate::chain::Chain;
use crate::config::TableOptions;
use crate::error::{BlockError, Result};
use crate::hash::hash;
use crate::stats::TableStats;

/// Result of loading one name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The name was new and has been stored
    Inserted,
    /// An identical name was already stored; nothing changed
    Duplicate,
}

/// Blocklist index: `size` chains addressed by `hash(name) % size`.
#[derive(Debug)]
pub struct Table {
    chains: Box<[Chain]>,
    entries: usize,
}

impl Table {
    /// Create an empty table with `size` buckets.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_options(TableOptions::new().with_size(size))
    }

    /// Create an empty table from options.
    pub fn with_options(options: TableOptions) -> Result<Self> {
        options.validate()?;

        let mut chains = Vec::new();
        chains.try_reserve_exact(options.size).map_err(|e| {
            BlockError::ResourceExhausted(format!(
                "unable to allocate space for hash table of {} buckets: {}",
                options.size, e
            ))
        })?;
        chains.resize_with(options.size, Chain::new);

        debug!(size = options.size, "created blocklist table");
        Ok(Self {
            chains: chains.into_boxed_slice(),
            entries: 0,
        })
    }

    /// Number of buckets
    pub fn size(&self) -> usize {
        self.chains.len()
    }

    /// Number of stored names
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Bucket index for a name.
    pub fn bucket_of(&self, name: impl AsRef<[u8]>) -> usize {
        // size is at least MIN_TABLE_SIZE, and the remainder fits in usize
        (hash(name.as_ref()) % self.chains.len() as u64) as usize
    }

    /// Insert a name unless it is already present.
    ///
    /// A duplicate leaves the table untouched. The only error is allocation
    /// failure, which should end the load.
    pub fn load(&mut self, name: impl AsRef<[u8]>) -> Result<LoadOutcome> {
        let name = name.as_ref();
        let idx = self.bucket_of(name);
        let chain = &mut self.chains[idx];

        if chain.contains(name) {
            return Ok(LoadOutcome::Duplicate);
        }

        chain.insert_front(name)?;
        self.entries += 1;
        Ok(LoadOutcome::Inserted)
    }

    /// Check whether a name is blocked.
    pub fn query(&self, name: impl AsRef<[u8]>) -> bool {
        let name = name.as_ref();
        self.chains[self.bucket_of(name)].contains(name)
    }

    /// Query many names in parallel.
    #[cfg(feature = "parallel")]
    pub fn query_many<N>(&self, names: &[N]) -> Vec<bool>
    where
        N: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        names.par_iter().map(|name| self.query(name)).collect()
    }

    /// Walk every chain once and report population counts.
    pub fn stats(&self) -> TableStats {
        TableStats::from_chain_lengths(self.size(), self.chains.iter().map(Chain::len))
    }

    /// Chains in bucket order
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}
