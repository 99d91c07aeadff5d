//! Collision chain for a single table bucket.

use crate::error::{BlockError, Result};

/// Names sharing one bucket.
///
/// Entries are owned byte strings. The vector keeps them in insertion
/// order; `iter` yields them newest first. A chain does not enforce
/// uniqueness itself: the table checks `contains` before `insert_front`.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    entries: Vec<Box<[u8]>>,
}

impl Chain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an entry byte-equal to `name` is present.
    pub fn contains(&self, name: &[u8]) -> bool {
        self.entries.iter().any(|entry| **entry == *name)
    }

    /// Store a copy of `name` as the newest entry.
    ///
    /// Fails only when the copy or the chain growth cannot be allocated.
    pub fn insert_front(&mut self, name: &[u8]) -> Result<()> {
        let mut owned = Vec::new();
        owned.try_reserve_exact(name.len()).map_err(|e| {
            BlockError::ResourceExhausted(format!("chain entry of {} bytes: {}", name.len(), e))
        })?;
        owned.extend_from_slice(name);

        self.entries
            .try_reserve(1)
            .map_err(|e| BlockError::ResourceExhausted(format!("chain growth: {}", e)))?;
        self.entries.push(owned.into_boxed_slice());
        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().rev().map(|entry| &**entry)
    }
}
