//! Row store backing the simulated memory array.
//!
//! A mapping from decoded address to 64-bit payload. Entries are created on
//! WRITE completion and read on READ; a read of an address that was never
//! written yields zero rather than failing. The store is owned and mutated
//! exclusively by the FSM engine and is only emptied by a full reset.

use std::collections::BTreeMap;

use crate::common::addr::DecodedAddr;

/// Ordered key-value store standing in for the memory array.
///
/// Keys are [`DecodedAddr`] values, whose derived ordering matches the
/// composite-key order (bank-group, bank, row, column), so iteration and
/// snapshots come out sorted.
#[derive(Clone, Debug, Default)]
pub struct RowStore {
    entries: BTreeMap<DecodedAddr, u64>,
}

impl RowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` at `addr`, replacing any previous payload.
    pub fn write(&mut self, addr: DecodedAddr, data: u64) {
        self.entries.insert(addr, data);
    }

    /// Returns the payload at `addr`, or zero if the address was never written.
    pub fn read(&self, addr: DecodedAddr) -> u64 {
        self.entries.get(&addr).copied().unwrap_or(0)
    }

    /// Returns true if an entry exists at `addr`.
    pub fn contains(&self, addr: DecodedAddr) -> bool {
        self.entries.contains_key(&addr)
    }

    /// Number of distinct addresses written this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no address has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns all entries in composite-key order.
    pub fn snapshot(&self) -> Vec<(DecodedAddr, u64)> {
        self.entries.iter().map(|(k, v)| (*k, *v)).collect()
    }
}
