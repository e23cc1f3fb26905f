//! Row Store Unit Tests.
//!
//! Verifies zero-default reads, overwrite semantics, clearing, and the
//! composite-key ordering of snapshots.

use ddr5_core::common::addr::{DecodedAddr, RequestAddr};
use ddr5_core::ctrl::RowStore;
use pretty_assertions::assert_eq;

fn key(raw: u32) -> DecodedAddr {
    DecodedAddr::decode(RequestAddr::new(raw))
}

// ══════════════════════════════════════════════════════════
// 1. Reads and writes
// ══════════════════════════════════════════════════════════

#[test]
fn unwritten_address_reads_zero() {
    let store = RowStore::new();
    assert_eq!(store.read(key(0xAA)), 0);
    assert!(!store.contains(key(0xAA)));
}

#[test]
fn written_value_reads_back() {
    let mut store = RowStore::new();
    store.write(key(0xAA), 0xFF);
    assert_eq!(store.read(key(0xAA)), 0xFF);
    assert!(store.contains(key(0xAA)));
}

#[test]
fn write_overwrites_previous_payload() {
    let mut store = RowStore::new();
    store.write(key(0xAA), 1);
    store.write(key(0xAA), 2);
    assert_eq!(store.read(key(0xAA)), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn distinct_addresses_are_distinct_entries() {
    let mut store = RowStore::new();
    store.write(key(0xAA), 1);
    store.write(key(0xBB), 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.read(key(0xAA)), 1);
    assert_eq!(store.read(key(0xBB)), 2);
}

// ══════════════════════════════════════════════════════════
// 2. Clearing
// ══════════════════════════════════════════════════════════

#[test]
fn clear_empties_the_store() {
    let mut store = RowStore::new();
    store.write(key(0xAA), 1);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.read(key(0xAA)), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Snapshot ordering
// ══════════════════════════════════════════════════════════

#[test]
fn snapshot_is_sorted_by_composite_key() {
    let mut store = RowStore::new();
    // Inserted out of order: bg=3, bg=0, bg=1
    store.write(key(0xC0000000), 30);
    store.write(key(0x00000001), 10);
    store.write(key(0x40000000), 20);
    let snapshot = store.snapshot();
    assert_eq!(
        snapshot,
        vec![
            (key(0x00000001), 10),
            (key(0x40000000), 20),
            (key(0xC0000000), 30),
        ]
    );
}
