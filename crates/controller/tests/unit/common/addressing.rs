//! Address Parsing and Decoding Unit Tests.
//!
//! Verifies hex parsing limits, fixed-width field slicing
//! (2/3/16/11 bits MSB-first), composite-key display, ordering,
//! and bit-exact reassembly.

use ddr5_core::common::addr::{DecodedAddr, RequestAddr};
use proptest::prelude::*;

// ══════════════════════════════════════════════════════════
// 1. Hex parsing
// ══════════════════════════════════════════════════════════

#[test]
fn parse_accepts_full_width() {
    assert_eq!(RequestAddr::parse_hex("FFFFFFFF").unwrap().val(), u32::MAX);
}

#[test]
fn parse_accepts_single_digit() {
    assert_eq!(RequestAddr::parse_hex("7").unwrap().val(), 7);
}

#[test]
fn parse_is_case_insensitive() {
    let upper = RequestAddr::parse_hex("DEADBEEF").unwrap();
    let lower = RequestAddr::parse_hex("deadbeef").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn parse_rejects_empty() {
    assert!(RequestAddr::parse_hex("").is_err());
}

#[test]
fn parse_rejects_nine_digits() {
    assert!(RequestAddr::parse_hex("123456789").is_err());
}

#[test]
fn parse_rejects_non_hex() {
    assert!(RequestAddr::parse_hex("ZZZZ").is_err());
}

#[test]
fn parse_rejects_leading_sign() {
    // from_str_radix would accept "+F"; the validator must not
    assert!(RequestAddr::parse_hex("+F").is_err());
}

// ══════════════════════════════════════════════════════════
// 2. Field decoding
// ══════════════════════════════════════════════════════════

#[test]
fn decode_all_ones() {
    let decoded = DecodedAddr::decode(RequestAddr::new(u32::MAX));
    assert_eq!(decoded.bank_group, 3);
    assert_eq!(decoded.bank, 7);
    assert_eq!(decoded.row, 0xFFFF);
    assert_eq!(decoded.column, 0x7FF);
}

#[test]
fn decode_all_zeros() {
    let decoded = DecodedAddr::decode(RequestAddr::new(0));
    assert_eq!(decoded, DecodedAddr::default());
}

#[test]
fn decode_low_bits_are_column() {
    let decoded = DecodedAddr::decode(RequestAddr::new(0xAA));
    assert_eq!(decoded.bank_group, 0);
    assert_eq!(decoded.bank, 0);
    assert_eq!(decoded.row, 0);
    assert_eq!(decoded.column, 0xAA);
}

#[test]
fn decode_mixed_fields() {
    // bg=2, bank=5, row=0x1234, col=0x456
    let raw = (2 << 30) | (5 << 27) | (0x1234 << 11) | 0x456;
    let decoded = DecodedAddr::decode(RequestAddr::new(raw));
    assert_eq!(decoded.bank_group, 2);
    assert_eq!(decoded.bank, 5);
    assert_eq!(decoded.row, 0x1234);
    assert_eq!(decoded.column, 0x456);
}

#[test]
fn decode_field_boundaries() {
    // Row 1 starts at bit 11; column saturates just below it.
    let decoded = DecodedAddr::decode(RequestAddr::new(0x800));
    assert_eq!(decoded.row, 1);
    assert_eq!(decoded.column, 0);
    let decoded = DecodedAddr::decode(RequestAddr::new(0x7FF));
    assert_eq!(decoded.row, 0);
    assert_eq!(decoded.column, 0x7FF);
}

// ══════════════════════════════════════════════════════════
// 3. Composite key display and ordering
// ══════════════════════════════════════════════════════════

#[test]
fn composite_key_text() {
    let raw = (2 << 30) | (5 << 27) | (0x1234 << 11) | 0x456;
    let decoded = DecodedAddr::decode(RequestAddr::new(raw));
    assert_eq!(decoded.to_string(), "2:5:4660:1110");
}

#[test]
fn request_addr_display_is_padded_hex() {
    assert_eq!(RequestAddr::new(0xAA).to_string(), "0x000000aa");
}

#[test]
fn ordering_follows_field_order() {
    // bank-group dominates bank, bank dominates row, row dominates column
    let a = DecodedAddr::decode(RequestAddr::new(0x3FFFFFFF)); // bg=0
    let b = DecodedAddr::decode(RequestAddr::new(0x40000000)); // bg=1
    assert!(a < b);
    let c = DecodedAddr::decode(RequestAddr::new(0x0000_07FF)); // row=0, col max
    let d = DecodedAddr::decode(RequestAddr::new(0x0000_0800)); // row=1, col 0
    assert!(c < d);
}

// ══════════════════════════════════════════════════════════
// 4. Reassembly property
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_reassemble_is_bit_exact(raw in any::<u32>()) {
        let decoded = DecodedAddr::decode(RequestAddr::new(raw));
        prop_assert_eq!(decoded.reassemble().val(), raw);
    }
}
