//! Global Controller Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Address Geometry:** Field widths, shifts, and masks for request decoding.
//! 2. **Input Limits:** Maximum hex-digit counts for address and data entry.
//! 3. **Trace Constants:** Depth of the retained signal history.

/// Width of a request address in bits.
pub const ADDR_BITS: u32 = 32;

/// Width of the bank-group field in bits (most-significant field).
pub const BANK_GROUP_BITS: u32 = 2;

/// Width of the bank field in bits.
pub const BANK_BITS: u32 = 3;

/// Width of the row field in bits.
pub const ROW_BITS: u32 = 16;

/// Width of the column field in bits (least-significant field).
pub const COLUMN_BITS: u32 = 11;

/// Bit position of the bank-group field within a request address.
pub const BANK_GROUP_SHIFT: u32 = ADDR_BITS - BANK_GROUP_BITS;

/// Bit position of the bank field within a request address.
pub const BANK_SHIFT: u32 = BANK_GROUP_SHIFT - BANK_BITS;

/// Bit position of the row field within a request address.
pub const ROW_SHIFT: u32 = BANK_SHIFT - ROW_BITS;

/// Bit mask for the bank-group field after shifting.
pub const BANK_GROUP_MASK: u32 = (1 << BANK_GROUP_BITS) - 1;

/// Bit mask for the bank field after shifting.
pub const BANK_MASK: u32 = (1 << BANK_BITS) - 1;

/// Bit mask for the row field after shifting.
pub const ROW_MASK: u32 = (1 << ROW_BITS) - 1;

/// Bit mask for the column field.
pub const COLUMN_MASK: u32 = (1 << COLUMN_BITS) - 1;

/// Maximum number of hex digits accepted for a request address (32 bits).
pub const ADDR_HEX_DIGITS: usize = 8;

/// Maximum number of hex digits accepted for a data payload (64 bits).
pub const DATA_HEX_DIGITS: usize = 16;

/// Number of signal samples retained for timing-diagram rendering.
pub const SIGNAL_TRACE_DEPTH: usize = 50;
