//! Request Address types and field decoding.
//!
//! This module defines strong types for controller request addresses to keep
//! raw values and decoded fields apart. It provides:
//! 1. **Type Safety:** A newtype for the raw 32-bit request address.
//! 2. **Field Decoding:** Fixed-width slicing into bank-group, bank, row, and column.
//! 3. **Store Keying:** A composite, ordered key for the backing row store.
//!
//! Field widths are 2/3/16/11 bits, most-significant-first, and always sum to
//! the full 32 address bits, so decoding followed by [`DecodedAddr::reassemble`]
//! is bit-exact.

use std::fmt;

use super::constants::{
    BANK_GROUP_MASK, BANK_GROUP_SHIFT, BANK_MASK, BANK_SHIFT, COLUMN_MASK, ROW_MASK, ROW_SHIFT,
};
use super::data::parse_hex;
use super::error::{ControllerError, InputField};

/// A raw 32-bit request address as supplied to the controller.
///
/// Request addresses arrive as hex text and are validated before any state
/// mutation; decoding splits them into the physical bank/row/column geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestAddr(pub u32);

impl RequestAddr {
    /// Creates a new request address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// A new `RequestAddr` instance wrapping the provided address.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// The underlying 32-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }

    /// Parses a hex string of 1 to 8 digits into a request address.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw hex string as supplied by the caller.
    ///
    /// # Returns
    ///
    /// The parsed address, or [`ControllerError::InvalidInput`] naming the
    /// address field if the text is empty, too long, or not hex.
    pub fn parse_hex(text: &str) -> Result<Self, ControllerError> {
        let value = parse_hex(text, InputField::Address)?;
        Ok(Self(value as u32))
    }
}

impl fmt::Display for RequestAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A request address decoded into its bank-group, bank, row, and column fields.
///
/// The derived ordering follows field declaration order (bank-group, bank,
/// row, column), which is exactly the composite-key order used by the row
/// store and its snapshots. `Display` renders the composite key text
/// (`"bg:bank:row:col"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DecodedAddr {
    /// Bank-group index (2 bits).
    pub bank_group: u8,
    /// Bank index within the group (3 bits).
    pub bank: u8,
    /// Row address (16 bits).
    pub row: u16,
    /// Column address (11 bits).
    pub column: u16,
}

impl DecodedAddr {
    /// Decodes a raw request address by fixed-width slicing.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit request address.
    ///
    /// # Returns
    ///
    /// The four address fields, extracted most-significant-first.
    pub fn decode(addr: RequestAddr) -> Self {
        let raw = addr.val();
        Self {
            bank_group: ((raw >> BANK_GROUP_SHIFT) & BANK_GROUP_MASK) as u8,
            bank: ((raw >> BANK_SHIFT) & BANK_MASK) as u8,
            row: ((raw >> ROW_SHIFT) & ROW_MASK) as u16,
            column: (raw & COLUMN_MASK) as u16,
        }
    }

    /// Reassembles the original raw address from the decoded fields.
    ///
    /// Bit-exact inverse of [`DecodedAddr::decode`] for every 32-bit address.
    ///
    /// # Returns
    ///
    /// The raw request address the fields were decoded from.
    pub fn reassemble(&self) -> RequestAddr {
        let raw = (u32::from(self.bank_group) << BANK_GROUP_SHIFT)
            | (u32::from(self.bank) << BANK_SHIFT)
            | (u32::from(self.row) << ROW_SHIFT)
            | u32::from(self.column);
        RequestAddr(raw)
    }
}

impl fmt::Display for DecodedAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.bank_group, self.bank, self.row, self.column
        )
    }
}
