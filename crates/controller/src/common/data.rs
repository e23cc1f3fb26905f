//! Operation Kinds and Payload Parsing.
//!
//! This module classifies controller operations and validates user-supplied
//! hex input. It is used for the following:
//! 1. **Request Classification:** Distinguishing read from write requests.
//! 2. **Input Validation:** Rejecting malformed hex before any state mutation.
//! 3. **Payload Conversion:** Producing fixed-width integers, never binary strings.

use super::error::{ControllerError, InputField};

/// Kind of memory operation requested of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpKind {
    /// Read access: the store is looked up at the decoded address.
    #[default]
    Read,

    /// Write access: the pending payload is stored at the decoded address.
    Write,
}

/// Parses a hex field into its integer value, validating up front.
///
/// The text must be 1 to [`InputField::max_digits`] hex digits; anything else
/// fails with [`ControllerError::InvalidInput`] naming the field. Case is
/// ignored.
///
/// # Arguments
///
/// * `text` - The raw hex string as supplied by the caller.
/// * `field` - Which input field the text belongs to (sets the digit limit).
///
/// # Returns
///
/// The parsed value, zero-extended to 64 bits.
pub fn parse_hex(text: &str, field: InputField) -> Result<u64, ControllerError> {
    let max_digits = field.max_digits();
    let invalid = || ControllerError::InvalidInput {
        field,
        text: text.to_owned(),
        max_digits,
    };
    if text.is_empty() || text.len() > max_digits {
        return Err(invalid());
    }
    // from_str_radix alone would also accept a leading sign
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u64::from_str_radix(text, 16).map_err(|_| invalid())
}
