//! Controller error definitions.
//!
//! This module defines the error handling surface of the simulator. It provides:
//! 1. **Input Errors:** Rejection of malformed or oversized hex input, naming the field.
//! 2. **Protocol Errors:** Rejection of requests issued while an operation is in flight.
//! 3. **Error Traits:** Integration with standard Rust error traits via `thiserror`.
//!
//! Both error kinds are detected synchronously before any state mutation.
//! Reads of unwritten addresses and stepping while idle are normal outcomes,
//! not errors.

use std::fmt;

use thiserror::Error;

use super::constants::{ADDR_HEX_DIGITS, DATA_HEX_DIGITS};
use crate::ctrl::state::State;

/// Identifies which user-supplied input field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    /// The request address field (up to 8 hex digits, 32 bits).
    Address,
    /// The write data field (up to 16 hex digits, 64 bits).
    Data,
}

impl InputField {
    /// Returns the maximum number of hex digits accepted for this field.
    pub fn max_digits(self) -> usize {
        match self {
            Self::Address => ADDR_HEX_DIGITS,
            Self::Data => DATA_HEX_DIGITS,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::Data => write!(f, "data"),
        }
    }
}

/// Errors surfaced by the controller API.
///
/// Every variant is raised before any state is mutated, so a failed call
/// leaves the controller exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The supplied hex string is empty, too long, or contains non-hex characters.
    #[error("invalid {field} input {text:?}: expected 1 to {max_digits} hex digits")]
    InvalidInput {
        /// Which input field failed validation.
        field: InputField,
        /// The offending input text as supplied.
        text: String,
        /// Maximum number of hex digits accepted for the field.
        max_digits: usize,
    },

    /// A request was issued while a prior operation was still in flight.
    #[error("controller is not idle (current state {state})")]
    NotIdle {
        /// The state the controller was in when the request arrived.
        state: State,
    },
}
