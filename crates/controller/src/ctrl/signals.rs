//! Controller interface signals.
//!
//! This module defines the typed signal levels exposed by the controller. It
//! performs:
//! 1. **Chip Select:** Active-low device selection with a single assert/deassert point.
//! 2. **Data Bus:** High-impedance or driven 64-bit value (DQ).
//! 3. **Data Strobe:** Idle or toggling validity strobe (DQS).
//! 4. **Command Words:** The command/address pin encodings issued per phase.
//!
//! Chip-select follows one consistent convention: asserted when a request is
//! accepted, deasserted when the data phase completes and the bank enters
//! precharge.

use std::fmt;

/// Command word flag for ACTIVATE; OR'd with the 16-bit row address.
pub const CMD_ACTIVATE: u32 = 0x4000;

/// Command word for READ.
pub const CMD_READ: u32 = 0x0000;

/// Command word for WRITE.
pub const CMD_WRITE: u32 = 0x0800;

/// Command word for PRECHARGE.
pub const CMD_PRECHARGE: u32 = 0x2000;

/// Chip-select line (active low).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipSelect {
    /// Device selected (electrical low).
    Asserted,

    /// Device deselected (electrical high).
    #[default]
    Deasserted,
}

impl ChipSelect {
    /// Returns true when the device is selected.
    pub fn is_asserted(self) -> bool {
        self == Self::Asserted
    }

    /// Returns the electrical level of the line: 0 when asserted, 1 otherwise.
    pub fn level(self) -> u8 {
        match self {
            Self::Asserted => 0,
            Self::Deasserted => 1,
        }
    }
}

impl fmt::Display for ChipSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Data bus line (DQ): high impedance between transfers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BusLine {
    /// Bus released, no agent driving it.
    #[default]
    HighZ,

    /// Bus driven with a 64-bit data value.
    Driven(u64),
}

impl BusLine {
    /// Returns the driven value, or `None` when the bus is released.
    pub fn value(self) -> Option<u64> {
        match self {
            Self::HighZ => None,
            Self::Driven(value) => Some(value),
        }
    }
}

impl fmt::Display for BusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighZ => write!(f, "Z"),
            Self::Driven(value) => write!(f, "{value:016x}"),
        }
    }
}

/// Data strobe line (DQS): toggles while data is valid on the bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrobeLine {
    /// Strobe released.
    #[default]
    Idle,

    /// Strobe toggling, data on the bus is valid.
    Toggling,
}

impl StrobeLine {
    /// Returns true while the strobe is toggling.
    pub fn is_toggling(self) -> bool {
        self == Self::Toggling
    }
}

impl fmt::Display for StrobeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Z"),
            Self::Toggling => write!(f, "S"),
        }
    }
}

/// Snapshot of all controller interface signal levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignalLevels {
    /// Chip-select line (active low).
    pub chip_select: ChipSelect,
    /// Data bus (DQ).
    pub data_bus: BusLine,
    /// Data strobe (DQS).
    pub strobe: StrobeLine,
}

impl SignalLevels {
    /// Releases the data path: bus to high impedance, strobe idle.
    ///
    /// Chip-select is left untouched; it has its own assert/deassert points.
    pub fn release_data(&mut self) {
        self.data_bus = BusLine::HighZ;
        self.strobe = StrobeLine::Idle;
    }
}
