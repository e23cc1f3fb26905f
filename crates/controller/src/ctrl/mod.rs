//! Controller core (state machine, signals, store, trace, engine).
//!
//! This module groups everything that makes up the controller proper:
//! 1. **State:** The FSM phase enum and its cycle thresholds.
//! 2. **Signals:** Typed chip-select, data bus, strobe, and command words.
//! 3. **Store:** The ordered key-value memory array.
//! 4. **Trace:** Bounded signal history for waveform rendering.
//! 5. **Engine:** The `Controller` that owns and drives all of the above.

/// FSM engine and the public request/step/status API.
pub mod engine;

/// Typed interface signal levels and command word encodings.
pub mod signals;

/// FSM state definitions.
pub mod state;

/// Key-value row store.
pub mod store;

/// Bounded signal history.
pub mod trace;

pub use engine::{Controller, Status, StepReport};
pub use signals::{BusLine, ChipSelect, SignalLevels, StrobeLine};
pub use state::State;
pub use store::RowStore;
pub use trace::SignalTrace;
