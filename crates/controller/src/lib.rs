//! DDR5 memory-controller teaching simulator library.
//!
//! This crate implements a cycle-stepped, simplified DDR5 controller FSM with the following:
//! 1. **Common:** Address decoding (bank-group/bank/row/column), input validation, errors.
//! 2. **Controller:** The IDLE/ACTIVATE/READ/WRITE/PRECHARGE engine, typed signals,
//!    the backing row store, and a bounded signal trace.
//! 3. **Simulation:** A cancellable auto-run pacer for timer-driven stepping.
//! 4. **Configuration:** Phase timing and pacing, with JSON loading.
//! 5. **Statistics:** Cycle and request counters with a printed report.
//!
//! There is no hardware interface and no protocol-compliance claim; the
//! "memory" is an in-process key-value store and a cycle is one `step` call.

/// Common types and constants (addresses, operation kinds, errors).
pub mod common;
/// Simulator configuration (defaults, timing, pacing).
pub mod config;
/// Controller core (state machine, signals, store, trace, engine).
pub mod ctrl;
/// Simulation drivers (auto-run pacing).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main controller type; holds the FSM, store, trace, and stats.
pub use crate::ctrl::engine::Controller;
/// Cancellable pacer for auto-run stepping.
pub use crate::sim::autorun::AutoRun;
