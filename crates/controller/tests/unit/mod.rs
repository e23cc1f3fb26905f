//! # Unit Components
//!
//! This module serves as the central hub for unit tests of the simulator's
//! building blocks: address handling, configuration, the controller core,
//! the simulation drivers, and statistics.



/// Unit tests for the controller core (engine, signals, state, store, trace).
pub mod ctrl;

/// Unit tests for simulation drivers (auto-run pacing).
pub mod sim;
