//! Controller FSM states.
//!
//! The controller rests in `Idle` and walks one operation at a time through
//! `Activate`, then `Read` or `Write`, then `Precharge`, and back to `Idle`.
//! Every transition is cycle-gated by the thresholds in
//! [`TimingConfig`](crate::config::TimingConfig).

use std::fmt;

use crate::config::TimingConfig;

/// Phase of the controller finite-state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Resting state: no operation in flight, ready for a request.
    #[default]
    Idle,

    /// Row activation: the addressed row is being opened.
    Activate,

    /// Read data phase: waiting out tCL before data appears on the bus.
    Read,

    /// Write data phase: waiting out tWR before the payload is committed.
    Write,

    /// Precharge: the bank is closing before the controller returns to idle.
    Precharge,
}

impl State {
    /// Returns the number of cycles that must elapse in this state before
    /// its transition fires. `Idle` has no threshold.
    pub fn cycles(self, timing: &TimingConfig) -> u64 {
        match self {
            Self::Idle => 0,
            Self::Activate => timing.t_rcd,
            Self::Read => timing.t_cl,
            Self::Write => timing.t_wr,
            Self::Precharge => timing.t_rp,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Activate => write!(f, "ACTIVATE"),
            Self::Read => write!(f, "READ"),
            Self::Write => write!(f, "WRITE"),
            Self::Precharge => write!(f, "PRECHARGE"),
        }
    }
}
