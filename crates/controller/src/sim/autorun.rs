//! Cancellable auto-run pacing.
//!
//! The original controller re-armed itself with a delayed callback after
//! every step, which made cancellation racy. Here the pacer is an explicit
//! object owned by the caller with a single authoritative `active` flag:
//! [`AutoRun::tick`] checks the flag and the controller's business *before*
//! applying a step, so a cancelled or reset run can never mutate state from
//! a stale tick. The cadence itself (sleeping between ticks) belongs to the
//! caller.

use std::time::Duration;

use tracing::debug;

use crate::ctrl::engine::{Controller, StepReport};

/// Auto-run pacer: steps a busy controller until it returns to idle.
#[derive(Clone, Debug)]
pub struct AutoRun {
    active: bool,
    interval: Duration,
}

impl AutoRun {
    /// Creates an inactive pacer with the given tick interval.
    ///
    /// # Arguments
    ///
    /// * `interval_ms` - Milliseconds between ticks, for callers that sleep
    ///   between [`AutoRun::tick`] calls.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            active: false,
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// Activates the pacer.
    pub fn arm(&mut self) {
        self.active = true;
    }

    /// Deactivates the pacer; any subsequent tick is a guaranteed no-op.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// True while the pacer is armed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Applies at most one step to the controller.
    ///
    /// Returns `None` without touching the controller when the pacer has
    /// been cancelled or the controller is idle; reaching idle disarms the
    /// pacer. A `reset()` between ticks leaves the controller idle, so the
    /// next tick is also a no-op.
    pub fn tick(&mut self, ctrl: &mut Controller) -> Option<StepReport> {
        if !self.active {
            return None;
        }
        if !ctrl.is_busy() {
            debug!("auto-run reached idle, disarming");
            self.active = false;
            return None;
        }
        Some(ctrl.step())
    }
}
