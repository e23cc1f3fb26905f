//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for the controller simulator. It provides:
//! 1. **Cycles:** Total stepped cycles and a per-phase breakdown.
//! 2. **Requests:** Requests admitted and read/write completions.
//! 3. **Reporting:** A plain-text report printed to stdout.

use crate::ctrl::state::State;

/// Counters accumulated while stepping the controller.
///
/// Reset together with the controller; cleared by `Controller::reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CtrlStats {
    /// Total cycles stepped while an operation was in flight.
    pub cycles: u64,
    /// Cycles spent in the ACTIVATE phase.
    pub activate_cycles: u64,
    /// Cycles spent in the READ phase.
    pub read_cycles: u64,
    /// Cycles spent in the WRITE phase.
    pub write_cycles: u64,
    /// Cycles spent in the PRECHARGE phase.
    pub precharge_cycles: u64,
    /// Requests admitted by `start_request`.
    pub requests_started: u64,
    /// READ data phases completed.
    pub reads_completed: u64,
    /// WRITE data phases completed.
    pub writes_completed: u64,
}

impl CtrlStats {
    /// Records one stepped cycle in the given phase.
    pub(crate) fn record_cycle(&mut self, state: State) {
        self.cycles += 1;
        match state {
            State::Activate => self.activate_cycles += 1,
            State::Read => self.read_cycles += 1,
            State::Write => self.write_cycles += 1,
            State::Precharge => self.precharge_cycles += 1,
            State::Idle => {}
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let pct = |n: u64| (n as f64 / cyc as f64) * 100.0;
        println!("\n==========================================================");
        println!("DDR5 CONTROLLER SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("requests.started         {}", self.requests_started);
        println!("requests.reads           {}", self.reads_completed);
        println!("requests.writes          {}", self.writes_completed);
        println!("----------------------------------------------------------");
        println!("PHASE BREAKDOWN");
        println!(
            "  cycles.activate        {} ({:.2}%)",
            self.activate_cycles,
            pct(self.activate_cycles)
        );
        println!(
            "  cycles.read            {} ({:.2}%)",
            self.read_cycles,
            pct(self.read_cycles)
        );
        println!(
            "  cycles.write           {} ({:.2}%)",
            self.write_cycles,
            pct(self.write_cycles)
        );
        println!(
            "  cycles.precharge       {} ({:.2}%)",
            self.precharge_cycles,
            pct(self.precharge_cycles)
        );
        println!("==========================================================");
    }
}
