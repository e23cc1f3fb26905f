//! Controller FSM engine.
//!
//! This module owns the whole simulator state and drives it through discrete
//! steps. It performs:
//! 1. **Request Admission:** Full input validation, then Idle → Activate.
//! 2. **Cycle Gating:** One counter per state, compared against the timing table.
//! 3. **Data Phases:** Store lookup on READ, store commit on WRITE, bus/strobe driving.
//! 4. **Completion:** One-shot completion flag, chip-select release, return to Idle.
//!
//! The engine is synchronous and single-threaded: every call returns after at
//! most one transition, and at most one request is in flight (enforced by the
//! Idle gate on [`Controller::start_request`]).

use tracing::{debug, info, trace};

use crate::common::addr::{DecodedAddr, RequestAddr};
use crate::common::data::{OpKind, parse_hex};
use crate::common::error::{ControllerError, InputField};
use crate::config::{Config, TimingConfig};
use crate::stats::CtrlStats;

use super::signals::{
    BusLine, CMD_ACTIVATE, CMD_PRECHARGE, CMD_READ, CMD_WRITE, ChipSelect, SignalLevels,
    StrobeLine,
};
use super::state::State;
use super::store::RowStore;
use super::trace::SignalTrace;

/// Outcome of a single [`Controller::step`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Controller state after the step.
    pub state: State,
    /// Cycles still to elapse before the current state's transition fires;
    /// `None` when the step fired a transition or the controller is idle.
    pub cycles_remaining: Option<u64>,
    /// Value currently driven on the data bus, if any.
    pub bus_value: Option<u64>,
    /// True only for the step that completed a READ or WRITE data phase.
    pub completed: bool,
}

impl StepReport {
    /// The waiting no-op report produced by stepping an idle controller.
    fn waiting() -> Self {
        Self {
            state: State::Idle,
            cycles_remaining: None,
            bus_value: None,
            completed: false,
        }
    }
}

/// Full controller status snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    /// Current FSM state.
    pub state: State,
    /// Cycles elapsed within the current state.
    pub timer: u64,
    /// Chip-select line.
    pub chip_select: ChipSelect,
    /// Data bus (DQ).
    pub data_bus: BusLine,
    /// Data strobe (DQS).
    pub strobe: StrobeLine,
    /// Last command word issued on the command/address pins.
    pub command: u32,
    /// Data produced by the most recent completed READ or WRITE.
    pub last_output: u64,
    /// One-shot completion flag from the most recent step.
    pub completed: bool,
    /// True when the controller can accept a new request.
    pub ready: bool,
}

/// The simplified DDR5 controller finite-state machine.
///
/// Owns every piece of simulator state: FSM phase, cycle counter, decoded
/// address, pending payload, signal levels, the row store, the signal trace,
/// and statistics. Constructed from a [`Config`]; all mutation goes through
/// [`Controller::start_request`], [`Controller::step`], and
/// [`Controller::reset`].
#[derive(Clone, Debug)]
pub struct Controller {
    state: State,
    timer: u64,
    op: OpKind,
    addr: DecodedAddr,
    write_data: u64,
    last_output: u64,
    completed: bool,
    ready: bool,
    signals: SignalLevels,
    command: u32,
    store: RowStore,
    trace: SignalTrace,
    timing: TimingConfig,
    stats: CtrlStats,
}

impl Controller {
    /// Creates an idle controller with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timing(config.timing)
    }

    /// Creates an idle controller with explicit phase timing.
    pub fn with_timing(timing: TimingConfig) -> Self {
        Self {
            state: State::Idle,
            timer: 0,
            op: OpKind::Read,
            addr: DecodedAddr::default(),
            write_data: 0,
            last_output: 0,
            completed: false,
            ready: true,
            signals: SignalLevels::default(),
            command: CMD_READ,
            store: RowStore::new(),
            trace: SignalTrace::new(),
            timing,
            stats: CtrlStats::default(),
        }
    }

    /// Admits a new read or write request.
    ///
    /// Inputs are fully validated before any state mutation: the address must
    /// be 1 to 8 hex digits, and for writes the data must be 1 to 16 hex
    /// digits. For reads any supplied data text is ignored. On success the
    /// controller decodes the address, latches the operation, asserts
    /// chip-select, issues the ACTIVATE command word, and enters `Activate`
    /// with a zeroed cycle counter. The store is not touched.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotIdle`] if an operation is already in flight;
    /// [`ControllerError::InvalidInput`] for malformed address or data text.
    pub fn start_request(
        &mut self,
        addr_hex: &str,
        op: OpKind,
        data_hex: Option<&str>,
    ) -> Result<(), ControllerError> {
        if self.state != State::Idle {
            return Err(ControllerError::NotIdle { state: self.state });
        }
        let raw = RequestAddr::parse_hex(addr_hex)?;
        let data = match op {
            OpKind::Write => parse_hex(data_hex.unwrap_or(""), InputField::Data)?,
            OpKind::Read => 0,
        };

        // Validation complete; mutation starts here.
        let decoded = DecodedAddr::decode(raw);
        self.op = op;
        self.addr = decoded;
        self.write_data = data;
        self.completed = false;
        self.ready = false;
        self.timer = 0;
        self.state = State::Activate;
        self.signals.chip_select = ChipSelect::Asserted;
        self.command = CMD_ACTIVATE | u32::from(decoded.row);
        self.stats.requests_started += 1;
        self.trace.record(self.signals);
        debug!(addr = %raw, key = %decoded, op = ?op, "request accepted");
        Ok(())
    }

    /// Advances the controller by one cycle.
    ///
    /// Stepping an idle controller is the waiting no-op. Otherwise the
    /// per-state counter is incremented; below the state's threshold the
    /// report carries the remaining cycle count, at the threshold the state's
    /// effect fires and the controller transitions with a zeroed counter.
    /// One signal sample is recorded per call.
    pub fn step(&mut self) -> StepReport {
        if self.state == State::Idle {
            trace!("step while idle, waiting for a request");
            return StepReport::waiting();
        }

        self.timer += 1;
        self.completed = false;
        self.stats.record_cycle(self.state);

        let needed = self.state.cycles(&self.timing);
        if self.timer < needed {
            self.trace.record(self.signals);
            return StepReport {
                state: self.state,
                cycles_remaining: Some(needed - self.timer),
                bus_value: self.signals.data_bus.value(),
                completed: false,
            };
        }

        let next = match self.state {
            State::Activate => self.finish_activate(),
            State::Read => self.finish_read(),
            State::Write => self.finish_write(),
            State::Precharge => self.finish_precharge(),
            // Guarded by the idle check above.
            State::Idle => State::Idle,
        };
        trace!(from = %self.state, to = %next, "phase complete");
        self.state = next;
        self.timer = 0;
        self.trace.record(self.signals);
        StepReport {
            state: self.state,
            cycles_remaining: None,
            bus_value: self.signals.data_bus.value(),
            completed: self.completed,
        }
    }

    /// Restores the controller, store, trace, and statistics to their initial
    /// values. Unconditional and safe at any point, including mid-operation.
    pub fn reset(&mut self) {
        info!("controller reset");
        *self = Self::with_timing(self.timing);
    }

    /// Returns the full status snapshot.
    pub fn status(&self) -> Status {
        Status {
            state: self.state,
            timer: self.timer,
            chip_select: self.signals.chip_select,
            data_bus: self.signals.data_bus,
            strobe: self.signals.strobe,
            command: self.command,
            last_output: self.last_output,
            completed: self.completed,
            ready: self.ready,
        }
    }

    /// Returns all store entries in composite-key order.
    pub fn store_snapshot(&self) -> Vec<(DecodedAddr, u64)> {
        self.store.snapshot()
    }

    /// True while an operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.state != State::Idle
    }

    /// The retained signal history.
    pub fn signal_trace(&self) -> &SignalTrace {
        &self.trace
    }

    /// Accumulated statistics.
    pub fn stats(&self) -> &CtrlStats {
        &self.stats
    }

    /// The phase timing in effect.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// tRCD elapsed: issue the READ or WRITE command word. The write strobe
    /// starts toggling ahead of the data it clocks in.
    fn finish_activate(&mut self) -> State {
        match self.op {
            OpKind::Write => {
                self.command = CMD_WRITE;
                self.signals.strobe = StrobeLine::Toggling;
                State::Write
            }
            OpKind::Read => {
                self.command = CMD_READ;
                State::Read
            }
        }
    }

    /// tCL elapsed: data for the addressed key appears on the bus (zero for
    /// addresses never written) and the data phase completes.
    fn finish_read(&mut self) -> State {
        let value = self.store.read(self.addr);
        self.last_output = value;
        self.signals.data_bus = BusLine::Driven(value);
        self.signals.strobe = StrobeLine::Toggling;
        self.completed = true;
        self.stats.reads_completed += 1;
        debug!(key = %self.addr, value = %format_args!("{value:#018x}"), "read complete");
        self.enter_precharge()
    }

    /// tWR elapsed: the pending payload is committed to the store and echoed
    /// on the bus, and the data phase completes.
    fn finish_write(&mut self) -> State {
        let value = self.write_data;
        self.store.write(self.addr, value);
        self.last_output = value;
        self.signals.data_bus = BusLine::Driven(value);
        self.signals.strobe = StrobeLine::Toggling;
        self.completed = true;
        self.stats.writes_completed += 1;
        debug!(key = %self.addr, value = %format_args!("{value:#018x}"), "write complete");
        self.enter_precharge()
    }

    /// Data phase done: deselect the device and issue PRECHARGE. The bank
    /// closes internally while the counter runs out tRP.
    fn enter_precharge(&mut self) -> State {
        self.signals.chip_select = ChipSelect::Deasserted;
        self.command = CMD_PRECHARGE;
        State::Precharge
    }

    /// tRP elapsed: release the data path and accept requests again.
    fn finish_precharge(&mut self) -> State {
        self.signals.release_data();
        self.ready = true;
        debug!("bank precharged, controller idle");
        State::Idle
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
