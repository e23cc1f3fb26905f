//! FSM State Unit Tests.
//!
//! Verifies per-phase cycle thresholds against the timing table and the
//! uppercase display names.

use ddr5_core::config::TimingConfig;
use ddr5_core::ctrl::State;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Cycle thresholds
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(State::Idle, 0)]
#[case(State::Activate, 5)]
#[case(State::Read, 5)]
#[case(State::Write, 6)]
#[case(State::Precharge, 5)]
fn default_thresholds(#[case] state: State, #[case] expected: u64) {
    assert_eq!(state.cycles(&TimingConfig::default()), expected);
}

#[test]
fn thresholds_track_custom_timing() {
    let timing = TimingConfig {
        t_rcd: 7,
        t_cl: 11,
        t_wr: 13,
        t_rp: 17,
    };
    assert_eq!(State::Activate.cycles(&timing), 7);
    assert_eq!(State::Read.cycles(&timing), 11);
    assert_eq!(State::Write.cycles(&timing), 13);
    assert_eq!(State::Precharge.cycles(&timing), 17);
}

// ══════════════════════════════════════════════════════════
// 2. Display
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(State::Idle, "IDLE")]
#[case(State::Activate, "ACTIVATE")]
#[case(State::Read, "READ")]
#[case(State::Write, "WRITE")]
#[case(State::Precharge, "PRECHARGE")]
fn display_names(#[case] state: State, #[case] expected: &str) {
    assert_eq!(state.to_string(), expected);
}

#[test]
fn default_state_is_idle() {
    assert_eq!(State::default(), State::Idle);
}
