//! Auto-Run Pacer Unit Tests.
//!
//! Verifies the single authoritative active flag: cancelled or idle ticks
//! mutate nothing, and a busy controller is stepped to idle.

use std::time::Duration;

use ddr5_core::AutoRun;
use ddr5_core::common::OpKind;
use ddr5_core::ctrl::State;

use crate::common::harness::controller;

// ══════════════════════════════════════════════════════════
// 1. Guarding
// ══════════════════════════════════════════════════════════

#[test]
fn inactive_pacer_never_steps() {
    let mut ctrl = controller();
    ctrl.start_request("AA", OpKind::Read, None).unwrap();
    let before = ctrl.status();
    let mut pacer = AutoRun::new(500);
    assert!(pacer.tick(&mut ctrl).is_none());
    assert_eq!(ctrl.status(), before);
}

#[test]
fn armed_pacer_on_idle_controller_disarms_without_stepping() {
    let mut ctrl = controller();
    let mut pacer = AutoRun::new(500);
    pacer.arm();
    assert!(pacer.tick(&mut ctrl).is_none());
    assert!(!pacer.is_active());
    assert!(ctrl.signal_trace().is_empty());
}

#[test]
fn cancel_mid_run_stops_further_mutation() {
    let mut ctrl = controller();
    ctrl.start_request("AA", OpKind::Read, None).unwrap();
    let mut pacer = AutoRun::new(500);
    pacer.arm();
    pacer.tick(&mut ctrl).unwrap();
    pacer.tick(&mut ctrl).unwrap();
    pacer.cancel();
    let before = ctrl.status();
    assert!(pacer.tick(&mut ctrl).is_none());
    assert_eq!(ctrl.status(), before);
}

#[test]
fn reset_between_ticks_halts_the_run() {
    let mut ctrl = controller();
    ctrl.start_request("AA", OpKind::Read, None).unwrap();
    let mut pacer = AutoRun::new(500);
    pacer.arm();
    pacer.tick(&mut ctrl).unwrap();
    ctrl.reset();
    // The controller is idle again, so the next tick is a no-op and disarms.
    assert!(pacer.tick(&mut ctrl).is_none());
    assert!(!pacer.is_active());
    assert_eq!(ctrl.status().state, State::Idle);
}

// ══════════════════════════════════════════════════════════
// 2. Running to idle
// ══════════════════════════════════════════════════════════

#[test]
fn runs_a_write_to_completion() {
    let mut ctrl = controller();
    ctrl.start_request("AA", OpKind::Write, Some("FF")).unwrap();
    let mut pacer = AutoRun::new(0);
    pacer.arm();
    let mut ticks = 0;
    while pacer.tick(&mut ctrl).is_some() {
        ticks += 1;
    }
    assert_eq!(ticks, 16); // tRCD + tWR + tRP
    assert!(!pacer.is_active());
    assert!(!ctrl.is_busy());
    assert_eq!(ctrl.store_snapshot().len(), 1);
}

// ══════════════════════════════════════════════════════════
// 3. Interval
// ══════════════════════════════════════════════════════════

#[test]
fn interval_is_taken_from_construction() {
    let pacer = AutoRun::new(250);
    assert_eq!(pacer.interval(), Duration::from_millis(250));
    assert!(!pacer.is_active());
}
