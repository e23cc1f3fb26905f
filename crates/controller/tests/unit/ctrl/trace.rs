//! Signal Trace Unit Tests.
//!
//! Verifies ring-buffer bounding at the configured depth and
//! oldest-first replay.

use ddr5_core::common::SIGNAL_TRACE_DEPTH;
use ddr5_core::ctrl::{BusLine, SignalLevels, SignalTrace};

fn sample(value: u64) -> SignalLevels {
    SignalLevels {
        data_bus: BusLine::Driven(value),
        ..SignalLevels::default()
    }
}

// ══════════════════════════════════════════════════════════
// 1. Recording
// ══════════════════════════════════════════════════════════

#[test]
fn starts_empty() {
    let trace = SignalTrace::new();
    assert!(trace.is_empty());
    assert_eq!(trace.latest(), None);
}

#[test]
fn records_in_order() {
    let mut trace = SignalTrace::new();
    trace.record(sample(1));
    trace.record(sample(2));
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.latest(), Some(sample(2)));
    let values: Vec<_> = trace.iter().map(|s| s.data_bus.value()).collect();
    assert_eq!(values, vec![Some(1), Some(2)]);
}

// ══════════════════════════════════════════════════════════
// 2. Depth bounding
// ══════════════════════════════════════════════════════════

#[test]
fn depth_is_bounded_and_drops_oldest() {
    let mut trace = SignalTrace::new();
    let extra = 5;
    for i in 0..(SIGNAL_TRACE_DEPTH + extra) {
        trace.record(sample(i as u64));
    }
    assert_eq!(trace.len(), SIGNAL_TRACE_DEPTH);
    // The first retained sample is the (extra+1)-th recorded one.
    let first = trace.iter().next().unwrap();
    assert_eq!(first.data_bus.value(), Some(extra as u64));
    assert_eq!(trace.latest(), Some(sample((SIGNAL_TRACE_DEPTH + extra - 1) as u64)));
}

// ══════════════════════════════════════════════════════════
// 3. Clearing
// ══════════════════════════════════════════════════════════

#[test]
fn clear_discards_samples() {
    let mut trace = SignalTrace::new();
    trace.record(sample(1));
    trace.clear();
    assert!(trace.is_empty());
}
