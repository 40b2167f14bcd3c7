//! Blink cycle acceptance tests.
//!
//! # Acceptance Criteria
//!
//! - Output starts OFF and stays OFF until the off duration has elapsed
//! - Each phase lasts exactly its configured duration
//! - The pin is written on every update, changed or not
//! - Reset restores power-up behaviour

use super::common::{poll, Edge, Rig};
use blink_common::ManualClock;
use blink_core::{from_fn, BlinkTimer, RecordingSink};

#[test]
fn initial_state_is_off() {
    let mut rig = Rig::new(1000, 500);
    assert!(!rig.timer.is_on());
    assert_eq!(rig.writes(), 0);

    assert!(!rig.tick());
    assert!(!rig.timer.is_on());
}

#[test]
fn no_early_toggle() {
    let mut rig = Rig::new(1000, 500);
    assert!(!rig.tick());

    for _ in 1..500 {
        assert!(!rig.advance(1));
    }

    assert!(rig.advance(1));
}

#[test]
fn asymmetric_cycle_edges() {
    let clock = ManualClock::new();
    let mut timer = BlinkTimer::new(RecordingSink::new(), 1000, 500);

    // 0..=4950 ms in 50 ms steps
    let edges = poll(&mut timer, &clock, 50, 100);

    assert_eq!(
        edges,
        vec![
            Edge { at: 500, on: true },
            Edge { at: 1500, on: false },
            Edge { at: 2000, on: true },
            Edge { at: 3000, on: false },
            Edge { at: 3500, on: true },
            Edge { at: 4500, on: false },
        ]
    );
    assert_eq!(timer.output().write_count(), 100);
}

#[test]
fn different_timing_configurations() {
    for (on, off) in [(100, 100), (5000, 5000), (3000, 200)] {
        let mut rig = Rig::new(on, off);

        assert!(rig.advance(off), "({on}, {off}) should turn on");
        assert!(!rig.advance(on), "({on}, {off}) should turn off");
    }
}

#[test]
fn coarse_polling_toggles_late_not_twice() {
    let clock = ManualClock::new();
    let mut timer = BlinkTimer::new(RecordingSink::new(), 1000, 500);

    // Polling slower than either phase: one toggle per update
    let edges = poll(&mut timer, &clock, 1700, 4);

    assert_eq!(
        edges,
        vec![
            Edge { at: 1700, on: true },
            Edge { at: 3400, on: false },
            Edge { at: 5100, on: true },
        ]
    );
}

#[test]
fn stable_state_when_time_unchanged() {
    let mut rig = Rig::new(1000, 500);
    assert!(rig.advance(500));
    let toggled_at = rig.timer.last_toggle_time();

    for _ in 0..3 {
        assert!(rig.tick());
        assert_eq!(rig.timer.last_toggle_time(), toggled_at);
    }
}

#[test]
fn output_written_every_call() {
    let mut rig = Rig::new(1000, 500);

    rig.tick();
    assert_eq!(rig.writes(), 1);
    rig.tick();
    assert_eq!(rig.writes(), 2);
}

#[test]
fn zero_durations_alternate() {
    let mut rig = Rig::new(0, 0);

    assert!(rig.tick());
    assert!(!rig.tick());
    assert!(rig.tick());
    assert!(!rig.advance(1234));
}

#[test]
fn reset_restores_power_up_behaviour() {
    let mut rig = Rig::new(1000, 500);
    assert!(rig.advance(500));

    rig.timer.reset();
    rig.clock.reset();

    assert!(!rig.timer.is_on());
    assert!(!rig.pin_state());
    assert_eq!(rig.timer.last_toggle_time(), 0);

    assert!(!rig.tick());
    assert!(rig.advance(500));
}

#[test]
fn borrowed_closure_sink() {
    let mut levels = Vec::new();
    {
        let mut sink = from_fn(|on| levels.push(on));
        let mut timer = BlinkTimer::new(&mut sink, 10, 10);
        for now in [0, 10, 15, 20] {
            timer.update(now);
        }
        timer.reset();
    }

    assert_eq!(levels, [false, true, true, false, false]);
}
