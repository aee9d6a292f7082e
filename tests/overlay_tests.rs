// Host-side tests for the timer overlay text and the frame clock.

use std::time::{Duration, Instant};

use breath_core::{
    format_remaining, overlay_text, BreathController, BreathingConfig, FrameClock, Phase,
    SessionState, MAX_FRAME_DELTA_SEC,
};

#[test]
fn remaining_formats_as_minutes_and_seconds() {
    assert_eq!(format_remaining(0.0), "00:00");
    assert_eq!(format_remaining(8.0), "00:08");
    assert_eq!(format_remaining(61.0), "01:01");
    assert_eq!(format_remaining(3600.0), "60:00");
}

#[test]
fn partial_seconds_round_up() {
    assert_eq!(format_remaining(0.4), "00:01");
    assert_eq!(format_remaining(59.2), "01:00");
    assert_eq!(format_remaining(7.000_000_000_01), "00:07");
}

#[test]
fn bad_remaining_values_read_as_zero() {
    assert_eq!(format_remaining(-3.0), "00:00");
    assert_eq!(format_remaining(f64::NAN), "00:00");
}

#[test]
fn overlay_shows_phase_and_countdown() {
    let s = SessionState {
        phase: Phase::Inhale,
        remaining: 8.0,
        running: true,
        ..Default::default()
    };
    assert_eq!(overlay_text(&s), "Breathe in  00:08");

    let paused = SessionState {
        phase: Phase::Exhale,
        remaining: 75.0,
        running: false,
        ..Default::default()
    };
    assert_eq!(overlay_text(&paused), "Breathe out  01:15");
}

#[test]
fn overlay_reports_finished_session() {
    let config = BreathingConfig::default().with_total(12.0).unwrap();
    let mut c = BreathController::new(config);
    c.start(config);
    c.tick(12.0);
    assert_eq!(overlay_text(&c.state()), "Done  00:00");
}

#[test]
fn phase_labels() {
    let labels: Vec<_> = Phase::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Breathe in", "Hold", "Breathe out", "Rest"]);
}

#[test]
fn frame_clock_measures_deltas() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    assert_eq!(clock.tick_at(t0), 0.0);
    let dt = clock.tick_at(t0 + Duration::from_millis(16));
    assert!((dt - 0.016).abs() < 1e-9);
}

#[test]
fn frame_clock_caps_long_gaps() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.tick_at(t0);
    assert_eq!(clock.tick_at(t0 + Duration::from_secs(5)), MAX_FRAME_DELTA_SEC);

    let mut loose = FrameClock::with_max_delta(10.0);
    loose.tick_at(t0);
    assert!((loose.tick_at(t0 + Duration::from_secs(5)) - 5.0).abs() < 1e-9);
}

#[test]
fn frame_clock_never_goes_backwards() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    let t1 = t0 + Duration::from_millis(100);
    clock.tick_at(t1);
    assert_eq!(clock.tick_at(t0), 0.0);
}

#[test]
fn frame_clock_reset_starts_over() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.tick_at(t0);
    clock.reset();
    assert_eq!(clock.tick_at(t0 + Duration::from_millis(50)), 0.0);
}
