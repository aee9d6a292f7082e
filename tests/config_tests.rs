// Host-side tests for breathing configuration and the preset list.

use breath_core::{
    default_preset, find_preset, presets, BreathingConfig, ConfigError, Phase,
    DEFAULT_SESSION_SEC,
};

#[test]
fn valid_config_is_accepted() {
    let c = BreathingConfig::new(4.0, 7.0, 8.0, 0.0, 120.0).unwrap();
    assert_eq!(c.duration_of(Phase::Hold), 7.0);
    assert_eq!(c.cycle_seconds(), 19.0);
}

#[test]
fn negative_phase_duration_is_rejected() {
    let err = BreathingConfig::new(4.0, -1.0, 8.0, 0.0, 60.0).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidPhaseDuration {
            phase: Phase::Hold,
            value: -1.0
        }
    );
    assert!(err.to_string().contains("hold"));
}

#[test]
fn non_finite_phase_duration_is_rejected() {
    let err = BreathingConfig::new(f64::NAN, 0.0, 8.0, 0.0, 60.0).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidPhaseDuration {
            phase: Phase::Inhale,
            ..
        }
    ));
}

#[test]
fn session_length_must_be_positive() {
    assert_eq!(
        BreathingConfig::new(4.0, 0.0, 8.0, 0.0, 0.0),
        Err(ConfigError::InvalidTotal(0.0))
    );
    assert!(matches!(
        BreathingConfig::new(4.0, 0.0, 8.0, 0.0, f64::INFINITY),
        Err(ConfigError::InvalidTotal(_))
    ));
}

#[test]
fn all_zero_pattern_is_rejected() {
    assert_eq!(
        BreathingConfig::new(0.0, 0.0, 0.0, 0.0, 60.0),
        Err(ConfigError::EmptyCycle)
    );
}

#[test]
fn duration_of_reads_bad_values_as_zero() {
    let c = BreathingConfig {
        inhale: -3.0,
        hold: f64::NAN,
        exhale: 2.0,
        pause: f64::INFINITY,
        total: 10.0,
    };
    assert_eq!(c.duration_of(Phase::Inhale), 0.0);
    assert_eq!(c.duration_of(Phase::Hold), 0.0);
    assert_eq!(c.duration_of(Phase::Pause), 0.0);
    assert_eq!(c.first_active_phase(), Phase::Exhale);
}

#[test]
fn next_active_phase_skips_zero_phases() {
    let c = BreathingConfig {
        inhale: 4.0,
        hold: 0.0,
        exhale: 8.0,
        pause: 0.0,
        total: 60.0,
    };
    assert_eq!(c.next_active_phase(Phase::Inhale), Phase::Exhale);
    assert_eq!(c.next_active_phase(Phase::Exhale), Phase::Inhale);
}

#[test]
fn breaths_per_minute_follows_cycle_length() {
    let c = BreathingConfig::new(5.5, 0.0, 5.5, 0.0, 60.0).unwrap();
    assert!((c.breaths_per_minute() - 60.0 / 11.0).abs() < 1e-9);
    let empty = BreathingConfig {
        inhale: 0.0,
        hold: 0.0,
        exhale: 0.0,
        pause: 0.0,
        total: 60.0,
    };
    assert_eq!(empty.breaths_per_minute(), 0.0);
}

#[test]
fn with_total_keeps_pattern() {
    let c = BreathingConfig::default().with_total(300.0).unwrap();
    assert_eq!(c.inhale, 4.0);
    assert_eq!(c.exhale, 8.0);
    assert_eq!(c.total, 300.0);
    assert!(BreathingConfig::default().with_total(-1.0).is_err());
}

#[test]
fn builtin_presets_are_valid_and_unique() {
    let all = presets();
    assert!(!all.is_empty());
    for (i, p) in all.iter().enumerate() {
        assert!(p.config.validate().is_ok(), "preset {} is invalid", p.id);
        assert_eq!(p.config.total, DEFAULT_SESSION_SEC);
        assert!(
            all[i + 1..].iter().all(|q| q.id != p.id),
            "duplicate preset id {}",
            p.id
        );
    }
}

#[test]
fn default_preset_is_four_in_eight_out() {
    let p = default_preset();
    assert_eq!(p.id, "relax");
    assert_eq!(p.config, BreathingConfig::default());
    assert_eq!(p.config.cycle_seconds(), 12.0);
}

#[test]
fn preset_lookup_ignores_case_and_whitespace() {
    assert_eq!(find_preset("BOX").unwrap().id, "box");
    assert_eq!(find_preset(" 4-7-8 ").unwrap().config.hold, 7.0);
}

#[test]
fn unknown_preset_is_an_error() {
    assert_eq!(
        find_preset("wim-hof"),
        Err(ConfigError::UnknownPreset("wim-hof".to_string()))
    );
}

#[test]
fn preset_with_custom_length() {
    let c = find_preset("box").unwrap().with_total(32.0).unwrap();
    assert_eq!(c.total, 32.0);
    assert_eq!(c.cycle_seconds(), 16.0);
}
