//! Built-in breathing patterns offered in the preset menu.

use crate::{BreathingConfig, ConfigError, DEFAULT_SESSION_SEC};

#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub config: BreathingConfig,
}

impl Preset {
    /// This preset's pattern with a custom session length.
    pub fn with_total(&self, total: f64) -> Result<BreathingConfig, ConfigError> {
        self.config.with_total(total)
    }
}

const fn pattern(inhale: f64, hold: f64, exhale: f64, pause: f64) -> BreathingConfig {
    BreathingConfig {
        inhale,
        hold,
        exhale,
        pause,
        total: DEFAULT_SESSION_SEC,
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "relax",
        label: "Relax (4 in, 8 out)",
        config: pattern(4.0, 0.0, 8.0, 0.0),
    },
    Preset {
        id: "box",
        label: "Box (4-4-4-4)",
        config: pattern(4.0, 4.0, 4.0, 4.0),
    },
    Preset {
        id: "4-7-8",
        label: "Tranquility (4-7-8)",
        config: pattern(4.0, 7.0, 8.0, 0.0),
    },
    Preset {
        id: "coherence",
        label: "Coherence (5.5 in, 5.5 out)",
        config: pattern(5.5, 0.0, 5.5, 0.0),
    },
    Preset {
        id: "energize",
        label: "Energize (4 in, 2 out)",
        config: pattern(4.0, 0.0, 2.0, 0.0),
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// The pattern selected when nothing else has been chosen.
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

/// Look up a preset by id, ignoring ASCII case.
pub fn find_preset(id: &str) -> Result<&'static Preset, ConfigError> {
    let id = id.trim();
    PRESETS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
}
