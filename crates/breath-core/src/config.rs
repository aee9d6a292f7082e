use crate::{default_preset, ConfigError, Phase};

/// Phase durations and session length, all in seconds.
///
/// A phase with a zero duration is skipped by the controller. Fields are public
/// so hosts can build patterns directly; [`BreathingConfig::new`] is the
/// validating constructor for user-supplied values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreathingConfig {
    pub inhale: f64,
    pub hold: f64,
    pub exhale: f64,
    pub pause: f64,
    pub total: f64,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        default_preset().config
    }
}

impl BreathingConfig {
    pub fn new(
        inhale: f64,
        hold: f64,
        exhale: f64,
        pause: f64,
        total: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            inhale,
            hold,
            exhale,
            pause,
            total,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for phase in Phase::ALL {
            let value = self.raw_duration(phase);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPhaseDuration { phase, value });
            }
        }
        if !self.total.is_finite() || self.total <= 0.0 {
            return Err(ConfigError::InvalidTotal(self.total));
        }
        if !self.has_active_phase() {
            return Err(ConfigError::EmptyCycle);
        }
        Ok(())
    }

    fn raw_duration(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Inhale => self.inhale,
            Phase::Hold => self.hold,
            Phase::Exhale => self.exhale,
            Phase::Pause => self.pause,
        }
    }

    /// Configured duration of `phase`; negative or non-finite values read as zero.
    pub fn duration_of(&self, phase: Phase) -> f64 {
        let value = self.raw_duration(phase);
        if value.is_finite() {
            value.max(0.0)
        } else {
            0.0
        }
    }

    pub fn has_active_phase(&self) -> bool {
        Phase::ALL.iter().any(|&p| self.duration_of(p) > 0.0)
    }

    /// First phase of the cycle that actually takes time.
    pub fn first_active_phase(&self) -> Phase {
        Phase::ALL
            .into_iter()
            .find(|&p| self.duration_of(p) > 0.0)
            .unwrap_or(Phase::Inhale)
    }

    /// Next phase after `from` with a non-zero duration.
    ///
    /// Wraps around the cycle, so a pattern with a single active phase returns
    /// that phase again. Returns `from` when no phase is active.
    pub fn next_active_phase(&self, from: Phase) -> Phase {
        let mut phase = from;
        for _ in 0..Phase::ALL.len() {
            phase = phase.next();
            if self.duration_of(phase) > 0.0 {
                return phase;
            }
        }
        from
    }

    /// Length of one full breath.
    pub fn cycle_seconds(&self) -> f64 {
        Phase::ALL.iter().map(|&p| self.duration_of(p)).sum()
    }

    pub fn breaths_per_minute(&self) -> f64 {
        let cycle = self.cycle_seconds();
        if cycle > 0.0 {
            60.0 / cycle
        } else {
            0.0
        }
    }

    /// Same pattern with a different session length.
    pub fn with_total(&self, total: f64) -> Result<Self, ConfigError> {
        Self::new(self.inhale, self.hold, self.exhale, self.pause, total)
    }
}
