//! Session state shared with the rendering frontends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets. Frontends read a [`SessionState`]
//! snapshot every frame to drive ring activation, glow and the timer overlay.

use std::fmt;

/// One step of the breath cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Inhale,
    Hold,
    Exhale,
    Pause,
}

impl Phase {
    /// Cycle order, starting from the inhale.
    pub const ALL: [Phase; 4] = [Phase::Inhale, Phase::Hold, Phase::Exhale, Phase::Pause];

    /// The phase that follows this one in the fixed cycle.
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Pause,
            Phase::Pause => Phase::Inhale,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Phase::Inhale => 0,
            Phase::Hold => 1,
            Phase::Exhale => 2,
            Phase::Pause => 3,
        }
    }

    /// True while the lungs are filling or full; progress rises in these phases.
    pub fn is_rising(self) -> bool {
        matches!(self, Phase::Inhale | Phase::Hold)
    }

    /// Text shown in the timer overlay.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe in",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe out",
            Phase::Pause => "Rest",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
            Phase::Pause => "pause",
        };
        f.write_str(name)
    }
}

/// Snapshot of a breathing session.
///
/// `progress` is in the \[0, 1\] range: it rises through inhale and hold and
/// falls through exhale and pause. `remaining` counts down from the session
/// length to zero, at which point `running` drops to false.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub phase_elapsed: f64,
    pub progress: f64,
    pub remaining: f64,
    pub running: bool,
}

impl SessionState {
    /// True once the countdown has run out.
    pub fn is_finished(&self) -> bool {
        !self.running && self.remaining <= 0.0
    }
}
