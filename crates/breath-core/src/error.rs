use crate::Phase;

/// Rejected breathing configuration or preset lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{phase} duration must be a non-negative number of seconds, got {value}")]
    InvalidPhaseDuration { phase: Phase, value: f64 },

    #[error("session duration must be a positive number of seconds, got {0}")]
    InvalidTotal(f64),

    #[error("at least one phase must have a non-zero duration")]
    EmptyCycle,

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

/// Command refused by a breath controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot change the breathing pattern while a session is running")]
    Running,
}
