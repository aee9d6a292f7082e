use crate::{BreathingConfig, Phase, SessionError, SessionState, REMAINING_EPSILON_SEC};

/// Four-phase breath timer with a session countdown.
///
/// The controller never reads a clock: the host calls [`BreathController::tick`]
/// once per frame with the elapsed seconds, so replaying the same deltas from
/// the same start always yields the same states.
#[derive(Clone, Debug)]
pub struct BreathController {
    config: BreathingConfig,
    state: SessionState,
    cycles: u32,
}

impl Default for BreathController {
    fn default() -> Self {
        Self::new(BreathingConfig::default())
    }
}

impl BreathController {
    /// Idle controller holding `config`; nothing runs until [`start`](Self::start).
    pub fn new(config: BreathingConfig) -> Self {
        Self {
            state: initial_state(&config, false),
            config,
            cycles: 0,
        }
    }

    /// Begin a fresh session, discarding whatever state came before.
    pub fn start(&mut self, config: BreathingConfig) {
        self.config = config;
        self.state = initial_state(&config, true);
        self.cycles = 0;
        log::info!(
            "breath session started: {}/{}/{}/{}s for {}s",
            config.inhale,
            config.hold,
            config.exhale,
            config.pause,
            config.total
        );
        if !config.has_active_phase() {
            log::warn!("breath pattern has no active phase; only the countdown will advance");
        }
    }

    /// Start again with the current pattern.
    pub fn restart(&mut self) {
        self.start(self.config);
    }

    /// Halt the session, keeping the last phase and progress visible.
    pub fn stop(&mut self) {
        if self.state.running {
            log::info!("breath session stopped with {:.1}s left", self.state.remaining);
        }
        self.state.running = false;
    }

    /// Swap the pattern while idle. The session is reset to the new pattern's
    /// initial state but not started.
    pub fn select(&mut self, config: BreathingConfig) -> Result<(), SessionError> {
        if self.state.running {
            return Err(SessionError::Running);
        }
        self.config = config;
        self.state = initial_state(&config, false);
        self.cycles = 0;
        Ok(())
    }

    /// Advance by `delta_sec` seconds of frame time.
    ///
    /// Returns the phase entered on this tick, if a transition happened.
    pub fn tick(&mut self, delta_sec: f64) -> Option<Phase> {
        if !self.state.running || self.state.remaining <= 0.0 {
            return None;
        }
        let delta = if delta_sec.is_finite() {
            delta_sec.max(0.0)
        } else {
            0.0
        };

        let state = &mut self.state;
        state.phase_elapsed += delta;
        state.remaining = (state.remaining - delta).max(0.0);
        if state.remaining <= REMAINING_EPSILON_SEC {
            state.remaining = 0.0;
        }

        let duration = self.config.duration_of(state.phase);
        let normalized = if duration > 0.0 {
            state.phase_elapsed / duration
        } else {
            1.0
        };

        let mut entered = None;
        if normalized >= 1.0 {
            let from = state.phase;
            let to = self.config.next_active_phase(from);
            state.phase_elapsed = 0.0;
            state.phase = to;
            if self.config.has_active_phase() && to.index() <= from.index() {
                self.cycles += 1;
            }
            log::debug!("breath phase {} -> {}", from, to);
            entered = Some(to);
        }

        // A new cycle starts empty; other phases carry the boundary value
        // (hold enters full, exhale and pause enter empty).
        state.progress = if entered.is_some() && state.phase == self.config.first_active_phase() {
            0.0
        } else {
            phase_progress(state.phase, normalized)
        };

        if state.remaining == 0.0 {
            state.running = false;
            log::info!("breath session finished after {} cycles", self.cycles);
        }
        entered
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &BreathingConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn remaining(&self) -> f64 {
        self.state.remaining
    }

    pub fn phase_elapsed(&self) -> f64 {
        self.state.phase_elapsed
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Number of times the cycle wrapped back to its first phase.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles
    }

    /// Session time consumed so far.
    pub fn elapsed(&self) -> f64 {
        (session_length(&self.config) - self.state.remaining).max(0.0)
    }

    /// Share of the session already elapsed, in \[0, 1\].
    pub fn session_fraction(&self) -> f64 {
        let total = session_length(&self.config);
        if total > 0.0 {
            (self.elapsed() / total).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

fn phase_progress(phase: Phase, normalized: f64) -> f64 {
    let progress = if phase.is_rising() {
        normalized
    } else {
        1.0 - normalized
    };
    progress.clamp(0.0, 1.0)
}

fn session_length(config: &BreathingConfig) -> f64 {
    if config.total.is_finite() {
        config.total.max(0.0)
    } else {
        0.0
    }
}

fn initial_state(config: &BreathingConfig, running: bool) -> SessionState {
    let remaining = session_length(config);
    SessionState {
        phase: config.first_active_phase(),
        phase_elapsed: 0.0,
        progress: 0.0,
        remaining,
        running: running && remaining > 0.0,
    }
}
