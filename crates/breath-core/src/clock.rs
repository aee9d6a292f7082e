use instant::Instant;

use crate::MAX_FRAME_DELTA_SEC;

/// Turns successive frame timestamps into controller deltas.
///
/// The first reading yields zero. Gaps longer than `max_delta_sec` are capped
/// so a stalled frame loop cannot drain the session in one tick.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta_sec: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_DELTA_SEC)
    }

    pub fn with_max_delta(max_delta_sec: f64) -> Self {
        Self {
            last: None,
            max_delta_sec: max_delta_sec.max(0.0),
        }
    }

    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(prev) if now > prev => (now - prev).as_secs_f64(),
            _ => 0.0,
        };
        self.last = Some(now);
        dt.min(self.max_delta_sec)
    }

    /// Forget the previous frame, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
