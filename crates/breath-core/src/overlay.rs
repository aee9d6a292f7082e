use crate::{SessionState, REMAINING_EPSILON_SEC};

/// Countdown text as MM:SS.
///
/// Partial seconds round up, so the overlay reads `00:01` until the session
/// has actually run out.
pub fn format_remaining(seconds: f64) -> String {
    let whole = if seconds.is_finite() {
        (seconds - REMAINING_EPSILON_SEC).ceil().max(0.0) as u64
    } else {
        0
    };
    let minutes = whole / 60;
    let secs = whole % 60;
    format!("{minutes:02}:{secs:02}")
}

pub fn overlay_text(state: &SessionState) -> String {
    if state.is_finished() {
        return format!("Done  {}", format_remaining(0.0));
    }
    format!(
        "{}  {}",
        state.phase.label(),
        format_remaining(state.remaining)
    )
}
