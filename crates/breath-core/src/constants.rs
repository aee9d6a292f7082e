use glam::Vec3;

// Shared timing and visual tuning constants used by both web and native frontends.

// Timing
pub const DEFAULT_SESSION_SEC: f64 = 60.0; // session length used by the built-in presets
pub const MAX_FRAME_DELTA_SEC: f64 = 0.25; // cap on a single frame delta (backgrounded tabs, debugger pauses)
pub const REMAINING_EPSILON_SEC: f64 = 1e-9; // remaining time below this snaps to zero

// Ring column
pub const NUM_RINGS: usize = 10;

// Palette
pub const INHALE_COLOR: [f32; 3] = [0.2, 0.35, 1.0]; // blue
pub const EXHALE_COLOR: [f32; 3] = [1.0, 0.25, 0.25]; // red
pub const IDLE_RING_COLOR: [f32; 3] = [1.0, 0.961, 0.894]; // #fff5e4

#[inline]
pub fn color_vec3(rgb: [f32; 3]) -> Vec3 {
    Vec3::new(rgb[0], rgb[1], rgb[2])
}
