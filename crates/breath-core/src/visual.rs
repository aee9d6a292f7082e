//! Mapping from session state to the values the ring scene renders.

use glam::Vec3;

use crate::{color_vec3, SessionState, EXHALE_COLOR, IDLE_RING_COLOR, INHALE_COLOR};

/// Normalized height of ring `index` in a column of `count` rings.
pub fn ring_position(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    index.min(count - 1) as f32 / (count - 1) as f32
}

/// Rings light from the bottom up while breathing in; while breathing out the
/// lit set grows from the top down as progress falls.
pub fn ring_is_active(state: &SessionState, index: usize, count: usize) -> bool {
    let position = ring_position(index, count);
    let progress = state.progress as f32;
    if state.phase.is_rising() {
        progress >= position
    } else {
        progress <= position
    }
}

pub fn ring_color(state: &SessionState, index: usize, count: usize) -> Vec3 {
    if !ring_is_active(state, index, count) {
        color_vec3(IDLE_RING_COLOR)
    } else if state.phase.is_rising() {
        color_vec3(INHALE_COLOR)
    } else {
        color_vec3(EXHALE_COLOR)
    }
}

pub fn ring_colors(state: &SessionState, count: usize) -> Vec<Vec3> {
    (0..count).map(|i| ring_color(state, i, count)).collect()
}

/// Tube and particle glow: exhale red at empty lungs, inhale blue when full.
pub fn glow_color(state: &SessionState) -> Vec3 {
    let t = state.progress.clamp(0.0, 1.0) as f32;
    color_vec3(EXHALE_COLOR).lerp(color_vec3(INHALE_COLOR), t)
}

/// Per-frame uniform block for the ring/tube shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BreathUniforms {
    pub glow: [f32; 4],
    pub progress: f32,
    pub phase: f32,
    pub remaining: f32,
    pub running: f32,
}

impl BreathUniforms {
    pub fn from_state(state: &SessionState) -> Self {
        let glow = glow_color(state);
        Self {
            glow: [glow.x, glow.y, glow.z, 1.0],
            progress: state.progress as f32,
            phase: state.phase.index() as f32,
            remaining: state.remaining as f32,
            running: if state.running { 1.0 } else { 0.0 },
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
