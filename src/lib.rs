#![cfg(target_arch = "wasm32")]
use breath_core::{
    find_preset, overlay_text, presets, ring_is_active, BreathController, BreathUniforms,
    BreathingConfig, FrameClock,
};
use js_sys::{Array, Float32Array};
use wasm_bindgen::prelude::*;

mod dom;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("breathe-web starting");
    Ok(())
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Ids of the built-in patterns, in menu order.
#[wasm_bindgen]
pub fn preset_ids() -> Array {
    presets().iter().map(|p| JsValue::from_str(p.id)).collect()
}

/// Breath controller handle for the JS scene.
///
/// The scene calls `frame()` (or `tick(delta)` with its own clock) from its
/// render loop and reads phase, progress and uniforms to animate the rings.
#[wasm_bindgen]
pub struct BreathSession {
    controller: BreathController,
    clock: FrameClock,
    overlay_id: Option<String>,
}

impl Default for BreathSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BreathSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BreathSession {
        BreathSession {
            controller: BreathController::default(),
            clock: FrameClock::new(),
            overlay_id: None,
        }
    }

    /// Write the overlay text into the element with this id on every frame.
    pub fn bind_overlay(&mut self, element_id: &str) {
        self.overlay_id = Some(element_id.to_string());
        self.sync_overlay();
    }

    pub fn start_preset(&mut self, id: &str) -> Result<(), JsValue> {
        let preset = find_preset(id).map_err(js_error)?;
        self.begin(preset.config);
        Ok(())
    }

    pub fn start_custom(
        &mut self,
        inhale: f64,
        hold: f64,
        exhale: f64,
        pause: f64,
        total: f64,
    ) -> Result<(), JsValue> {
        let config = BreathingConfig::new(inhale, hold, exhale, pause, total).map_err(js_error)?;
        self.begin(config);
        Ok(())
    }

    /// Choose a preset from the menu; only allowed while idle.
    pub fn select_preset(&mut self, id: &str) -> Result<(), JsValue> {
        let preset = find_preset(id).map_err(js_error)?;
        self.controller.select(preset.config).map_err(js_error)?;
        self.sync_overlay();
        Ok(())
    }

    pub fn restart(&mut self) {
        self.clock.reset();
        self.controller.restart();
        self.sync_overlay();
    }

    pub fn stop(&mut self) {
        self.controller.stop();
        self.sync_overlay();
    }

    /// Advance by a host-measured delta. Returns true on a phase change.
    pub fn tick(&mut self, delta_sec: f64) -> bool {
        let changed = self.controller.tick(delta_sec).is_some();
        self.sync_overlay();
        changed
    }

    /// Advance by the time since the previous call.
    pub fn frame(&mut self) -> bool {
        let dt = self.clock.tick();
        self.tick(dt)
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.controller.phase().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn phase_index(&self) -> u32 {
        self.controller.phase().index() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn breathing_in(&self) -> bool {
        self.controller.phase().is_rising()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.controller.progress()
    }

    #[wasm_bindgen(getter)]
    pub fn remaining(&self) -> f64 {
        self.controller.remaining()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.controller.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles_completed(&self) -> u32 {
        self.controller.cycles_completed()
    }

    pub fn ring_active(&self, index: usize, count: usize) -> bool {
        ring_is_active(&self.controller.state(), index, count)
    }

    pub fn overlay_text(&self) -> String {
        overlay_text(&self.controller.state())
    }

    /// Uniform block as floats: glow rgba, progress, phase, remaining, running.
    pub fn uniforms(&self) -> Float32Array {
        let uniforms = BreathUniforms::from_state(&self.controller.state());
        Float32Array::from(uniforms.as_floats())
    }
}

impl BreathSession {
    fn begin(&mut self, config: BreathingConfig) {
        self.clock.reset();
        self.controller.start(config);
        self.sync_overlay();
    }

    fn sync_overlay(&self) {
        let Some(id) = self.overlay_id.as_deref() else {
            return;
        };
        let state = self.controller.state();
        if let Err(e) = dom::set_text(id, &overlay_text(&state)) {
            log::warn!("overlay update failed: {e:?}");
        }
        let phase = if state.is_finished() {
            "done".to_string()
        } else {
            state.phase.to_string()
        };
        if let Err(e) = dom::set_phase_attribute(id, &phase) {
            log::warn!("phase attribute update failed: {e:?}");
        }
    }
}
