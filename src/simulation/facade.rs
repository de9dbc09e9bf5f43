use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: crate::core::EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation for a `width x height` canvas with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Simulation, JsValue> {
        SimulationCore::with_size(width, height).map(|core| Self { core }).map_err(to_js)
    }

    /// Create from a camelCase JSON config (see `SimConfig`)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Simulation, JsValue> {
        SimulationCore::from_config_json(json).map(|core| Self { core }).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn sim_step(&self) -> u64 { self.core.sim_step() }

    #[wasm_bindgen(getter)]
    pub fn move_step(&self) -> u64 { self.core.move_step() }

    /// Non-empty cells right now (full scan)
    pub fn matter_count(&self) -> u32 {
        self.core.matter_count() as u32
    }

    /// Packed cell word at (x, y); the empty value outside the canvas
    pub fn matter_at(&self, x: i32, y: i32) -> u32 {
        self.core
            .matter_at(x, y)
            .unwrap_or(self.core.grid().empty_matter())
            .0
    }

    // === Settings ===

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.settings().paused }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) {
        self.core.toggle_pause();
    }

    #[wasm_bindgen(getter)]
    pub fn move_steps(&self) -> u32 { self.core.settings().move_steps }

    pub fn set_move_steps(&mut self, steps: u32) {
        self.core.set_move_steps(steps);
    }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> f32 { self.core.settings().brush_radius }

    pub fn set_brush_radius(&mut self, radius: f32) {
        self.core.set_brush_radius(radius);
    }

    #[wasm_bindgen(getter)]
    pub fn draw_matter(&self) -> u8 { self.core.settings().draw_matter }

    /// Unknown kinds are ignored
    pub fn set_draw_matter(&mut self, kind: u8) {
        self.core.set_draw_matter(kind);
    }

    // === Brush ===

    pub fn paint(&mut self, x: i32, y: i32) -> bool {
        self.core.paint(x, y)
    }

    pub fn paint_stroke(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        self.core.paint_stroke((x0, y0), (x1, y1))
    }

    /// Mouse-held sample: connects to the previous sample of the same stroke
    pub fn brush_to(&mut self, x: i32, y: i32) -> bool {
        self.core.brush_to(x, y)
    }

    pub fn end_stroke(&mut self) {
        self.core.end_stroke();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Tick ===

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === Presentation ===

    /// Pointer to the ABGR display pixels (`width * height` u32s)
    pub fn display_ptr(&self) -> *const u32 {
        self.core.display_ptr()
    }

    pub fn display_len(&self) -> usize {
        self.core.display_len()
    }

    pub fn display_len_bytes(&self) -> usize {
        self.core.display_len_bytes()
    }

    pub fn resize_view(&mut self, window_width: f32, window_height: f32) {
        self.core.resize_view(window_width, window_height);
    }

    #[wasm_bindgen(getter)]
    pub fn view_scale(&self) -> f32 { self.core.view().scale() }

    pub fn set_view_scale(&mut self, scale: f32) {
        self.core.set_view_scale(scale);
    }

    pub fn pan_view(&mut self, dx: f32, dy: f32) {
        self.core.pan_view(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.core.reset_view();
    }

    /// Column-major 4x4 as a Float32Array
    pub fn world_to_screen(&self) -> Vec<f32> {
        self.core.world_to_screen().to_vec()
    }
}
