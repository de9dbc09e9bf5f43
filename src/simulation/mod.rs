//! Simulation - owns the grid and drives one tick at a time
//!
//! Tick order (each arrow is a full barrier):
//!   brush (input buffer, between ticks)
//!   -> gravity (input -> output) -> swap
//!   -> slide   (input -> output) -> swap      x move_steps
//!   -> render  (input -> display image)
//!
//! SimulationCore only orchestrates; the per-cell rules live in systems/.

use crate::domain::matter::Matter;
use crate::spatial::grid::MatterGrid;
use crate::systems::kernels::StepSchedule;
use crate::systems::render::DisplayImage;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "step/physics.rs"]
mod physics;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/view.rs"]
mod view;
#[path = "render/present.rs"]
mod present;
mod facade;

pub use config::SimConfig;
pub use facade::Simulation;
pub use perf_stats::{PerfStats, RollingAverage};
pub use settings::Settings;
pub use view::OrthographicView;

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulationCore {
    config: SimConfig,
    grid: MatterGrid,
    image: DisplayImage,
    schedule: StepSchedule,
    settings: Settings,
    view: OrthographicView,

    // Previous brush sample of the stroke in progress
    last_brush_pos: Option<(i32, i32)>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    draw_ms_pending: f64,
    step_ms_history: RollingAverage,
}

impl SimulationCore {
    /// Validate `config` and allocate the grid and display image
    pub fn new(config: SimConfig) -> crate::core::EngineResult<Self> {
        init::create_simulation_core(config)
    }

    /// Default config sized to the canvas, worker groups fitted to it
    pub fn with_size(width: u32, height: u32) -> crate::core::EngineResult<Self> {
        init::create_simulation_core(SimConfig::for_canvas(width, height))
    }

    pub fn from_config_json(json: &str) -> crate::core::EngineResult<Self> {
        init::create_simulation_core(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn grid(&self) -> &MatterGrid { &self.grid }

    pub fn image(&self) -> &DisplayImage { &self.image }

    pub fn schedule(&self) -> StepSchedule { self.schedule }

    pub fn sim_step(&self) -> u64 { self.schedule.sim_step }

    pub fn move_step(&self) -> u64 { self.schedule.move_step }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn view(&self) -> &OrthographicView { &self.view }

    /// Current cell at (x, y), `None` outside the canvas
    pub fn matter_at(&self, x: i32, y: i32) -> Option<Matter> {
        self.grid.index_checked(x, y).map(|idx| self.grid.input()[idx])
    }

    /// Non-empty cells in the current generation (full scan)
    pub fn matter_count(&self) -> usize {
        self.grid.count_non_empty()
    }

    // === Settings ===

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn toggle_pause(&mut self) {
        settings::set_paused(self, !self.settings.paused);
    }

    pub fn set_move_steps(&mut self, steps: u32) {
        settings::set_move_steps(self, steps);
    }

    pub fn set_brush_radius(&mut self, radius: f32) {
        settings::set_brush_radius(self, radius);
    }

    pub fn set_draw_matter(&mut self, kind: u8) {
        settings::set_draw_matter(self, kind);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Brush ===

    /// Paint a disc of the current brush at (x, y)
    pub fn paint(&mut self, x: i32, y: i32) -> bool {
        commands::paint_disc(self, x, y)
    }

    /// Paint a capsule from `from` to `to` with the current brush
    pub fn paint_stroke(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        commands::paint_stroke(self, from, to)
    }

    /// Continue the stroke in progress to (x, y); the first sample paints a disc
    pub fn brush_to(&mut self, x: i32, y: i32) -> bool {
        commands::brush_to(self, x, y)
    }

    /// Forget the previous brush sample (mouse released)
    pub fn end_stroke(&mut self) {
        self.last_brush_pos = None;
    }

    /// Empty both buffers and re-render the display. Step counters keep counting.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Tick ===

    /// Advance one tick: `move_steps` physics sub-steps (unless paused), then render
    pub fn step(&mut self) {
        step::step(self);
    }

    // === View / presentation ===

    pub fn resize_view(&mut self, window_width: f32, window_height: f32) {
        self.view.update(window_width, window_height);
    }

    pub fn set_view_scale(&mut self, scale: f32) {
        self.view.set_scale(scale);
    }

    pub fn pan_view(&mut self, dx: f32, dy: f32) {
        self.view.pan(dx, dy);
    }

    /// Back to the centered, unscaled view; the window box is kept
    pub fn reset_view(&mut self) {
        self.view.reset_pan();
        self.view.set_scale(1.0);
    }

    /// Column-major world-to-screen matrix for the presentation stage
    pub fn world_to_screen(&self) -> [f32; 16] {
        self.view.world_to_screen()
    }

    pub fn display_ptr(&self) -> *const u32 {
        self.image.pixels_ptr()
    }

    pub fn display_len(&self) -> usize {
        self.image.pixels().len()
    }

    pub fn display_len_bytes(&self) -> usize {
        self.image.len_bytes()
    }

    /// Rows per parallel task, from the configured worker group
    #[inline]
    fn band_rows(&self) -> usize {
        self.config.workgroup_y as usize
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
