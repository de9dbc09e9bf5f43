use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::matter::{is_known_kind, MatterKind, MATTER_SAND};

use super::SimulationCore;

pub const DEFAULT_MOVE_STEPS: u32 = 1;
pub const DEFAULT_BRUSH_RADIUS: f32 = 4.0;
/// Keeps a runaway slider from stalling a frame
pub const MAX_MOVE_STEPS: u32 = 64;

/// Knobs the host may change between any two ticks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Gravity+slide pairs per tick
    pub move_steps: u32,
    pub brush_radius: f32,
    pub draw_matter: MatterKind,
    pub paused: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_steps: DEFAULT_MOVE_STEPS,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            draw_matter: MATTER_SAND,
            paused: false,
        }
    }
}

pub(super) fn set_paused(sim: &mut SimulationCore, paused: bool) {
    if sim.settings.paused != paused {
        debug!("simulation {}", if paused { "paused" } else { "resumed" });
    }
    sim.settings.paused = paused;
}

pub(super) fn set_move_steps(sim: &mut SimulationCore, steps: u32) {
    let steps = steps.min(MAX_MOVE_STEPS);
    debug!("move steps per tick: {steps}");
    sim.settings.move_steps = steps;
}

pub(super) fn set_brush_radius(sim: &mut SimulationCore, radius: f32) {
    // NaN and negatives collapse to a single cell
    let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    debug!("brush radius: {radius}");
    sim.settings.brush_radius = radius;
}

pub(super) fn set_draw_matter(sim: &mut SimulationCore, kind: MatterKind) {
    if !is_known_kind(kind) {
        debug!("ignoring unknown draw matter {kind}");
        return;
    }
    debug!("draw matter: {kind}");
    sim.settings.draw_matter = kind;
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
        sim.step_ms_history.clear();
        sim.draw_ms_pending = 0.0;
    }
}
