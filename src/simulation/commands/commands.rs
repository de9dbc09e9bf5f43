use log::warn;

use crate::systems::brush::{self, BrushParams};

use super::perf_timer::timed;
use super::SimulationCore;

fn apply_brush(sim: &mut SimulationCore, params: BrushParams) -> bool {
    let band_rows = sim.band_rows();
    let seed = sim.config.brush_seed;
    let SimulationCore { grid, perf_enabled, draw_ms_pending, .. } = sim;
    let painted =
        timed(*perf_enabled, draw_ms_pending, || brush::paint(grid, &params, seed, band_rows));
    if !painted {
        warn!(
            "brush at {:?}..{:?} (radius {}) misses the {}x{} canvas",
            params.start,
            params.end.unwrap_or(params.start),
            params.radius,
            grid.width(),
            grid.height()
        );
    }
    painted
}

pub(super) fn paint_disc(sim: &mut SimulationCore, x: i32, y: i32) -> bool {
    let params = BrushParams::disc(x, y, sim.settings.brush_radius, sim.settings.draw_matter);
    apply_brush(sim, params)
}

pub(super) fn paint_stroke(sim: &mut SimulationCore, from: (i32, i32), to: (i32, i32)) -> bool {
    let params = BrushParams::stroke(from, to, sim.settings.brush_radius, sim.settings.draw_matter);
    apply_brush(sim, params)
}

pub(super) fn brush_to(sim: &mut SimulationCore, x: i32, y: i32) -> bool {
    let painted = match sim.last_brush_pos {
        Some(prev) => paint_stroke(sim, prev, (x, y)),
        None => paint_disc(sim, x, y),
    };
    sim.last_brush_pos = Some((x, y));
    painted
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.grid.clear();
    sim.last_brush_pos = None;
    // Show the emptied grid exactly as the next tick would
    super::present::present(sim);
}
