use log::error;

use super::perf_timer::timed;
use super::SimulationCore;

/// Shade the current generation into the display image
pub(super) fn present(sim: &mut SimulationCore) {
    let band_rows = sim.band_rows();
    let SimulationCore { grid, image, perf_stats, perf_enabled, .. } = sim;
    let result = timed(*perf_enabled, &mut perf_stats.render_ms, || image.render(grid, band_rows));
    if let Err(e) = result {
        // Image and grid are allocated together; a mismatch is a construction bug
        error!("render skipped: {e}");
    }
}
