use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        // Brush work since the previous tick counts toward this one
        sim.perf_stats.draw_ms = std::mem::take(&mut sim.draw_ms_pending);
        sim.perf_stats.grid_size = sim.grid.size() as u32;
        // Two cell buffers plus the display image
        sim.perf_stats.memory_bytes = (sim.grid.size() as u32).saturating_mul(12);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === PHYSICS: gravity/slide sub-steps ===
    if !sim.settings.paused {
        for _ in 0..sim.settings.move_steps {
            sim.physics_sub_step();
        }
    }

    // === RENDER: always, so paint shows up while paused ===
    super::present::present(sim);

    sim.schedule.advance_sim();

    if let Some(t0) = step_start {
        let step_ms = t0.elapsed_ms();
        sim.perf_stats.step_ms = step_ms;
        sim.step_ms_history.push(step_ms);
        sim.perf_stats.step_ms_avg = sim.step_ms_history.average();
        sim.perf_stats.non_empty_cells = sim.grid.count_non_empty() as u32;
    }
}
