use crate::systems::kernels::{dispatch_and_swap, GravityKernel, SlideKernel};

use super::{PerfTimer, SimulationCore};

impl SimulationCore {
    /// One gravity pass then one slide pass, each followed by a buffer swap.
    /// The slide bias comes from the counters before this sub-step bumps `move_step`.
    pub(super) fn physics_sub_step(&mut self) {
        let band_rows = self.band_rows();
        let slide = SlideKernel::for_schedule(&self.schedule);

        if self.perf_enabled {
            let mut timer = PerfTimer::start();
            dispatch_and_swap(&mut self.grid, &GravityKernel, band_rows);
            self.perf_stats.gravity_ms += timer.lap_ms();
            dispatch_and_swap(&mut self.grid, &slide, band_rows);
            self.perf_stats.slide_ms += timer.lap_ms();
            self.perf_stats.sub_steps += 1;
        } else {
            dispatch_and_swap(&mut self.grid, &GravityKernel, band_rows);
            dispatch_and_swap(&mut self.grid, &slide, band_rows);
        }

        self.schedule.advance_move();
    }
}
