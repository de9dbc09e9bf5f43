/// Tick counters handed to every physics dispatch.
///
/// `sim_step` counts ticks, `move_step` counts gravity/slide sub-steps. Both
/// only ever grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSchedule {
    pub sim_step: u64,
    pub move_step: u64,
}

/// Which diagonal the slide kernel tries first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideBias {
    Left,
    Right,
}

impl StepSchedule {
    pub const fn new(sim_step: u64, move_step: u64) -> Self {
        Self { sim_step, move_step }
    }

    /// Even (sim_step + move_step) slides left, odd slides right
    #[inline]
    pub const fn slide_bias(&self) -> SlideBias {
        if self.sim_step.wrapping_add(self.move_step) & 1 == 0 {
            SlideBias::Left
        } else {
            SlideBias::Right
        }
    }

    #[inline]
    pub fn advance_move(&mut self) {
        self.move_step = self.move_step.wrapping_add(1);
    }

    #[inline]
    pub fn advance_sim(&mut self) {
        self.sim_step = self.sim_step.wrapping_add(1);
    }
}
