use log::info;

use crate::core::EngineResult;
use crate::spatial::grid::MatterGrid;
use crate::systems::kernels::StepSchedule;
use crate::systems::render::DisplayImage;

use super::perf_stats::{PerfStats, RollingAverage};
use super::{OrthographicView, Settings, SimConfig, SimulationCore};

pub(super) fn create_simulation_core(config: SimConfig) -> EngineResult<SimulationCore> {
    config.validate()?;

    let grid = MatterGrid::new(config.width, config.height, config.empty())?;
    let image = DisplayImage::new(config.width, config.height);
    let view = OrthographicView::new(config.width as f32, config.height as f32);

    info!(
        "simulation core {}x{} ({} cells, worker group {}x{})",
        config.width,
        config.height,
        grid.size(),
        config.workgroup_x,
        config.workgroup_y
    );

    Ok(SimulationCore {
        config,
        grid,
        image,
        schedule: StepSchedule::default(),
        settings: Settings::default(),
        view,
        last_brush_pos: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        draw_ms_pending: 0.0,
        step_ms_history: RollingAverage::default(),
    })
}
