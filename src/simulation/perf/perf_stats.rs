use std::collections::VecDeque;

use wasm_bindgen::prelude::*;

/// Samples kept for the rolling step-time average
pub const STEP_HISTORY_LEN: usize = 150;

#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) gravity_ms: f64,
    pub(super) slide_ms: f64,
    pub(super) render_ms: f64,
    pub(super) step_ms_avg: f64,
    pub(super) sub_steps: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn gravity_ms(&self) -> f64 { self.gravity_ms }
    #[wasm_bindgen(getter)]
    pub fn slide_ms(&self) -> f64 { self.slide_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    /// Mean `step_ms` over the last [`STEP_HISTORY_LEN`] measured steps
    #[wasm_bindgen(getter)]
    pub fn step_ms_avg(&self) -> f64 { self.step_ms_avg }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}

/// Fixed-capacity window of samples; the oldest drops out when full
#[derive(Clone, Debug)]
pub struct RollingAverage {
    samples: VecDeque<f64>,
    capacity: usize,
    sum: f64,
}

impl RollingAverage {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity, sum: 0.0 }
    }

    pub fn push(&mut self, sample: f64) {
        if self.samples.len() == self.capacity {
            if let Some(old) = self.samples.pop_front() {
                self.sum -= old;
            }
        }
        self.samples.push_back(sample);
        self.sum += sample;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 0.0 before the first sample
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum / self.samples.len() as f64
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.sum = 0.0;
    }
}

impl Default for RollingAverage {
    fn default() -> Self {
        Self::new(STEP_HISTORY_LEN)
    }
}
