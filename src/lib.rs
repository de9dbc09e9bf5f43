//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Every cell is updated by a pull rule that reads the previous generation
//! and writes only itself, so whole passes run row-parallel without locks.
//!
//! Layout:
//! - core/        - errors
//! - domain/      - matter encoding and palette
//! - spatial/     - double-buffered grid and neighbor directions
//! - systems/     - physics kernels, brush, render
//! - simulation/  - tick orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

use wasm_bindgen::prelude::*;

// Thread pool for the row-parallel kernels (browser only)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, EngineResult};
pub use domain::matter::{Matter, MatterKind};
pub use simulation::{PerfStats, Settings, SimConfig, Simulation, SimulationCore};

// Matter kind ids for JS
#[wasm_bindgen]
pub fn matter_empty() -> u8 { domain::matter::MATTER_EMPTY }
#[wasm_bindgen]
pub fn matter_sand() -> u8 { domain::matter::MATTER_SAND }
#[wasm_bindgen]
pub fn matter_wood() -> u8 { domain::matter::MATTER_WOOD }

/// Packed cell word for `kind` with a 24-bit `color`
#[wasm_bindgen]
pub fn encode_matter(kind: u8, color: u32) -> u32 {
    domain::matter::encode(kind, color)
}
