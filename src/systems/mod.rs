//! Systems - everything that reads or writes the grid once per dispatch
//!
//! - kernels/  gravity + slide physics passes and the row-parallel driver
//! - brush/    direct edits of the input buffer
//! - render    grid colors to the display image

pub mod brush;
pub mod kernels;
pub mod render;
