//! Engine errors
//!
//! Everything here is a startup/configuration failure: per-cell work has no
//! error path (out-of-grid reads resolve to empty, unknown kinds are inert).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("canvas {width}x{height} is too large to index with u32")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("worker group {group_x}x{group_y} must be non-zero and divide canvas {width}x{height}")]
    WorkgroupMismatch {
        width: u32,
        height: u32,
        group_x: u32,
        group_y: u32,
    },

    #[error("{name} buffer holds {actual} cells, expected {expected}")]
    BufferSizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("empty matter value {0:#010x} does not decode to the empty kind")]
    EmptyMatterNotEmpty(u32),

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
