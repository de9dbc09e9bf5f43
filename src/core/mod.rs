//! Core - crate-wide plumbing

pub mod error;

pub use error::{EngineError, EngineResult};
