//! Spatial - grid storage, neighborhood and borders

pub mod direction;
pub mod grid;
