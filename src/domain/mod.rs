//! Domain - what lives in a cell

pub mod matter;
pub mod palette;
