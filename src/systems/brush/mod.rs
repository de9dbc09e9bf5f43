//! Brush - paints matter straight into the input buffer
//!
//! Not a physics phase: the brush edits the buffer the next gravity pass is
//! about to read, and must finish before that pass starts.
//!
//! Shapes:
//! - disc:    cells whose rounded distance to the center is <= radius
//! - capsule: same test against the closest point of the drag segment, so
//!   two mouse samples far apart still leave one connected stroke

mod vec2;

pub use vec2::Vec2;

use crate::domain::matter::MatterKind;
use crate::domain::palette::painted_matter;
use crate::spatial::grid::MatterGrid;
use crate::systems::kernels::for_each_row;

/// One draw dispatch worth of input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushParams {
    pub start: (i32, i32),
    pub end: Option<(i32, i32)>,
    pub radius: f32,
    pub matter: MatterKind,
}

/// Inclusive cell rectangle, already clamped to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BrushParams {
    pub fn disc(x: i32, y: i32, radius: f32, matter: MatterKind) -> Self {
        Self { start: (x, y), end: None, radius, matter }
    }

    pub fn stroke(from: (i32, i32), to: (i32, i32), radius: f32, matter: MatterKind) -> Self {
        Self { start: from, end: Some(to), radius, matter }
    }

    /// Does the brush paint cell (x, y)?
    #[inline]
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let pos = Vec2::from_cell(x, y);
        let start = Vec2::from_cell(self.start.0, self.start.1);
        let anchor = match self.end {
            Some((ex, ey)) => pos.project_onto_segment(start, Vec2::from_cell(ex, ey)),
            None => start,
        };
        pos.distance(anchor).round() <= self.radius
    }

    /// Bounding box of the shape clipped to a `width x height` grid
    pub fn bounds(&self, width: u32, height: u32) -> Option<CellRect> {
        // Also rejects NaN
        if !(self.radius >= 0.0) {
            return None;
        }
        // Huge radii saturate instead of wrapping
        let r = self.radius.ceil() as i64;
        let (sx, sy) = (self.start.0 as i64, self.start.1 as i64);
        let (ex, ey) = self.end.map(|(x, y)| (x as i64, y as i64)).unwrap_or((sx, sy));

        let x0 = sx.min(ex).saturating_sub(r).max(0);
        let y0 = sy.min(ey).saturating_sub(r).max(0);
        let x1 = sx.max(ex).saturating_add(r).min(width as i64 - 1);
        let y1 = sy.max(ey).saturating_add(r).min(height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(CellRect { x0: x0 as u32, y0: y0 as u32, x1: x1 as u32, y1: y1 as u32 })
    }
}

/// Paint `brush` into the grid's input buffer. Returns false when the shape
/// misses the canvas entirely.
pub fn paint(grid: &mut MatterGrid, brush: &BrushParams, seed: u32, band_rows: usize) -> bool {
    let Some(rect) = brush.bounds(grid.width(), grid.height()) else {
        return false;
    };

    let width = grid.width() as usize;
    let empty = grid.empty_matter();
    let start = rect.y0 as usize * width;
    let end = (rect.y1 as usize + 1) * width;
    let rows = &mut grid.input_mut()[start..end];

    for_each_row(rows, width, band_rows, |r, row| {
        let y = rect.y0 + r as u32;
        for x in rect.x0..=rect.x1 {
            if brush.covers(x as i32, y as i32) {
                row[x as usize] = painted_matter(brush.matter, empty, x, y, seed);
            }
        }
    });
    true
}
