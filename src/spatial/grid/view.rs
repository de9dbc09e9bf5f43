use crate::domain::matter::Matter;
use crate::spatial::direction::Direction;

use super::border::{is_edge, Side};

/// Read-only snapshot of the input buffer for one dispatch.
///
/// Shared by every worker of a phase; `Copy` so each worker can hold its own.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    cells: &'a [Matter],
    width: u32,
    height: u32,
    empty: Matter,
}

impl<'a> GridView<'a> {
    pub(crate) fn new(cells: &'a [Matter], width: u32, height: u32, empty: Matter) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self { cells, width, height, empty }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Own-cell read. (x, y) must be inside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Matter {
        debug_assert!(x < self.width && y < self.height);
        self.cells[(y * self.width + x) as usize]
    }

    /// Any signed position; outside the grid reads as empty
    #[inline]
    pub fn get_or_empty(&self, x: i32, y: i32) -> Matter {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.cells[(y as u32 * self.width + x as u32) as usize]
        } else {
            self.empty
        }
    }

    /// Neighbor lookup through the direction table
    #[inline]
    pub fn neighbor(&self, x: u32, y: u32, dir: Direction) -> Matter {
        let (dx, dy) = dir.offset();
        self.get_or_empty(x as i32 + dx, y as i32 + dy)
    }

    #[inline]
    pub fn is_edge(&self, x: u32, y: u32, side: Side) -> bool {
        is_edge(self.width, self.height, x, y, side)
    }
}
