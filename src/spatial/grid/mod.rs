//! MatterGrid - double-buffered cell storage
//!
//! Two same-sized row-major buffers (A and B) plus one flag saying which of
//! them is the input this phase. Kernels read the input through a
//! [`GridView`] and write every cell of the output exactly once, then the
//! roles swap:
//!
//!   phase N:   A (read-shared)  -> B (write-partitioned)
//!   swap
//!   phase N+1: B (read-shared)  -> A (write-partitioned)
//!
//! Index convention everywhere: `y * width + x`, row 0 at the top.

use crate::core::{EngineError, EngineResult};
use crate::domain::matter::Matter;

mod border;
mod buffers;
mod indexing;
mod view;

pub use border::{is_edge, Side};
pub use view::GridView;

pub struct MatterGrid {
    width: u32,
    height: u32,
    size: usize,

    buffer_a: Vec<Matter>,
    buffer_b: Vec<Matter>,
    a_is_input: bool,

    // Value returned for out-of-grid reads and written by clears
    empty: Matter,
}

impl MatterGrid {
    /// Allocate both buffers filled with `empty`
    pub fn new(width: u32, height: u32, empty: Matter) -> EngineResult<Self> {
        let size = checked_size(width, height)?;
        Self::from_buffers(width, height, empty, vec![empty; size], vec![empty; size])
    }

    /// Adopt caller-allocated buffers. Both must hold exactly `width * height` cells.
    pub fn from_buffers(
        width: u32,
        height: u32,
        empty: Matter,
        buffer_a: Vec<Matter>,
        buffer_b: Vec<Matter>,
    ) -> EngineResult<Self> {
        let size = checked_size(width, height)?;
        if !empty.is_empty() {
            return Err(EngineError::EmptyMatterNotEmpty(empty.0));
        }
        if buffer_a.len() != size {
            return Err(EngineError::BufferSizeMismatch {
                name: "A",
                expected: size,
                actual: buffer_a.len(),
            });
        }
        if buffer_b.len() != size {
            return Err(EngineError::BufferSizeMismatch {
                name: "B",
                expected: size,
                actual: buffer_b.len(),
            });
        }
        Ok(Self {
            width,
            height,
            size,
            buffer_a,
            buffer_b,
            a_is_input: true,
            empty,
        })
    }

    #[inline]
    pub fn empty_matter(&self) -> Matter {
        self.empty
    }
}

/// width * height, rejecting zero-sized and u32-overflowing canvases
pub(crate) fn checked_size(width: u32, height: u32) -> EngineResult<usize> {
    if width == 0 || height == 0 {
        return Err(EngineError::EmptyCanvas { width, height });
    }
    width
        .checked_mul(height)
        .map(|n| n as usize)
        .ok_or(EngineError::CanvasTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matter::{MATTER_SAND, MATTER_WOOD};

    fn sand() -> Matter {
        Matter::new(MATTER_SAND, 0xc2b280)
    }

    #[test]
    fn new_grid_is_empty_in_both_buffers() {
        let grid = MatterGrid::new(8, 4, Matter::EMPTY).unwrap();
        assert_eq!(grid.size(), 32);
        assert!(grid.input().iter().all(|m| m.is_empty()));
        assert!(grid.output().iter().all(|m| m.is_empty()));
    }

    #[test]
    fn rejects_zero_sized_canvas() {
        assert!(matches!(
            MatterGrid::new(0, 4, Matter::EMPTY),
            Err(EngineError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn rejects_short_buffers() {
        let a = vec![Matter::EMPTY; 16];
        let b = vec![Matter::EMPTY; 15];
        let err = MatterGrid::from_buffers(4, 4, Matter::EMPTY, a, b).err().unwrap();
        match err {
            EngineError::BufferSizeMismatch { name, expected, actual } => {
                assert_eq!(name, "B");
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_empty_empty_value() {
        let err = MatterGrid::new(4, 4, Matter::new(MATTER_WOOD, 0)).err().unwrap();
        assert!(matches!(err, EngineError::EmptyMatterNotEmpty(2)));
    }

    #[test]
    fn rejects_overflowing_canvas() {
        assert!(matches!(
            checked_size(u32::MAX, 2),
            Err(EngineError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn index_is_row_major_by_width() {
        // Non-square on purpose: y * height + x would disagree here
        let grid = MatterGrid::new(7, 3, Matter::EMPTY).unwrap();
        assert_eq!(grid.index(2, 1), 9);
        assert_eq!(grid.coords(9), (2, 1));
        assert_eq!(grid.index_checked(7, 0), None);
        assert_eq!(grid.index_checked(-1, 0), None);
        assert_eq!(grid.index_checked(6, 2), Some(20));
    }

    #[test]
    fn write_goes_to_output_and_swap_exposes_it() {
        let mut grid = MatterGrid::new(4, 4, Matter::EMPTY).unwrap();
        grid.write(1, 2, sand());
        assert!(grid.read(1, 2).is_empty());
        grid.swap();
        assert_eq!(grid.read(1, 2), sand());
    }

    #[test]
    fn input_mut_edits_are_visible_to_reads() {
        let mut grid = MatterGrid::new(4, 4, Matter::EMPTY).unwrap();
        let idx = grid.index(3, 3);
        grid.input_mut()[idx] = sand();
        assert_eq!(grid.read(3, 3), sand());
        assert_eq!(grid.count_non_empty(), 1);
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut grid = MatterGrid::new(4, 4, Matter::EMPTY).unwrap();
        grid.write(0, 0, sand());
        let idx = grid.index(1, 1);
        grid.input_mut()[idx] = sand();
        grid.clear();
        assert!(grid.input().iter().all(|m| m.is_empty()));
        assert!(grid.output().iter().all(|m| m.is_empty()));
    }
}
