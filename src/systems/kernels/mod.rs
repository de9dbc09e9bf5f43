//! Kernels - per-cell transition rules run as one data-parallel pass
//!
//! Every kernel is a pull rule: a worker computes the next value of the one
//! cell it owns from reads of the previous generation only. The driver hands
//! out disjoint bands of output rows, so there is exactly one writer per
//! output cell and nobody writes the buffer being read.

mod gravity;
mod schedule;
mod slide;

pub use gravity::GravityKernel;
pub use schedule::{SlideBias, StepSchedule};
pub use slide::SlideKernel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::matter::Matter;
use crate::spatial::grid::{GridView, MatterGrid};

/// One per-cell rule
pub trait CellKernel: Sync {
    fn next(&self, view: &GridView<'_>, x: u32, y: u32) -> Matter;
}

/// Run `f(y, row)` for every row of `output`, `band_rows` rows per task.
/// PARALLEL: bands go to the Rayon pool when the feature is enabled.
pub fn for_each_row<T, F>(output: &mut [T], width: usize, band_rows: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    let band_rows = band_rows.max(1);
    let band = width * band_rows;

    #[cfg(feature = "parallel")]
    {
        output.par_chunks_mut(band).enumerate().for_each(|(b, chunk)| {
            for (r, row) in chunk.chunks_mut(width).enumerate() {
                f(b * band_rows + r, row);
            }
        });
    }

    #[cfg(not(feature = "parallel"))]
    {
        output.chunks_mut(band).enumerate().for_each(|(b, chunk)| {
            for (r, row) in chunk.chunks_mut(width).enumerate() {
                f(b * band_rows + r, row);
            }
        });
    }
}

/// Input -> output over the whole grid. Roles are NOT swapped here.
pub fn dispatch<K: CellKernel>(grid: &mut MatterGrid, kernel: &K, band_rows: usize) {
    let width = grid.width() as usize;
    let (view, output) = grid.phase();
    for_each_row(output, width, band_rows, |y, row| {
        let y = y as u32;
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = kernel.next(&view, x as u32, y);
        }
    });
}

/// Dispatch then swap, so the result becomes the next input
pub fn dispatch_and_swap<K: CellKernel>(grid: &mut MatterGrid, kernel: &K, band_rows: usize) {
    dispatch(grid, kernel, band_rows);
    grid.swap();
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::domain::matter::{Matter, MATTER_SAND, MATTER_WOOD};
    use crate::spatial::grid::MatterGrid;

    /// Build a grid from ASCII rows: '.' empty, 's' sand, 'w' wood
    pub fn grid_from(rows: &[&str]) -> MatterGrid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut grid = MatterGrid::new(width, height, Matter::EMPTY).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let m = match c {
                    's' => Matter::new(MATTER_SAND, 0xc2b280),
                    'w' => Matter::new(MATTER_WOOD, 0x6f4e37),
                    _ => Matter::EMPTY,
                };
                let idx = grid.index(x as u32, y as u32);
                grid.input_mut()[idx] = m;
            }
        }
        grid
    }

    /// Render the input buffer back to ASCII rows
    pub fn rows_of(grid: &MatterGrid) -> Vec<String> {
        (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| match grid.read(x, y).kind() {
                        0 => '.',
                        MATTER_SAND => 's',
                        MATTER_WOOD => 'w',
                        _ => '?',
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;

    struct Identity;

    impl CellKernel for Identity {
        fn next(&self, view: &GridView<'_>, x: u32, y: u32) -> Matter {
            view.get(x, y)
        }
    }

    #[test]
    fn identity_dispatch_copies_input_to_output() {
        let mut grid = grid_from(&["s..", ".w.", "..s"]);
        dispatch_and_swap(&mut grid, &Identity, 2);
        assert_eq!(rows_of(&grid), vec!["s..", ".w.", "..s"]);
    }

    #[test]
    fn row_driver_visits_every_row_once() {
        let mut out = vec![Matter::EMPTY; 5 * 7];
        for_each_row(&mut out, 5, 3, |y, row| {
            for cell in row.iter_mut() {
                *cell = Matter(cell.0 + y as u32 + 1);
            }
        });
        for (i, m) in out.iter().enumerate() {
            assert_eq!(m.0, (i / 5) as u32 + 1);
        }
    }
}
