//! GravityKernel - straight-down falling
//!
//! A cell either receives the matter falling in from above, hands its own
//! matter to the empty cell below (becoming what was below), or stays.

use super::CellKernel;
use crate::domain::matter::Matter;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{GridView, Side};

pub struct GravityKernel;

impl CellKernel for GravityKernel {
    #[inline]
    fn next(&self, view: &GridView<'_>, x: u32, y: u32) -> Matter {
        let current = view.get(x, y);
        let up = view.neighbor(x, y, Direction::Up);
        let down = view.neighbor(x, y, Direction::Down);

        let top = view.is_edge(x, y, Side::Top);
        let bottom = view.is_edge(x, y, Side::Bottom);

        if !top && up.is_gravity_affected() && current.is_empty() {
            up
        } else if !bottom && current.is_gravity_affected() && down.is_empty() {
            down
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use super::super::dispatch_and_swap;
    use super::*;

    fn fall(rows: &[&str]) -> Vec<String> {
        let mut grid = grid_from(rows);
        dispatch_and_swap(&mut grid, &GravityKernel, 4);
        rows_of(&grid)
    }

    #[test]
    fn sand_falls_one_row() {
        assert_eq!(fall(&["s", ".", "."]), vec![".", "s", "."]);
    }

    #[test]
    fn supported_sand_stays() {
        assert_eq!(fall(&[".", "s", "w"]), vec![".", "s", "w"]);
        assert_eq!(fall(&["s", "s", "s"]), vec!["s", "s", "s"]);
    }

    #[test]
    fn bottom_row_holds_sand() {
        assert_eq!(fall(&[".", "s"]), vec![".", "s"]);
    }

    #[test]
    fn column_with_gap_moves_only_bottom_grain_into_gap() {
        // Upper grain is blocked this generation by the grain below it
        assert_eq!(fall(&["s", "s", "."]), vec!["s", ".", "s"]);
    }

    #[test]
    fn wood_does_not_fall() {
        assert_eq!(fall(&["w", ".", "."]), vec!["w", ".", "."]);
    }

    #[test]
    fn falling_keeps_the_grain_color() {
        let mut grid = grid_from(&["s", "."]);
        let before = grid.read(0, 0);
        dispatch_and_swap(&mut grid, &GravityKernel, 1);
        assert_eq!(grid.read(0, 1), before);
    }
}
