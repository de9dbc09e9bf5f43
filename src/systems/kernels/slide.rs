//! SlideKernel - diagonal rolling when blocked below
//!
//! Left bias moves grains down-left, right bias down-right. The caller
//! alternates the bias every sub-step so piles don't lean one way.

use super::{CellKernel, SlideBias, StepSchedule};
use crate::domain::matter::Matter;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{GridView, Side};

pub struct SlideKernel {
    bias: SlideBias,
}

impl SlideKernel {
    pub fn new(bias: SlideBias) -> Self {
        Self { bias }
    }

    pub fn for_schedule(schedule: &StepSchedule) -> Self {
        Self::new(schedule.slide_bias())
    }
}

/// Matter at `from_diag` rolls onto `to_diag` when it is blocked straight
/// below (`from_down` occupied) and the diagonal is free.
#[inline]
pub fn slides_on_empty(from_diag: Matter, to_diag: Matter, from_down: Matter) -> bool {
    from_diag.is_gravity_affected() && to_diag.is_empty() && !from_down.is_empty()
}

/// Left bias: grains arrive from up-right (blocked by the cell to the right)
/// and leave towards down-left. Right bias is this rule mirrored.
/// Fields: (arrive_from, beside, leave_to, leave_side)
const LEFT_RULE: (Direction, Direction, Direction, Side) =
    (Direction::UpRight, Direction::Right, Direction::DownLeft, Side::Left);

impl CellKernel for SlideKernel {
    #[inline]
    fn next(&self, view: &GridView<'_>, x: u32, y: u32) -> Matter {
        let (arrive_from, beside, leave_to, leave_side) = match self.bias {
            SlideBias::Left => LEFT_RULE,
            SlideBias::Right => {
                let (from, beside, to, side) = LEFT_RULE;
                (from.mirrored(), beside.mirrored(), to.mirrored(), side.mirrored())
            }
        };
        let arrive_side = leave_side.mirrored();

        let current = view.get(x, y);
        let top = view.is_edge(x, y, Side::Top);
        let bottom = view.is_edge(x, y, Side::Bottom);

        let from_diag = view.neighbor(x, y, arrive_from);
        if !top
            && !view.is_edge(x, y, arrive_side)
            && slides_on_empty(from_diag, current, view.neighbor(x, y, beside))
        {
            return from_diag;
        }

        let to_diag = view.neighbor(x, y, leave_to);
        if !bottom
            && !view.is_edge(x, y, leave_side)
            && slides_on_empty(current, to_diag, view.neighbor(x, y, Direction::Down))
        {
            return to_diag;
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use super::super::dispatch_and_swap;
    use super::*;

    fn slide(rows: &[&str], bias: SlideBias) -> Vec<String> {
        let mut grid = grid_from(rows);
        dispatch_and_swap(&mut grid, &SlideKernel::new(bias), 2);
        rows_of(&grid)
    }

    #[test]
    fn left_bias_rolls_down_left() {
        assert_eq!(
            slide(&["...", ".s.", ".w."], SlideBias::Left),
            vec!["...", "...", "sw."]
        );
    }

    #[test]
    fn right_bias_rolls_down_right() {
        assert_eq!(
            slide(&["...", ".s.", ".w."], SlideBias::Right),
            vec!["...", "...", ".ws"]
        );
    }

    #[test]
    fn unblocked_grain_does_not_slide() {
        assert_eq!(
            slide(&[".s.", "...", "..."], SlideBias::Left),
            vec![".s.", "...", "..."]
        );
    }

    #[test]
    fn grain_does_not_leave_through_left_wall() {
        assert_eq!(slide(&["s.", "w."], SlideBias::Left), vec!["s.", "w."]);
    }

    #[test]
    fn grain_does_not_leave_through_right_wall() {
        assert_eq!(slide(&[".s", ".w"], SlideBias::Right), vec![".s", ".w"]);
    }

    #[test]
    fn occupied_diagonal_blocks_slide() {
        assert_eq!(
            slide(&[".s.", "ww."], SlideBias::Left),
            vec![".s.", "ww."]
        );
        assert_eq!(
            slide(&[".s.", "ww."], SlideBias::Right),
            vec!["...", "wws"]
        );
    }

    #[test]
    fn wood_never_slides() {
        assert_eq!(slide(&[".w.", ".w."], SlideBias::Left), vec![".w.", ".w."]);
    }

    #[test]
    fn slides_on_empty_truth_table() {
        let sand = Matter::new(crate::domain::matter::MATTER_SAND, 1);
        let wood = Matter::new(crate::domain::matter::MATTER_WOOD, 1);
        assert!(slides_on_empty(sand, Matter::EMPTY, wood));
        assert!(!slides_on_empty(sand, Matter::EMPTY, Matter::EMPTY));
        assert!(!slides_on_empty(sand, wood, wood));
        assert!(!slides_on_empty(wood, Matter::EMPTY, wood));
    }
}
