//! Direction table - Moore neighborhood in clockwise order starting up-left
//!
//! Row 0 is the top of the canvas, so "up" is dy = -1.

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft = 0,
    Up = 1,
    UpRight = 2,
    Right = 3,
    DownRight = 4,
    Down = 5,
    DownLeft = 6,
    Left = 7,
}

/// (dx, dy) indexed by `Direction as usize`
pub const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
    ];

    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        OFFSETS[self as usize]
    }

    /// Mirror across the vertical axis (left <-> right)
    #[inline]
    pub const fn mirrored(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::UpRight,
            Direction::UpRight => Direction::UpLeft,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::DownRight => Direction::DownLeft,
            Direction::DownLeft => Direction::DownRight,
            d => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_moore_neighborhood_once() {
        let mut seen = std::collections::HashSet::new();
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
            assert!(seen.insert((dx, dy)));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn clockwise_order() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
    }

    #[test]
    fn mirror_flips_dx_only() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(d.mirrored().offset(), (-dx, dy));
        }
    }
}
