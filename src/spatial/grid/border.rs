/// A grid border
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Swap left and right; top and bottom stay
    #[inline]
    pub const fn mirrored(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            s => s,
        }
    }
}

/// Is (x, y) on the given border of a `width x height` grid?
#[inline]
pub fn is_edge(width: u32, height: u32, x: u32, y: u32, side: Side) -> bool {
    match side {
        Side::Top => y == 0,
        Side::Bottom => y + 1 == height,
        Side::Left => x == 0,
        Side::Right => x + 1 == width,
    }
}
