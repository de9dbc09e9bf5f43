//! Matter - packed 32-bit cell values
//!
//! Layout of one cell word:
//!   bits  0..8   kind  (0 = empty, 1 = sand, ...)
//!   bits  8..32  color (24-bit RGB, R in the highest byte)
//!
//! Kind and color are stored independently so painted matter keeps its
//! jittered hue while it moves around the grid.

/// Matter kind id (low byte of a cell word)
pub type MatterKind = u8;

pub const MATTER_EMPTY: MatterKind = 0;
pub const MATTER_SAND: MatterKind = 1;
pub const MATTER_WOOD: MatterKind = 2;

/// Number of kinds with a defined behavior (ids below this are "known")
pub const MATTER_KIND_COUNT: usize = 3;

const KIND_MASK: u32 = 0xFF;
const COLOR_SHIFT: u32 = 8;
/// Largest representable 24-bit color
pub const COLOR_MAX: u32 = 0x00FF_FFFF;

/// One packed grid cell
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matter(pub u32);

impl Matter {
    /// The all-zero word: empty kind, black color
    pub const EMPTY: Matter = Matter(0);

    #[inline]
    pub const fn new(kind: MatterKind, color: u32) -> Self {
        Matter(encode(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> MatterKind {
        (self.0 & KIND_MASK) as MatterKind
    }

    #[inline]
    pub const fn color(self) -> u32 {
        self.0 >> COLOR_SHIFT
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.kind() == MATTER_EMPTY
    }

    #[inline]
    pub const fn is_gravity_affected(self) -> bool {
        is_gravity_affected(self.kind())
    }
}

impl From<u32> for Matter {
    fn from(value: u32) -> Self {
        Matter(value)
    }
}

impl From<Matter> for u32 {
    fn from(matter: Matter) -> Self {
        matter.0
    }
}

/// Pack kind + color. Color bits above 24 are dropped.
#[inline]
pub const fn encode(kind: MatterKind, color: u32) -> u32 {
    ((color & COLOR_MAX) << COLOR_SHIFT) | kind as u32
}

/// Unpack a cell word. Total: every u32 decodes.
#[inline]
pub const fn decode(word: u32) -> (MatterKind, u32) {
    ((word & KIND_MASK) as MatterKind, word >> COLOR_SHIFT)
}

/// Split a 24-bit color into RGBA bytes. Stored matter is always opaque.
#[inline]
pub const fn color_to_rgba(color: u32) -> [u8; 4] {
    [
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
        0xFF,
    ]
}

/// Inverse of [`color_to_rgba`] for the RGB part
#[inline]
pub const fn rgb_to_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub const fn is_known_kind(kind: MatterKind) -> bool {
    (kind as usize) < MATTER_KIND_COUNT
}

/// Only sand falls and slides. Unknown kinds are inert.
#[inline]
pub const fn is_gravity_affected(kind: MatterKind) -> bool {
    kind == MATTER_SAND
}
