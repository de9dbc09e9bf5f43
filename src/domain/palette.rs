//! Palette - base colors and per-cell color jitter for painted matter

use super::matter::{
    color_to_rgba, rgb_to_color, Matter, MatterKind, MATTER_EMPTY, MATTER_SAND, MATTER_WOOD,
};

/// Largest per-channel shift applied by the jitter (about 10% of 255)
pub const JITTER_RANGE: i32 = 25;

/// Base 24-bit color of a kind. Unknown kinds paint as magenta so they stand out.
#[inline]
pub fn base_color(kind: MatterKind) -> u32 {
    match kind {
        MATTER_EMPTY => 0x000000,
        MATTER_SAND => 0xc2b280,
        MATTER_WOOD => 0x6f4e37,
        _ => 0xff00ff,
    }
}

/// Integer hash of a cell position + seed (lowbias32 finalizer)
#[inline]
pub fn cell_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = x.wrapping_mul(0x8da6_b343)
        ^ y.wrapping_mul(0xd816_3841)
        ^ seed.wrapping_mul(0xcb1a_b31f);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Shift all three channels of `base` by the same offset in [-JITTER_RANGE, JITTER_RANGE]
#[inline]
pub fn jitter_color(base: u32, x: u32, y: u32, seed: u32) -> u32 {
    let span = (2 * JITTER_RANGE + 1) as u32;
    let variation = (cell_hash(x, y, seed) % span) as i32 - JITTER_RANGE;
    let [r, g, b, _] = color_to_rgba(base);
    let shift = |c: u8| (c as i32 + variation).clamp(0, 255) as u8;
    rgb_to_color(shift(r), shift(g), shift(b))
}

/// The cell word the brush writes at (x, y). Empty paints `empty` untouched.
#[inline]
pub fn painted_matter(kind: MatterKind, empty: Matter, x: u32, y: u32, seed: u32) -> Matter {
    if kind == MATTER_EMPTY {
        return empty;
    }
    Matter::new(kind, jitter_color(base_color(kind), x, y, seed))
}
