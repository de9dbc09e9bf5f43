//! Render - grid colors to the display image
//!
//! Pure read of the grid's input buffer, pure write of a separate surface.
//! Each cell's 24-bit color goes through the sRGB transfer curve so the
//! unorm image shows the painted hue once the presenter's sRGB target
//! re-encodes it.
//!
//! Pixels are packed ABGR (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
//! so the host can view the buffer directly as RGBA bytes.

use crate::core::{EngineError, EngineResult};
use crate::domain::matter::{color_to_rgba, Matter};
use crate::spatial::grid::MatterGrid;
use crate::systems::kernels::for_each_row;

/// sRGB-encoded channel in [0, 1] -> linear
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// 256-entry byte lookup of [`srgb_to_linear`]
pub struct GammaLut {
    table: [u8; 256],
}

impl GammaLut {
    pub fn new() -> Self {
        let mut table = [0u8; 256];
        for (i, v) in table.iter_mut().enumerate() {
            let linear = srgb_to_linear(i as f32 / 255.0);
            *v = (linear * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    #[inline]
    pub fn apply(&self, c: u8) -> u8 {
        self.table[c as usize]
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn pack_abgr(rgba: [u8; 4]) -> u32 {
    ((rgba[3] as u32) << 24) | ((rgba[2] as u32) << 16) | ((rgba[1] as u32) << 8) | rgba[0] as u32
}

/// Color of one cell as a display pixel
#[inline]
pub fn shade(matter: Matter, lut: &GammaLut) -> u32 {
    let [r, g, b, a] = color_to_rgba(matter.color());
    pack_abgr([lut.apply(r), lut.apply(g), lut.apply(b), a])
}

/// Display surface, one pixel per grid cell
pub struct DisplayImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    lut: GammaLut,
}

impl DisplayImage {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self { width, height, pixels: vec![0; size], lut: GammaLut::new() }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn pixels(&self) -> &[u32] { &self.pixels }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    /// Shade every cell of the grid's current input buffer
    pub fn render(&mut self, grid: &MatterGrid, band_rows: usize) -> EngineResult<()> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(EngineError::BufferSizeMismatch {
                name: "display",
                expected: grid.size(),
                actual: self.pixels.len(),
            });
        }

        let width = self.width as usize;
        let cells = grid.input();
        let lut = &self.lut;
        for_each_row(&mut self.pixels, width, band_rows, |y, row| {
            let src = &cells[y * width..(y + 1) * width];
            for (px, &matter) in row.iter_mut().zip(src) {
                *px = shade(matter, lut);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matter::{MATTER_SAND, MATTER_WOOD};

    #[test]
    fn curve_endpoints_and_threshold() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() < 1e-7);
        // Mid grey is darker once linearized
        assert!((srgb_to_linear(0.5) - 0.2140).abs() < 1e-3);
    }

    #[test]
    fn lut_is_monotonic_and_fixes_ends() {
        let lut = GammaLut::new();
        assert_eq!(lut.apply(0), 0);
        assert_eq!(lut.apply(255), 255);
        for i in 1..=255u8 {
            assert!(lut.apply(i) >= lut.apply(i - 1));
        }
    }

    #[test]
    fn abgr_byte_order() {
        let px = pack_abgr([0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(px.to_le_bytes(), [0x11, 0x22, 0x33, 0xFF]);
    }

    #[test]
    fn renders_each_cell_at_its_position() {
        let mut grid = MatterGrid::new(3, 2, Matter::EMPTY).unwrap();
        let sand = Matter::new(MATTER_SAND, 0xFFFFFF);
        let wood = Matter::new(MATTER_WOOD, 0x808080);
        let i = grid.index(2, 1);
        grid.input_mut()[i] = sand;
        let j = grid.index(0, 1);
        grid.input_mut()[j] = wood;

        let mut image = DisplayImage::new(3, 2);
        image.render(&grid, 1).unwrap();
        let lut = GammaLut::new();

        assert_eq!(image.pixel(2, 1), 0xFFFF_FFFF);
        assert_eq!(image.pixel(0, 0), 0xFF00_0000);
        let g = lut.apply(0x80) as u32;
        assert_eq!(image.pixel(0, 1), 0xFF00_0000 | (g << 16) | (g << 8) | g);
    }

    #[test]
    fn render_leaves_grid_untouched() {
        let mut grid = MatterGrid::new(4, 4, Matter::EMPTY).unwrap();
        grid.input_mut()[5] = Matter::new(MATTER_SAND, 0x123456);
        let before = grid.input().to_vec();
        let mut image = DisplayImage::new(4, 4);
        image.render(&grid, 2).unwrap();
        assert_eq!(grid.input(), &before[..]);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let grid = MatterGrid::new(4, 4, Matter::EMPTY).unwrap();
        let mut image = DisplayImage::new(4, 3);
        assert!(image.render(&grid, 1).is_err());
    }
}
