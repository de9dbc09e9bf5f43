//! Orthographic world-to-screen transform for the presentation stage
//!
//! World units are canvas cells, centered on the origin. The projection maps
//! the window-sized box `[left, right] x [bottom, top]` (times `scale`,
//! shifted by `pan`) to clip space with depth in [0, 1], then flips y so
//! clip-space +y points down the screen.

/// Column-major 4x4, `m[col][row]`
type Mat4 = [[f32; 4]; 4];

const NEAR: f32 = 0.0;
const FAR: f32 = 1000.0;
const MIN_SCALE: f32 = 1.0 / 64.0;

/// y-down clip space, depth remapped from [-1, 1] to [0, 1]
const Y_FLIP: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, -1.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.0],
    [0.0, 0.0, 0.5, 1.0],
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicView {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
    scale: f32,
    pan: (f32, f32),
}

impl OrthographicView {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let mut view = Self {
            left: 0.0,
            right: 0.0,
            bottom: 0.0,
            top: 0.0,
            near: NEAR,
            far: FAR,
            scale: 1.0,
            pan: (0.0, 0.0),
        };
        view.update(window_width, window_height);
        view
    }

    /// Re-fit the box to a new window size; scale and pan are kept
    pub fn update(&mut self, window_width: f32, window_height: f32) {
        let half_w = window_width.max(1.0) / 2.0;
        let half_h = window_height.max(1.0) / 2.0;
        self.left = -half_w;
        self.right = half_w;
        self.bottom = -half_h;
        self.top = half_h;
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Zoom factor; larger shows more of the world. Non-finite input is ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.max(MIN_SCALE);
        }
    }

    #[inline]
    pub fn pan_offset(&self) -> (f32, f32) {
        self.pan
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan.0 += dx;
        self.pan.1 += dy;
    }

    pub fn reset_pan(&mut self) {
        self.pan = (0.0, 0.0);
    }

    fn projection(&self) -> Mat4 {
        let (px, py) = self.pan;
        let left = self.left * self.scale + px;
        let right = self.right * self.scale + px;
        let bottom = self.bottom * self.scale + py;
        let top = self.top * self.scale + py;

        let rcp_w = 1.0 / (right - left);
        let rcp_h = 1.0 / (top - bottom);
        let r = 1.0 / (self.near - self.far);
        [
            [2.0 * rcp_w, 0.0, 0.0, 0.0],
            [0.0, 2.0 * rcp_h, 0.0, 0.0],
            [0.0, 0.0, r, 0.0],
            [-(left + right) * rcp_w, -(top + bottom) * rcp_h, r * self.near, 1.0],
        ]
    }

    /// Flattened column-major matrix
    pub fn world_to_screen(&self) -> [f32; 16] {
        let m = mul(&Y_FLIP, &self.projection());
        let mut out = [0.0; 16];
        for (c, col) in m.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// Apply [`world_to_screen`](Self::world_to_screen) to a world point (z = 0)
    pub fn project(&self, x: f32, y: f32) -> [f32; 4] {
        let m = self.world_to_screen();
        let v = [x, y, 0.0, 1.0];
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|c| m[c * 4 + row] * v[c]).sum();
        }
        out
    }
}

fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [[0.0; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            out[c][r] = (0..4).map(|k| a[k][r] * b[c][k]).sum();
        }
    }
    out
}
