/// 2D vector for brush geometry (canvas pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_cell(x: i32, y: i32) -> Self {
        Self { x: x as f32, y: y as f32 }
    }

    pub fn sub(&self, other: Vec2) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    pub fn add(&self, other: Vec2) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    pub fn scale(&self, s: f32) -> Self {
        Self { x: self.x * s, y: self.y * s }
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        self.sub(other).length()
    }

    /// Closest point to `self` on the segment [a, b]
    pub fn project_onto_segment(&self, a: Vec2, b: Vec2) -> Vec2 {
        let ab = b.sub(a);
        let len2 = ab.length_squared();
        if len2 <= f32::EPSILON {
            return a;
        }
        let t = (self.sub(a).dot(ab) / len2).clamp(0.0, 1.0);
        a.add(ab.scale(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(Vec2::new(-5.0, 3.0).project_onto_segment(a, b), a);
        assert_eq!(Vec2::new(15.0, -2.0).project_onto_segment(a, b), b);
        assert_eq!(Vec2::new(4.0, 7.0).project_onto_segment(a, b), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn degenerate_segment_projects_to_start() {
        let a = Vec2::new(3.0, 3.0);
        assert_eq!(Vec2::new(9.0, 1.0).project_onto_segment(a, a), a);
    }
}
