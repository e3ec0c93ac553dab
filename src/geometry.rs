//! Homogeneous 2D geometry used by the solver and the renderers.
//!
//! Points and lines are plain `[f64; 3]` vectors. A point `(x, y)` lifts to
//! `[x, y, 1]`; the line through two lifted points is their cross product and
//! the intersection of two lines is the cross product of the lines. Parallel
//! lines meet at a point with `w == 0`.

use serde::{Deserialize, Serialize};

/// Homogeneous 3-vector (point or line).
pub type Vec3 = [f64; 3];

/// Lifts a Euclidean point to homogeneous coordinates.
#[inline]
pub fn lift(p: [f64; 2]) -> Vec3 {
    [p[0], p[1], 1.0]
}

#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Line segment `(x1, y1) -> (x2, y2)` in some pixel coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn p0(&self) -> [f64; 2] {
        [self.x1, self.y1]
    }

    pub fn p1(&self) -> [f64; 2] {
        [self.x2, self.y2]
    }

    /// Applies per-axis scale factors to both endpoints.
    pub fn scaled(&self, scale: ScaleFactors) -> Self {
        Self {
            x1: self.x1 * scale.x,
            y1: self.y1 * scale.y,
            x2: self.x2 * scale.x,
            y2: self.y2 * scale.y,
        }
    }

    /// Line through both endpoints: `[a, b, c]` with `a x + b y + c = 0`.
    ///
    /// Not normalized; a zero-length segment yields the zero vector.
    pub fn homogeneous(&self) -> Vec3 {
        cross(&lift(self.p0()), &lift(self.p1()))
    }
}

/// Pixel dimensions of the image a vanishing point is drawn onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFrame {
    pub width: u32,
    pub height: u32,
}

impl TargetFrame {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

/// Per-axis ratio between a target frame and a reference resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub const IDENTITY: ScaleFactors = ScaleFactors { x: 1.0, y: 1.0 };

    /// Ratios `frame / reference` on each axis.
    ///
    /// Returns `None` unless both factors are strictly positive and finite.
    pub fn between(ref_width: u32, ref_height: u32, frame: TargetFrame) -> Option<Self> {
        if ref_width == 0 || ref_height == 0 {
            return None;
        }
        let x = f64::from(frame.width) / f64::from(ref_width);
        let y = f64::from(frame.height) / f64::from(ref_height);
        let valid = |s: f64| s.is_finite() && s > 0.0;
        (valid(x) && valid(y)).then_some(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = [1.5, -2.0, 3.0];
        let b = [0.25, 4.0, -1.0];
        let c = cross(&a, &b);
        assert!(dot(&a, &c).abs() < 1e-12);
        assert!(dot(&b, &c).abs() < 1e-12);
    }

    #[test]
    fn homogeneous_line_passes_through_endpoints() {
        let seg = LineSegment::new(3.0, 7.5, -12.0, 40.25);
        let line = seg.homogeneous();
        assert!(dot(&line, &lift(seg.p0())).abs() < 1e-9);
        assert!(dot(&line, &lift(seg.p1())).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_has_zero_line() {
        let seg = LineSegment::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(seg.homogeneous(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn scale_factors_are_per_axis() {
        let s = ScaleFactors::between(100, 50, TargetFrame::new(200, 50)).expect("valid");
        assert_eq!(s, ScaleFactors { x: 2.0, y: 1.0 });
        let seg = LineSegment::new(10.0, 20.0, 30.0, 40.0).scaled(s);
        assert_eq!(seg, LineSegment::new(20.0, 20.0, 60.0, 40.0));
    }

    #[test]
    fn scale_factors_reject_zero_dimensions() {
        assert!(ScaleFactors::between(0, 10, TargetFrame::new(10, 10)).is_none());
        assert!(ScaleFactors::between(10, 10, TargetFrame::new(0, 10)).is_none());
    }

    #[test]
    fn frame_containment_is_half_open() {
        let frame = TargetFrame::new(50, 40);
        assert!(frame.contains(0, 0));
        assert!(frame.contains(49, 39));
        assert!(!frame.contains(50, 0));
        assert!(!frame.contains(0, 40));
        assert!(!frame.contains(-1, 5));
    }
}
