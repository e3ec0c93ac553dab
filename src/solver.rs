//! Vanishing point from two annotated segments.
//!
//! Pipeline
//! - Scale: the segments are remapped from the annotation's reference
//!   resolution to the target frame, independently per axis.
//! - Intersect: each segment becomes a homogeneous line (cross of its lifted
//!   endpoints); the vanishing point is the cross of the two lines.
//! - Validate: `w == 0` means no finite intersection. Otherwise `(X/W, Y/W)`
//!   is truncated toward zero and must fall inside `[0, w) x [0, h)`.
//!
//! An absent result is an expected outcome and callers skip the image.

use crate::annotation::AnnotationRecord;
use crate::geometry::{cross, LineSegment, ScaleFactors, TargetFrame};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Integer pixel location of a validated vanishing point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VanishingPoint {
    pub x: u32,
    pub y: u32,
}

impl VanishingPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn as_f64(&self) -> [f64; 2] {
        [f64::from(self.x), f64::from(self.y)]
    }
}

impl fmt::Display for VanishingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Why no vanishing point was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Rejection {
    /// Reference or target dimensions do not give positive scale factors.
    InvalidScale,
    /// The lines do not meet at a finite point.
    Parallel,
    /// The truncated intersection lies outside the frame.
    OutOfFrame { x: i64, y: i64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidScale => write!(f, "invalid scale factors"),
            Rejection::Parallel => write!(f, "lines are parallel or degenerate"),
            Rejection::OutOfFrame { x, y } => write!(f, "intersection ({x}, {y}) is outside the frame"),
        }
    }
}

/// Accepted vanishing point together with the segments it was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub vp: VanishingPoint,
    pub scale: ScaleFactors,
    /// Segments in the target frame's coordinates.
    pub lines: [LineSegment; 2],
}

/// Vanishing point of `record` drawn onto `frame`, or `None` when it is
/// undefined or outside the frame.
pub fn solve(record: &AnnotationRecord, frame: TargetFrame) -> Option<VanishingPoint> {
    solve_detailed(record, frame).ok().map(|s| s.vp)
}

/// Same as [`solve`], reporting the rescaled segments or the rejection reason.
pub fn solve_detailed(
    record: &AnnotationRecord,
    frame: TargetFrame,
) -> Result<Solution, Rejection> {
    let scale = ScaleFactors::between(record.ref_width, record.ref_height, frame)
        .ok_or(Rejection::InvalidScale)?;
    let lines = record.lines.map(|l| l.scaled(scale));
    let vp = intersect_in_frame(&lines[0], &lines[1], frame)?;
    Ok(Solution { vp, scale, lines })
}

/// Intersection of the infinite lines through `a` and `b`, validated against
/// `frame`. Both segments must already be in the frame's coordinates.
pub fn intersect_in_frame(
    a: &LineSegment,
    b: &LineSegment,
    frame: TargetFrame,
) -> Result<VanishingPoint, Rejection> {
    let p = cross(&a.homogeneous(), &b.homogeneous());
    let [xh, yh, w] = p;
    if w == 0.0 || !w.is_finite() || !xh.is_finite() || !yh.is_finite() {
        debug!("VP: no finite intersection (homogeneous point {p:?})");
        return Err(Rejection::Parallel);
    }
    let (fx, fy) = (xh / w, yh / w);
    if !fx.is_finite() || !fy.is_finite() {
        debug!("VP: intersection overflowed ({fx}, {fy})");
        return Err(Rejection::Parallel);
    }
    // `as` truncates toward zero and saturates, which keeps huge values out of frame.
    let (x, y) = (fx as i64, fy as i64);
    if !frame.contains(x, y) {
        debug!(
            "VP: ({x}, {y}) outside {}x{} frame",
            frame.width, frame.height
        );
        return Err(Rejection::OutOfFrame { x, y });
    }
    Ok(VanishingPoint::new(x as u32, y as u32))
}
