use super::raster::{draw_label, fill_disk, ring, stroke_line};
use super::style::{
    LABEL_COLOR, LABEL_OFFSET, LABEL_SCALE, LINE_COLOR, LINE_WIDTH, POINT_COLOR, POINT_RADIUS,
    RING_COLOR, RING_RADIUS, RING_WIDTH,
};
use crate::geometry::LineSegment;
use crate::solver::VanishingPoint;
use image::RgbImage;

/// Copy of `source` with both segments, the vanishing point and its
/// coordinates drawn on top.
///
/// Segments must already be in `source`'s pixel coordinates.
pub fn render_overlay(
    source: &RgbImage,
    line1: &LineSegment,
    line2: &LineSegment,
    vp: VanishingPoint,
) -> RgbImage {
    let mut out = source.clone();
    for seg in [line1, line2] {
        stroke_line(
            &mut out,
            (seg.x1 as i32, seg.y1 as i32),
            (seg.x2 as i32, seg.y2 as i32),
            LINE_WIDTH,
            LINE_COLOR,
        );
    }

    let center = (vp.x as i32, vp.y as i32);
    fill_disk(&mut out, center, POINT_RADIUS, POINT_COLOR);
    ring(&mut out, center, RING_RADIUS, RING_WIDTH, RING_COLOR);

    let label = format!("VP: {vp}");
    let origin = (center.0 + LABEL_OFFSET.0, center.1 + LABEL_OFFSET.1);
    draw_label(&mut out, origin, &label, LABEL_SCALE, LABEL_COLOR);
    out
}
