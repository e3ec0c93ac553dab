//! Renderers for a validated vanishing point.
//!
//! - `render_overlay`: the source photo with both segments, the point and a
//!   coordinate label.
//! - `render_grid_only`: a black canvas with 18 rays at 20° steps clipped to
//!   the frame, plus the point marker.
//!
//! Both are pure; encoding and storage belong to the caller.

pub mod grid;
mod grid_only;
mod overlay;
pub mod raster;
pub mod style;

pub use grid::{radial_grid, ray_boundary_hit, RadialGrid, Ray};
pub use grid_only::render_grid_only;
pub use overlay::render_overlay;

use crate::geometry::TargetFrame;
use crate::solver::Solution;
use image::RgbImage;

/// Both renders for one image.
pub struct RenderedPair {
    pub overlay: RgbImage,
    pub grid_only: RgbImage,
}

/// Renders both outputs for `source` from a solution computed against its
/// own dimensions.
pub fn render_pair(source: &RgbImage, solution: &Solution) -> RenderedPair {
    let frame = TargetFrame::new(source.width(), source.height());
    let [line1, line2] = &solution.lines;
    RenderedPair {
        overlay: render_overlay(source, line1, line2, solution.vp),
        grid_only: render_grid_only(frame, solution.vp),
    }
}
