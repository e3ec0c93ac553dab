#![doc = include_str!("../README.md")]

// Core: annotation parsing, solving, rendering.
pub mod annotation;
pub mod geometry;
pub mod render;
pub mod solver;

// Orchestration around the core (file I/O, batch driver, tool configs).
pub mod config;
pub mod dataset;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::annotation::{parse_annotation, AnnotationRecord, ParseError};
pub use crate::geometry::{LineSegment, ScaleFactors, TargetFrame};
pub use crate::render::{render_grid_only, render_overlay, RadialGrid};
pub use crate::solver::{solve, solve_detailed, Rejection, Solution, VanishingPoint};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use vp_dataset::prelude::*;
///
/// let record = parse_annotation("100 100\n0 0 100 100\n0 100 100 0\n").unwrap();
/// let vp = solve(&record, TargetFrame::new(200, 200));
/// assert_eq!(vp, Some(VanishingPoint::new(100, 100)));
///
/// let schematic = render_grid_only(TargetFrame::new(200, 200), vp.unwrap());
/// assert_eq!(schematic.dimensions(), (200, 200));
/// ```
pub mod prelude {
    pub use crate::{
        parse_annotation, render_grid_only, render_overlay, solve, solve_detailed,
        AnnotationRecord, LineSegment, TargetFrame, VanishingPoint,
    };
}
