use super::{BatchOptions, DatasetLayout, ImagePair};
use crate::annotation::{read_annotation, AnnotationFileError};
use crate::geometry::TargetFrame;
use crate::image::io::{ensure_parent_dir, load_rgb_image, save_rgb_image};
use crate::render::render_pair;
use crate::solver::{solve_detailed, Rejection, VanishingPoint};
use log::debug;
use serde::Serialize;
use std::fs;
use thiserror::Error;

/// What happened to one image.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ImageOutcome {
    Rendered { vp: VanishingPoint },
    /// Both outputs already existed.
    Skipped,
    NoVanishingPoint { reason: Rejection },
    Failed { error: String },
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Annotation(#[from] AnnotationFileError),
    #[error("{0}")]
    Image(String),
    #[error("{0}")]
    Output(String),
}

/// Renders the overlay and grid-only images for one pair.
///
/// An absent vanishing point is reported as an outcome, not an error.
pub fn process_pair(
    pair: &ImagePair,
    layout: &DatasetLayout,
    opts: &BatchOptions,
) -> Result<ImageOutcome, ProcessError> {
    let overlay_path = layout.overlay_path(&pair.stem);
    let vp_only_path = layout.vp_only_path(&pair.stem);
    if !opts.overwrite && overlay_path.is_file() && vp_only_path.is_file() {
        debug!("{}: outputs exist, skipping", pair.stem);
        return Ok(ImageOutcome::Skipped);
    }

    let record = read_annotation(&pair.annotation)?;
    let source = load_rgb_image(&pair.image).map_err(ProcessError::Image)?;
    let frame = TargetFrame::new(source.width(), source.height());

    let solution = match solve_detailed(&record, frame) {
        Ok(solution) => solution,
        Err(reason) => {
            debug!(
                "{}: no vanishing point in {}x{} ({reason})",
                pair.stem, frame.width, frame.height
            );
            return Ok(ImageOutcome::NoVanishingPoint { reason });
        }
    };

    let rendered = render_pair(&source, &solution);
    save_rgb_image(&rendered.overlay, &overlay_path).map_err(ProcessError::Output)?;
    save_rgb_image(&rendered.grid_only, &vp_only_path).map_err(ProcessError::Output)?;
    if opts.copy_sources {
        copy_source(pair, layout, opts.overwrite).map_err(ProcessError::Output)?;
    }

    debug!(
        "{}: vanishing point {} (scale {:.3}x{:.3})",
        pair.stem, solution.vp, solution.scale.x, solution.scale.y
    );
    Ok(ImageOutcome::Rendered { vp: solution.vp })
}

fn copy_source(pair: &ImagePair, layout: &DatasetLayout, overwrite: bool) -> Result<(), String> {
    let Some(name) = pair.image.file_name() else {
        return Err(format!("Invalid image path {}", pair.image.display()));
    };
    let dest = layout.images_dir().join(name);
    if dest == pair.image || (!overwrite && dest.is_file()) {
        return Ok(());
    }
    ensure_parent_dir(&dest)?;
    fs::copy(&pair.image, &dest)
        .map(|_| ())
        .map_err(|e| format!("Failed to copy {} to {}: {e}", pair.image.display(), dest.display()))
}
