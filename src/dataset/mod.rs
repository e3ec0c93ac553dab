//! Batch orchestration around the solver and renderers.
//!
//! Pipeline
//! - Discovery: pair `<labels>/<id>.txt` with `<images>/<id>.<ext>` by the
//!   shared numeric id (`discover_pairs`).
//! - Processing: parse, solve against the image's own size, render both
//!   outputs and write them under a [`DatasetLayout`] (`process_pair`).
//!   Existing outputs are skipped unless `overwrite` is set.
//! - Driver: images are independent, so `run_batch` maps them over a rayon
//!   pool and folds the outcomes into a [`BatchReport`]. A failing image
//!   never stops the batch.
//! - Export: `export_training_layout` renumbers rendered ids into the
//!   `train_control/` + `train_end/` folders consumed by training.

mod batch;
mod export;
mod pairs;
mod process;

pub use batch::{run_batch, BatchReport, ImageReport};
pub use export::{export_training_layout, ExportReport, ExportedPair, TRAIN_CONTROL_DIR, TRAIN_END_DIR};
pub use pairs::{discover_pairs, numeric_stem, ImagePair};
pub use process::{process_pair, ImageOutcome, ProcessError};

use std::fs;
use std::path::PathBuf;

pub const OVERLAYS_DIR: &str = "overlays";
pub const VP_ONLY_DIR: &str = "vanishing_points_only";
pub const IMAGES_DIR: &str = "images";
/// Encoding used for both rendered outputs.
pub const OUTPUT_EXT: &str = "jpg";

/// Knobs for discovery and processing.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOptions {
    /// Lower-case extensions without the dot, tried in order.
    pub extensions: Vec<String>,
    pub max_images: Option<usize>,
    pub overwrite: bool,
    pub copy_sources: bool,
    pub threads: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["jpg".to_string()],
            max_images: None,
            overwrite: false,
            copy_sources: true,
            threads: None,
        }
    }
}

/// Output folder structure rooted at one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetLayout {
    root: PathBuf,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn overlays_dir(&self) -> PathBuf {
        self.root.join(OVERLAYS_DIR)
    }

    pub fn vp_only_dir(&self) -> PathBuf {
        self.root.join(VP_ONLY_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn overlay_path(&self, stem: &str) -> PathBuf {
        self.overlays_dir()
            .join(format!("{stem}_overlay.{OUTPUT_EXT}"))
    }

    pub fn vp_only_path(&self, stem: &str) -> PathBuf {
        self.vp_only_dir()
            .join(format!("{stem}_vp_only.{OUTPUT_EXT}"))
    }

    pub fn create_dirs(&self) -> Result<(), String> {
        for dir in [self.overlays_dir(), self.vp_only_dir(), self.images_dir()] {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths_follow_naming_scheme() {
        let layout = DatasetLayout::new("/data/out");
        assert_eq!(
            layout.overlay_path("0042"),
            PathBuf::from("/data/out/overlays/0042_overlay.jpg")
        );
        assert_eq!(
            layout.vp_only_path("7"),
            PathBuf::from("/data/out/vanishing_points_only/7_vp_only.jpg")
        );
        assert_eq!(layout.images_dir(), PathBuf::from("/data/out/images"));
    }
}
