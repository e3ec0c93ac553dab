use super::pairs::has_extension;
use super::{numeric_stem, DatasetLayout};
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Grid-only renders, renamed `<n>.jpg`.
pub const TRAIN_CONTROL_DIR: &str = "train_control";
/// Source photos `<n>.<ext>` plus optional captions `<n>.txt`.
pub const TRAIN_END_DIR: &str = "train_end";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPair {
    pub index: usize,
    pub stem: String,
    pub caption: bool,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub exported: usize,
    pub missing_control: usize,
    pub captions: usize,
    pub pairs: Vec<ExportedPair>,
}

/// Copies processed pairs into the training layout, numbering from 1 in
/// ascending id order. Only sources whose extension is in `extensions` are
/// considered; those without a grid-only render are skipped.
pub fn export_training_layout(
    processed: &DatasetLayout,
    extensions: &[String],
    train_dir: &Path,
    captions_dir: Option<&Path>,
    clear_existing: bool,
) -> Result<ExportReport, String> {
    let control_dir = train_dir.join(TRAIN_CONTROL_DIR);
    let end_dir = train_dir.join(TRAIN_END_DIR);
    for dir in [&control_dir, &end_dir] {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        if clear_existing {
            clear_files(dir)?;
        }
    }

    let sources = numbered_files(&processed.images_dir(), extensions)?;
    let mut report = ExportReport::default();
    for (_, stem, source) in sources {
        let control = processed.vp_only_path(&stem);
        if !control.is_file() {
            warn!("No grid-only render for {}", source.display());
            report.missing_control += 1;
            continue;
        }

        let index = report.exported + 1;
        let control_ext = extension_of(&control);
        copy_file(&control, &control_dir.join(format!("{index}.{control_ext}")))?;
        let source_ext = extension_of(&source);
        copy_file(&source, &end_dir.join(format!("{index}.{source_ext}")))?;

        let caption = match captions_dir.map(|dir| dir.join(format!("{stem}.txt"))) {
            Some(path) if path.is_file() => {
                copy_file(&path, &end_dir.join(format!("{index}.txt")))?;
                report.captions += 1;
                true
            }
            _ => false,
        };

        report.exported = index;
        report.pairs.push(ExportedPair {
            index,
            stem,
            caption,
        });
    }

    info!(
        "Exported {} pairs to {} ({} captions, {} without control image)",
        report.exported,
        train_dir.display(),
        report.captions,
        report.missing_control
    );
    Ok(report)
}

fn numbered_files(
    dir: &Path,
    extensions: &[String],
) -> Result<Vec<(u64, String, PathBuf)>, String> {
    let entries = fs::read_dir(dir).map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
            .path();
        if !path.is_file() || !extensions.iter().any(|ext| has_extension(&path, ext)) {
            continue;
        }
        if let Some((id, stem)) = numeric_stem(&path) {
            files.push((id, stem, path));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    Ok(files)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg")
        .to_string()
}

fn copy_file(from: &Path, to: &Path) -> Result<(), String> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| format!("Failed to copy {} to {}: {e}", from.display(), to.display()))
}

fn clear_files(dir: &Path) -> Result<(), String> {
    let entries = fs::read_dir(dir).map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
            .path();
        if path.is_file() {
            fs::remove_file(&path)
                .map_err(|e| format!("Failed to remove {}: {e}", path.display()))?;
        }
    }
    Ok(())
}
