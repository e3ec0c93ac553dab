use super::BatchOptions;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Source image and annotation sharing one numeric id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePair {
    pub id: u64,
    /// File stem as found on disk, leading zeros included.
    pub stem: String,
    pub image: PathBuf,
    pub annotation: PathBuf,
}

/// Numeric id and raw stem of `path`, if the stem is all digits.
pub fn numeric_stem(path: &Path) -> Option<(u64, String)> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id = stem.parse::<u64>().ok()?;
    Some((id, stem.to_string()))
}

pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Pairs every numeric `*.txt` in `labels_dir` with an image in `images_dir`.
///
/// Sorted by id; capped at `opts.max_images`. Labels without an image are
/// logged and left out.
pub fn discover_pairs(
    images_dir: &Path,
    labels_dir: &Path,
    opts: &BatchOptions,
) -> Result<Vec<ImagePair>, String> {
    let entries = fs::read_dir(labels_dir)
        .map_err(|e| format!("Failed to list {}: {e}", labels_dir.display()))?;

    let mut pairs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to list {}: {e}", labels_dir.display()))?;
        let annotation = entry.path();
        if !annotation.is_file() || !has_extension(&annotation, "txt") {
            continue;
        }
        let Some((id, stem)) = numeric_stem(&annotation) else {
            debug!("Ignoring non-numeric label {}", annotation.display());
            continue;
        };
        let image = opts
            .extensions
            .iter()
            .map(|ext| images_dir.join(format!("{stem}.{ext}")))
            .find(|p| p.is_file());
        match image {
            Some(image) => pairs.push(ImagePair {
                id,
                stem,
                image,
                annotation,
            }),
            None => warn!("Image not found for label {}", annotation.display()),
        }
    }

    pairs.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.stem.cmp(&b.stem)));
    if let Some(max) = opts.max_images {
        pairs.truncate(max);
    }
    debug!("Discovered {} image/label pairs", pairs.len());
    Ok(pairs)
}
