use crate::dataset::BatchOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DatasetToolConfig {
    /// Directory holding `<id>.<ext>` source images.
    pub images_dir: PathBuf,
    /// Directory holding `<id>.txt` annotation records.
    pub labels_dir: PathBuf,
    /// Root for `overlays/`, `vanishing_points_only/` and `images/`.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Image extensions tried for each id, in order.
    pub extensions: Option<Vec<String>>,
    pub max_images: Option<usize>,
    /// Re-render even when both outputs exist.
    pub overwrite: Option<bool>,
    /// Copy each rendered source into `output_dir/images`.
    pub copy_sources: Option<bool>,
    /// Worker threads; rayon's global pool when unset.
    pub threads: Option<usize>,
}

impl BatchConfig {
    pub fn resolve(&self) -> BatchOptions {
        let mut opts = BatchOptions::default();
        if let Some(exts) = &self.extensions {
            let cleaned: Vec<String> = exts
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
            if !cleaned.is_empty() {
                opts.extensions = cleaned;
            }
        }
        if let Some(v) = self.max_images {
            opts.max_images = Some(v);
        }
        if let Some(v) = self.overwrite {
            opts.overwrite = v;
        }
        if let Some(v) = self.copy_sources {
            opts.copy_sources = v;
        }
        opts.threads = self.threads.filter(|&n| n > 0);
        opts
    }
}

pub fn load_config(path: &Path) -> Result<DatasetToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
