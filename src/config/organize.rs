use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct OrganizeToolConfig {
    /// `output_dir` of a previous dataset run.
    pub processed_dir: PathBuf,
    /// Destination for `train_control/` and `train_end/`.
    pub train_dir: PathBuf,
    /// Extensions of the source photos under `images/`.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Optional directory with `<id>.txt` captions.
    #[serde(default)]
    pub captions_dir: Option<PathBuf>,
    /// Remove files already present in the destination folders first.
    #[serde(default)]
    pub clear_existing: bool,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png"].map(String::from).to_vec()
}

impl OrganizeToolConfig {
    /// Configured extensions, lower-cased and without a leading dot.
    pub fn source_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

pub fn load_config(path: &Path) -> Result<OrganizeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
