use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Result;
use crate::config::PrepConfig;

/// Run metadata saved next to the emitted splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub train_rows: usize,
    pub valid_rows: usize,
    pub test_rows: usize,
    pub inputs: Vec<InputStats>,
    pub config: PrepConfig,
    pub creation_date: String,
}

/// Row counts observed while preparing one raw input file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputStats {
    pub file: String,
    pub loaded_rows: usize,
    pub filtered_rows: usize,
    pub transformed_rows: usize,
}

impl InputStats {
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file: path.as_ref().display().to_string(),
            ..Self::default()
        }
    }
}

/// Save the run summary as pretty-printed JSON.
pub fn save_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;

    log::info!("Run summary saved to: {}", path.display());
    Ok(())
}
