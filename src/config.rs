use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::data::loader::SchemaKind;
use crate::{Result, SumprepError};

/// Character-length bounds a row must satisfy to survive filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min_source_len: usize,
    pub max_source_len: usize,
    pub min_target_len: usize,
    pub max_target_len: usize,
}

impl LengthBounds {
    pub fn validate(&self) -> Result<()> {
        if self.min_source_len > self.max_source_len {
            return Err(SumprepError::InvalidConfig(format!(
                "min_source_len ({}) exceeds max_source_len ({})",
                self.min_source_len, self.max_source_len
            )));
        }
        if self.min_target_len > self.max_target_len {
            return Err(SumprepError::InvalidConfig(format!(
                "min_target_len ({}) exceeds max_target_len ({})",
                self.min_target_len, self.max_target_len
            )));
        }
        Ok(())
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        LengthBounds {
            min_source_len: 64,
            max_source_len: 256,
            min_target_len: 16,
            max_target_len: 256,
        }
    }
}

fn default_lang() -> String {
    "zh".to_string()
}

fn default_test_size() -> usize {
    1000
}

fn default_seed() -> u64 {
    24601
}

/// Immutable configuration for one preparation run.
///
/// Constructed once (from a JSON file, CLI flags, or both) and passed into
/// every pipeline stage as a parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Language tag selecting the normalizer
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Raw training corpus
    pub train_file: PathBuf,

    /// Held-out raw test corpus; when absent the test split is carved from
    /// the training data
    #[serde(default)]
    pub test_file: Option<PathBuf>,

    /// Explicit schema; when absent the schema is inferred per file name
    #[serde(default)]
    pub schema: Option<SchemaKind>,

    #[serde(default)]
    pub bounds: LengthBounds,

    /// Rows to sample for the training table; unset keeps everything
    #[serde(default)]
    pub train_size: Option<usize>,

    /// Rows reserved for the test split
    #[serde(default = "default_test_size")]
    pub test_size: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Directory receiving train.csv, valid.csv, test.csv and the run summary
    pub output_dir: PathBuf,
}

impl PrepConfig {
    /// Create a configuration with default bounds, sizes and seed.
    pub fn new(train_file: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        PrepConfig {
            lang: default_lang(),
            train_file: train_file.into(),
            test_file: None,
            schema: None,
            bounds: LengthBounds::default(),
            train_size: None,
            test_size: default_test_size(),
            seed: default_seed(),
            output_dir: output_dir.into(),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: PrepConfig = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.test_size == 0 {
            return Err(SumprepError::InvalidConfig(
                "test_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
