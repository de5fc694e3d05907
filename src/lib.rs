pub mod config;
pub mod data;
pub mod io;
pub mod pipeline;
pub mod transform;

pub use config::{LengthBounds, PrepConfig};
pub use data::loader::SchemaKind;
pub use data::record::Record;
pub use data::splitter::SplitSpec;

/// Custom error type for Sumprep
#[derive(thiserror::Error, Debug)]
pub enum SumprepError {
    #[error("unrecognized dataset schema for {path}: file name matches neither news2016zh nor lcsts_data")]
    UnrecognizedSchema { path: std::path::PathBuf },

    #[error("no normalizer registered for language '{lang}'")]
    UnsupportedLanguage { lang: String },

    #[error("no rows left {context}")]
    EmptyResult { context: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SumprepError>;
