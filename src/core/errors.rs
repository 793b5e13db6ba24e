use std::path::PathBuf;

/// All domain errors for envdiff.
///
/// These only ever originate at the edges — file loading, configuration,
/// export serialization. Parsing and diffing are total and never fail.
#[derive(Debug, thiserror::Error)]
pub enum EnvdiffError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         envdiff compares two files: envdiff diff <file_a> <file_b>"
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Unknown export format '{name}'\n\n  \
         Available formats: {available}"
    )]
    UnknownFormat { name: String, available: String },

    #[error("Export failed: {detail}")]
    ExportFailed { detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvdiffError>;
