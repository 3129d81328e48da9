use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Bikeshare Explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A user token did not match any entry in the relevant lookup table.
    /// Recoverable: the caller re-prompts.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// The backing dataset file could not be opened or read. Fatal.
    #[error("Dataset unavailable at {path}: {source}")]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset row carries a value that cannot be parsed. Fatal.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// A statistic was requested over an empty table.
    #[error("No trips match the selected filters")]
    NoData,

    /// A row-level CSV error (quoting, field count) from the `csv` crate.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;
