use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input path is not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Notebook reader error: {0}")]
    Notebook(#[from] nbcount::io::NotebookError),
}
