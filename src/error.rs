//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Converts underlying I/O and notebook reader errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Notebook reader error: {0}")]
    Notebook(#[from] crate::io::NotebookError),
}
