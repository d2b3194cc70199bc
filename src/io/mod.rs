//! I/O layer for reading Jupyter notebook documents.
//! Provides the `ipynb` reader and its `NotebookError` taxonomy.
pub mod ipynb;
pub use ipynb::{Notebook, NotebookError};
