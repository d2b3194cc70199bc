use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::CellType;

/// Notebook interchange format major version this tool is written against.
/// Older or newer documents still count; the mismatch is only reported.
const SUPPORTED_NBFORMAT: u64 = 4;

/// Errors encountered when reading notebook documents
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Notebook document is not a JSON object")]
    NotAnObject,
    #[error("Missing field `{0}` in notebook document")]
    MissingField(&'static str),
    #[error("Field `{field}` in notebook document is not {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },
}

/// A notebook document parsed from `.ipynb` JSON
///
/// Cell payloads are kept as raw JSON values; the only per-cell attribute
/// this tool ever reads is the optional `cell_type` tag.
#[derive(Debug, Clone)]
pub struct Notebook {
    pub path: PathBuf,
    pub nbformat: Option<u64>,
    pub nbformat_minor: Option<u64>,
    pub cells: Vec<Value>,
}

impl Notebook {
    /// Open and parse a notebook file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        info!("Reading notebook: {:?}", path);
        let text = fs::read_to_string(path)?;
        Self::from_json_str(path, &text)
    }

    /// Parse and validate notebook JSON already held in memory
    pub fn from_json_str<P: AsRef<Path>>(path: P, text: &str) -> Result<Self, NotebookError> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_value(path.as_ref().to_path_buf(), document)
    }

    fn from_value(path: PathBuf, document: Value) -> Result<Self, NotebookError> {
        let object = document.as_object().ok_or(NotebookError::NotAnObject)?;

        let nbformat = version_field(object, "nbformat")?;
        let nbformat_minor = version_field(object, "nbformat_minor")?;
        if let Some(major) = nbformat {
            if major != SUPPORTED_NBFORMAT {
                warn!("Unexpected nbformat version: {}", major);
            }
        }

        let cells = match object.get("cells") {
            Some(Value::Array(cells)) => cells.clone(),
            Some(_) => {
                return Err(NotebookError::FieldType {
                    field: "cells",
                    expected: "an array",
                });
            }
            None => return Err(NotebookError::MissingField("cells")),
        };
        debug!("Parsed {} cell(s) from {:?}", cells.len(), path);

        Ok(Self {
            path,
            nbformat,
            nbformat_minor,
            cells,
        })
    }

    /// Number of cells in the document
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Per-cell classification, in notebook order
    pub fn cell_types(&self) -> Vec<CellType> {
        self.cells.iter().map(CellType::from_cell).collect()
    }
}

fn version_field(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<u64>, NotebookError> {
    match object.get(field) {
        None => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or(NotebookError::FieldType {
            field,
            expected: "an integer",
        }),
    }
}
