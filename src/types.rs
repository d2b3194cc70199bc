//! Shared types used across NBCOUNT.
//! Includes `CellType`, the classification of a notebook cell by its
//! `cell_type` tag.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
    Other,
}

impl CellType {
    /// Classify a raw cell value by its optional `cell_type` tag.
    /// Missing or unrecognized tags classify as `Other`; cell payloads are
    /// otherwise uninspected, so this never fails.
    pub fn from_cell(cell: &Value) -> Self {
        match cell.get("cell_type").and_then(Value::as_str) {
            Some("code") => CellType::Code,
            Some("markdown") => CellType::Markdown,
            Some("raw") => CellType::Raw,
            _ => CellType::Other,
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CellType::Code => "code",
            CellType::Markdown => "markdown",
            CellType::Raw => "raw",
            CellType::Other => "other",
        };
        write!(f, "{}", s)
    }
}
