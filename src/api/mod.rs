//! High-level, ergonomic library API: count cells in a single notebook or a
//! directory of notebooks, and summarize cell composition. Prefer using these
//! entrypoints over the low-level `io` reader when integrating NBCOUNT.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::ipynb::Notebook;
use crate::types::CellType;

/// Cell composition of a single notebook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSummary {
    pub total: usize,
    pub code: usize,
    pub markdown: usize,
    pub raw: usize,
    pub other: usize,
}

impl CellSummary {
    fn tally(notebook: &Notebook) -> Self {
        let mut summary = CellSummary {
            total: notebook.cell_count(),
            ..CellSummary::default()
        };
        for cell_type in notebook.cell_types() {
            match cell_type {
                CellType::Code => summary.code += 1,
                CellType::Markdown => summary.markdown += 1,
                CellType::Raw => summary.raw += 1,
                CellType::Other => summary.other += 1,
            }
        }
        summary
    }
}

/// Batch counting report
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub counted: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Count the cells in a single notebook file
pub fn count_cells(input: &Path) -> Result<usize> {
    let notebook = Notebook::open(input)?;
    Ok(notebook.cell_count())
}

/// Count the cells in a notebook and break the count down by cell type
pub fn summarize_notebook(input: &Path) -> Result<CellSummary> {
    let notebook = Notebook::open(input)?;
    Ok(CellSummary::tally(&notebook))
}

/// Return the notebook files directly under `input_dir`, sorted by name
pub fn iterate_notebooks(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut notebooks = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if is_notebook_file(&path) {
            notebooks.push(path);
        }
    }
    notebooks.sort();
    Ok(notebooks)
}

/// Count every notebook directly under `input_dir`.
/// If `continue_on_error` is true, notebooks that fail to read are logged in
/// the report and counting continues; otherwise, the first error is returned.
pub fn count_directory(input_dir: &Path, continue_on_error: bool) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();

        if !is_notebook_file(&path) {
            debug!("Skipping non-notebook entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        match count_cells(&path) {
            Ok(_) => report.counted += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error counting {:?}: {}", path, e);
            }
        }
    }

    Ok(report)
}

fn is_notebook_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ipynb"))
}
