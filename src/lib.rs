#![doc = r#"
NBCOUNT — a Jupyter notebook cell counter.

This crate provides a typed, ergonomic API for counting the cells of Jupyter
notebook (`.ipynb`) documents: open a notebook, validate that it carries a
`cells` array, and report how many cells it holds, optionally broken down by
cell type. It powers the NBCOUNT CLI and can be embedded in your own Rust
applications.

Stability
---------
The public library API is experimental in initial releases. It covers the
working tool used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
nbcount = "0.1"
```

Quick start: count the cells of a notebook
------------------------------------------
```rust,no_run
use std::path::Path;
use nbcount::count_cells;

fn main() -> nbcount::Result<()> {
    let count = count_cells(Path::new("CP-Math-Demosaic.ipynb"))?;
    println!("Starting with {} cell(s)", count);
    Ok(())
}
```

Per-type breakdown
------------------
```rust,no_run
use std::path::Path;
use nbcount::summarize_notebook;

fn main() -> nbcount::Result<()> {
    let summary = summarize_notebook(Path::new("CP-Math-Demosaic.ipynb"))?;
    println!(
        "total={} code={} markdown={} raw={}",
        summary.total, summary.code, summary.markdown, summary.raw
    );
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use nbcount::count_directory;

fn main() -> nbcount::Result<()> {
    let report = count_directory(Path::new("/data/notebooks"), true)?;
    println!(
        "counted={} skipped={} errors={}",
        report.counted, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `nbcount::Result<T>`; match on `nbcount::Error`
to handle specific cases, e.g. I/O failures or notebook schema violations.

```rust,no_run
use std::path::Path;
use nbcount::{count_cells, Error, NotebookError};

fn main() {
    match count_cells(Path::new("/bad/path.ipynb")) {
        Ok(count) => println!("Starting with {} cell(s)", count),
        Err(Error::Notebook(NotebookError::MissingField(field))) => {
            eprintln!("Schema error: missing `{field}`")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core enums (e.g. `CellType`).
- [`io`] — the `.ipynb` notebook reader.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::CellType;

// Reader
pub use io::ipynb::{Notebook, NotebookError};

// High-level API re-exports
pub use api::{
    BatchReport, CellSummary, count_cells, count_directory, iterate_notebooks,
    summarize_notebook,
};
