use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use nbcount::api::{count_cells, summarize_notebook};

use super::args::CliArgs;
use super::errors::AppError;

/// Notebook read when no `--input` is given. The authoring workflow this tool
/// supports keeps the notebook in the working directory.
pub const DEFAULT_NOTEBOOK: &str = "CP-Math-Demosaic.ipynb";

fn count_single_file(
    input: &PathBuf,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if summary {
        let breakdown = summarize_notebook(input)?;
        println!("Starting with {} cell(s)", breakdown.total);
        println!("  code: {}", breakdown.code);
        println!("  markdown: {}", breakdown.markdown);
        println!("  raw: {}", breakdown.raw);
        println!("  other: {}", breakdown.other);
    } else {
        let count = count_cells(input)?;
        println!("Starting with {} cell(s)", count);
    }

    info!("Successfully counted: {:?}", input);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        if !input_dir.is_dir() {
            return Err(AppError::NotADirectory { path: input_dir }.into());
        }

        info!("Starting batch count from directory: {:?}", input_dir);

        let mut counted = 0;
        let mut skipped = 0;
        let mut errors = 0;

        for entry in fs::read_dir(&input_dir)? {
            let entry = entry?;
            let path = entry.path();

            let is_notebook = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ipynb"));

            if is_notebook {
                match count_cells(&path) {
                    Ok(count) => {
                        println!("{}: {} cell(s)", path.display(), count);
                        counted += 1;
                    }
                    Err(e) => {
                        if !args.batch {
                            return Err(e.into());
                        }
                        warn!("Error counting {:?}: {}", path, e);
                        errors += 1;
                    }
                }
            } else {
                info!("Skipping non-notebook entry: {:?}", path);
                skipped += 1;
            }
        }

        info!("Batch count complete!");
        info!("Counted: {}", counted);
        info!("Skipped: {}", skipped);
        info!("Errors: {}", errors);
    } else {
        let input = args
            .input
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTEBOOK));
        count_single_file(&input, args.summary)?;
    }

    Ok(())
}
