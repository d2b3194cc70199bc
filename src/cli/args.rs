use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbcount", version, about = "NBCOUNT CLI")]
pub struct CliArgs {
    /// Input notebook file (single file mode). Defaults to the working
    /// directory's CP-Math-Demosaic.ipynb
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing notebooks (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Print a per-type cell breakdown after the count (single file mode)
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Batch mode: continue counting other notebooks when one fails to read
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
