//! CLI entry point for the fractal frame compositor

use clap::Parser;
use fractalframes::io::cli::{Cli, FrameProcessor};
use fractalframes::io::logging;
use tracing::error;

fn main() -> fractalframes::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let mut processor = FrameProcessor::new(cli);
    processor.process().inspect_err(|e| error!("{e}"))
}
