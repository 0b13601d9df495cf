//! CLI entry point for the grid collage builder

use clap::Parser;
use gridcollage::io::cli::{Cli, CollageProcessor};

fn main() -> gridcollage::Result<()> {
    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    processor.process()
}
