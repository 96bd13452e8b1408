use std::path::PathBuf;

use clap::Parser;

/// Analyze a product catalog for duplicate variants and print a
/// consolidation plan (keep / consolidate / archive).
#[derive(Debug, Parser)]
#[command(name = "curator", version)]
struct Args {
    /// Path to a catalog JSON payload (an object with an `items` array).
    catalog: PathBuf,
}

fn main() -> anyhow::Result<()> {
    curator_observability::init();
    let args = Args::parse();
    curator_cli::run(&args.catalog)
}
