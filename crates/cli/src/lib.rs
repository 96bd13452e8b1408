//! `curator-cli` — the collaborator around the pure analysis core: loads a
//! catalog payload from disk, runs the pass, and renders the report.

pub mod render;

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use curator_catalog::Catalog;

/// Load a catalog file, analyze it, and print the consolidation report to
/// stdout.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    let catalog = Catalog::from_json_str(&payload).context("parsing catalog payload")?;

    tracing::info!(products = catalog.items.len(), "analyzing catalog");
    let report = curator_analysis::analyze(&catalog, Utc::now());

    print!("{}", render::render_report(&report));
    Ok(())
}
