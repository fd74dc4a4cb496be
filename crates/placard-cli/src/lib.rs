//! CLI logic for the Placard layout tool.
//!
//! This module contains the core CLI logic: load an engine configuration,
//! read a layout plan, run the matching calculator, and write the computed
//! placements plus the layout report as JSON.

mod args;
mod config;
mod error;
mod plan;

pub use args::Args;
pub use error::CliError;
pub use plan::Plan;

use std::fs;

use log::{info, warn};
use serde::Serialize;

use placard::{Engine, Placement, report::LayoutReport};

/// The document written to the output file: placements in placement order
/// plus the layout-quality report.
#[derive(Debug, Serialize)]
pub struct LayoutOutput {
    pub placements: Vec<Placement>,
    pub report: LayoutReport,
}

/// Run the Placard CLI application
///
/// This function reads the layout plan, computes the layout through the
/// placement engine, and writes the resulting placements and report to the
/// output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Plan parsing errors
/// - Engine configuration errors
/// - Output serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        plan_path = args.plan,
        output_path = args.output;
        "Computing layout"
    );

    // Load engine configuration
    let engine_config = config::load_config(args.config.as_ref())?;

    // Read and parse the layout plan
    let source = fs::read_to_string(&args.plan)?;
    let plan: Plan = toml::from_str(&source).map_err(|e| CliError::Plan(e.to_string()))?;
    info!(pattern = plan.pattern_name(); "Parsed layout plan");

    // Compute the layout
    let mut engine = Engine::new(engine_config)?;
    let placements = plan.execute(&mut engine);
    let report = engine.generate_report();

    let fallbacks = placements.iter().filter(|p| p.was_fallback()).count();
    info!(
        items = report.total_items(),
        density = report.density(),
        collisions = report.collisions().len(),
        fallbacks;
        "Layout computed"
    );
    if !report.collisions().is_empty() {
        warn!(
            collisions = report.collisions().len();
            "Layout contains overlapping cards; consider a sparser plan or larger steps"
        );
    }

    // Write output file
    let output = LayoutOutput { placements, report };
    fs::write(&args.output, serde_json::to_string_pretty(&output)?)?;

    info!(output_file = args.output; "Layout written");

    Ok(())
}
