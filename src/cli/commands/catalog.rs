//! Catalog command: inspect the reference catalog

use crate::app::adapters::spreadsheet;
use crate::app::services::reference_resolver::ReferenceResolver;
use crate::cli::args::CatalogArgs;
use anyhow::Context;
use colored::Colorize;

/// Execute the catalog command
pub fn run_catalog(args: &CatalogArgs) -> anyhow::Result<()> {
    let catalog = spreadsheet::load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    let resolver = ReferenceResolver::new(catalog);

    match &args.stage {
        Some(stage_text) => {
            let Some(stage) = resolver.resolve_stage(stage_text) else {
                anyhow::bail!("stage '{}' not found in catalog", stage_text);
            };
            println!("{} ({})", stage.name.bold(), stage.id);
            for class in resolver.catalog().classes_for_stage(&stage.id) {
                println!("  {} ({})", class.name, class.id);
            }
        }
        None => {
            println!(
                "{} stages, {} classes",
                resolver.catalog().stages.len(),
                resolver.catalog().classes.len()
            );
            for stage in &resolver.catalog().stages {
                let class_count = resolver.catalog().classes_for_stage(&stage.id).count();
                println!("  {}: {} classes", stage.name.bold(), class_count);
            }
        }
    }

    Ok(())
}
