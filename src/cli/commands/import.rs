//! Import command: run the pipeline over an export file

use crate::app::adapters::spreadsheet;
use crate::app::services::header_mapper::AliasDictionary;
use crate::cli::args::ImportArgs;
use crate::cli::commands::shared;
use crate::config::ImportConfig;
use crate::StudentImporter;
use anyhow::Context;
use std::fs;
use tracing::info;

/// Execute the import command
pub fn run_import(args: &ImportArgs) -> anyhow::Result<()> {
    let catalog = spreadsheet::load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;

    let mut dictionary = AliasDictionary::new();
    if let Some(overlay_path) = &args.aliases {
        let overlay = spreadsheet::read_alias_overlay(overlay_path)
            .with_context(|| format!("reading alias overlay {}", overlay_path.display()))?;
        let merged = dictionary.merge_json(&overlay)?;
        info!("merged {} overlay aliases", merged);
    }

    let config = ImportConfig {
        show_progress: args.progress,
        ..ImportConfig::default()
    };

    let mut importer = StudentImporter::new(catalog, config).with_dictionary(dictionary);
    if let Some(context_path) = &args.context {
        let context = spreadsheet::load_context(context_path)
            .with_context(|| format!("loading import context {}", context_path.display()))?;
        importer = importer.with_context(context);
    }

    let result = if args.keyed {
        let rows = spreadsheet::read_keyed_rows(&args.input)
            .with_context(|| format!("reading keyed rows from {}", args.input.display()))?;
        // Pre-keyed input lost its title rows upstream; the header is
        // assumed to be the file's first line
        importer.import_rows(&rows, 1)
    } else {
        let delimiter = u8::try_from(args.delimiter as u32)
            .map_err(|_| anyhow::anyhow!("delimiter must be a single-byte character"))?;
        let matrix = spreadsheet::read_delimited_matrix(&args.input, delimiter)
            .with_context(|| format!("reading {}", args.input.display()))?;
        importer.import_matrix(&matrix)
    };

    shared::render_report(&result, args.quiet);

    if let Some(output_path) = &args.output {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(output_path, json)
            .with_context(|| format!("writing result to {}", output_path.display()))?;
        info!("wrote full result to {}", output_path.display());
    }

    Ok(())
}
