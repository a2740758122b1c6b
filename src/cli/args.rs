//! Command-line argument definitions for the enrollment importer
//!
//! Defines the CLI interface using the clap derive API: the `import`
//! command runs the pipeline over an export file, and `catalog` inspects
//! the reference catalog an operator is about to import into.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the enrollment importer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "enrollment-importer",
    version,
    about = "Normalize and reconcile bulk student-enrollment spreadsheets",
    long_about = "Converts messy student-enrollment exports (inconsistent headers, \
                  scientific-notation identifiers, free-text grade names) into a \
                  canonical record set ready for bulk insertion, with a per-row \
                  error report for everything that could not be reconciled.",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the import pipeline over an export file
    Import(ImportArgs),
    /// Inspect the reference catalog
    Catalog(CatalogArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Input export file: delimited text, or a JSON array of row objects
    /// with --keyed
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Reference catalog JSON ({stages: [...], classes: [...]}) fetched
    /// from the backing store
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: PathBuf,

    /// Field delimiter for text input
    #[arg(short = 'd', long = "delimiter", default_value = ",")]
    pub delimiter: char,

    /// Treat the input as a JSON array of pre-keyed row objects instead of
    /// delimited text
    #[arg(long = "keyed")]
    pub keyed: bool,

    /// Batch context JSON pre-selecting year/stage/class for every row,
    /// bypassing free-text resolution
    #[arg(long = "context", value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Header alias overlay JSON ({"alias": "canonical_field"}) merged over
    /// the built-in dictionary
    #[arg(long = "aliases", value_name = "FILE")]
    pub aliases: Option<PathBuf>,

    /// Write the full import result (accepted records and failures) as JSON
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show a progress bar while classifying
    #[arg(long = "progress")]
    pub progress: bool,

    /// Suppress the per-row failure listing, print the summary only
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the catalog command
#[derive(Debug, Clone, Parser)]
pub struct CatalogArgs {
    /// Reference catalog JSON file
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: PathBuf,

    /// Show the class sections of one stage (matched with the same fuzzy
    /// rules the importer uses)
    #[arg(short = 's', long = "stage", value_name = "NAME")]
    pub stage: Option<String>,
}
