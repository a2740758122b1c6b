//! Command implementations for the enrollment importer CLI
//!
//! Each command lives in its own module; `shared` holds the report
//! rendering both of them use.

pub mod catalog;
pub mod import;
pub mod shared;

use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Import(import_args) => import::run_import(&import_args),
        Commands::Catalog(catalog_args) => catalog::run_catalog(&catalog_args),
    }
}
