//! Command-line interface implementation for confsweep.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_TEMPLATE, OUTPUT_FILE};
use crate::processor::SweepOptions;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for confsweep.
#[derive(Parser, Debug)]
#[command(author, version, about = "confsweep: generate one configuration per parameter combination", long_about = None)]
pub struct Args {
    /// Template file with list or range values
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Directory where combination directories will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Name of the generated file inside each combination directory
    #[arg(long, value_name = "NAME", default_value = OUTPUT_FILE)]
    pub file_name: String,

    /// Write a sweep.json summary into the output directory
    #[arg(long)]
    pub manifest: bool,

    /// Print the directories that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl From<&Args> for SweepOptions {
    fn from(args: &Args) -> Self {
        Self {
            template: args.template.clone(),
            output_dir: args.output_dir.clone(),
            file_name: args.file_name.clone(),
            dry_run: args.dry_run,
            manifest: args.manifest,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
