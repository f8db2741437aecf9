//! confsweep's main application entry point.
//! Parses arguments, configures logging and runs the sweep.

use confsweep::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{run_sweep, SweepOptions},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose, args.quiet);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let options = SweepOptions::from(&args);
    let summary = run_sweep(&options)?;

    if options.dry_run {
        println!(
            "Dry run: {} combination(s) of {} parameter(s) would be generated in {}.",
            summary.combinations,
            summary.parameters,
            summary.output_dir.display()
        );
    } else {
        println!(
            "Generated {} combination(s) of {} parameter(s) in {}.",
            summary.combinations,
            summary.parameters,
            summary.output_dir.display()
        );
    }
    Ok(())
}
