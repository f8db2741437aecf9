use log::LevelFilter;

/// Maps the `--verbose`/`--quiet` pair onto a log level.
pub fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logger(verbose: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .format_target(false)
        .init();
}
