//! Common constants used throughout confsweep.

/// Template file looked up in the working directory when none is given
pub const DEFAULT_TEMPLATE: &str = "input.txt";

/// Name of the generated configuration file inside every combination directory
pub const OUTPUT_FILE: &str = "input.txt";

/// Prefix of every combination directory, followed by the combination index
pub const DIR_PREFIX: &str = "conf";

/// Combination directory names are cut to this many characters
pub const MAX_DIR_NAME_LEN: usize = 100;

/// Section that holds every parameter of a template without headers.
/// Never rendered.
pub const IMPLICIT_SECTION: &str = "dummy_section";

/// Sweep summary written into the output root with `--manifest`
pub const MANIFEST_FILE: &str = "sweep.json";
