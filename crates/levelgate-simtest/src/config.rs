//! Command-line configuration for the harness.

use std::path::PathBuf;

/// Harness options parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Print every check, not only failures.
    pub verbose: bool,
    /// Also print the ungated (structure-only) report.
    pub structural: bool,
    /// Print the progress report as pretty JSON.
    pub json: bool,
    /// Schema file to load instead of the bundled one.
    pub schema_path: Option<PathBuf>,
}

impl HarnessConfig {
    /// Parse flags. Unknown arguments are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--verbose" => config.verbose = true,
                "--structural" => config.structural = true,
                "--json" => config.json = true,
                "--schema" => config.schema_path = args.next().map(PathBuf::from),
                other => {
                    if let Some(path) = other.strip_prefix("--schema=") {
                        config.schema_path = Some(PathBuf::from(path));
                    }
                }
            }
        }
        config
    }
}
