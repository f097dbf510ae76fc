//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Destination of the reshaped grid, relative to the working directory.
///
/// The file is overwritten on every run. Its parent directory is expected to exist already.
pub const OUTPUT_PATH: &str = "./data/map.json";

/// Command-line arguments of the converter.
///
/// This structure holds the single positional argument the converter accepts. Clap reports a
/// missing argument as a usage error and exits non-zero before any file is touched.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the tile-map export to convert
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_cli_positional_input() {
        let cli = Cli::try_parse_from(["mapgrid", "maps/town.json"]).expect("Failed to parse args");

        assert_eq!(cli.input, PathBuf::from("maps/town.json"));
    }

    #[test]
    fn test_cli_missing_input() {
        let err = Cli::try_parse_from(["mapgrid"]).expect_err("Missing input should be rejected");

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        let result = Cli::try_parse_from(["mapgrid", "a.json", "b.json"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        let result = Cli::try_parse_from(["mapgrid", "--output", "x.json", "a.json"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory as _;

        Cli::command().debug_assert();
    }
}
