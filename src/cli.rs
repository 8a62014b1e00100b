use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lopa")]
#[command(about = "Layers of Protection Analysis and risk reduction calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a hazard scenario file (.json or .toml)
    Evaluate {
        /// Scenario file
        scenario: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .lopa.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plain output (no colors, ASCII status tags)
        #[arg(long)]
        plain: bool,

        /// Exit with status 2 when the protection gap is inadequate
        #[arg(long = "fail-on-inadequate")]
        fail_on_inadequate: bool,
    },

    /// Compute the required risk reduction for an initiating event
    Requirement {
        /// Initiating event frequency (per year)
        #[arg(long = "initiating-frequency", visible_alias = "ief")]
        initiating_frequency: f64,

        /// Tolerable target frequency (per year)
        #[arg(
            long = "target-frequency",
            required_unless_present = "severity",
            conflicts_with = "severity"
        )]
        target_frequency: Option<f64>,

        /// Consequence severity, 1 (negligible) to 5 (catastrophic)
        #[arg(long)]
        severity: Option<u8>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Plain output (no colors, ASCII status tags)
        #[arg(long)]
        plain: bool,
    },

    /// Classify a risk reduction factor into a SIL band
    Sil {
        /// Risk reduction factor
        #[arg(allow_negative_numbers = true)]
        rrf: f64,
    },

    /// Initialize a .lopa.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requirement_needs_a_target() {
        let parsed = Cli::try_parse_from(["lopa", "requirement", "--initiating-frequency", "0.1"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from([
            "lopa",
            "requirement",
            "--initiating-frequency",
            "0.1",
            "--severity",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            parsed.command,
            Commands::Requirement {
                severity: Some(3),
                target_frequency: None,
                ..
            }
        ));
    }

    #[test]
    fn test_target_and_severity_conflict() {
        let parsed = Cli::try_parse_from([
            "lopa",
            "requirement",
            "--initiating-frequency",
            "0.1",
            "--target-frequency",
            "1e-4",
            "--severity",
            "3",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_verbosity() {
        let parsed = Cli::try_parse_from(["lopa", "sil", "500", "-vv"]).unwrap();
        assert_eq!(parsed.verbosity, 2);
    }
}
