use anyhow::Result;
use clap::Parser;
use lopa::cli::{Cli, Commands};
use lopa::commands::{EvaluateConfig, RequirementConfig, RequirementTarget};
use lopa::config::{load_config, load_config_from, LopaConfig};
use lopa::core::GapStatus;
use lopa::formatting::FormattingConfig;
use lopa::io::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when `--fail-on-inadequate` is set and the gap is inadequate.
const INADEQUATE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    lopa::observability::init_tracing(cli.verbosity);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Evaluate {
            scenario,
            format,
            output,
            config,
            plain,
            fail_on_inadequate,
        } => {
            let lopa_config = resolve_config(config)?;
            let evaluate_config = EvaluateConfig {
                scenario,
                format: resolve_format(format, &lopa_config),
                output,
                formatting: create_formatting_config(plain || lopa_config.plain()),
            };
            let status = lopa::commands::handle_evaluate(evaluate_config, &lopa_config)?;
            Ok(exit_code_for(status, fail_on_inadequate))
        }
        Commands::Requirement {
            initiating_frequency,
            target_frequency,
            severity,
            format,
            plain,
        } => {
            let target = match (target_frequency, severity) {
                (Some(frequency), _) => RequirementTarget::Frequency(frequency),
                (None, Some(level)) => RequirementTarget::Severity(level),
                (None, None) => anyhow::bail!("either --target-frequency or --severity is required"),
            };
            lopa::commands::handle_requirement(RequirementConfig {
                initiating_frequency,
                target,
                format,
                formatting: create_formatting_config(plain),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sil { rrf } => {
            lopa::commands::sil::handle_sil(rrf)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            lopa::commands::init::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// An explicit --config must load; otherwise discover from the working directory
fn resolve_config(path: Option<PathBuf>) -> Result<LopaConfig> {
    match path {
        Some(path) => Ok(load_config_from(&path)?),
        None => Ok(load_config()),
    }
}

fn resolve_format(requested: Option<OutputFormat>, config: &LopaConfig) -> OutputFormat {
    requested
        .or_else(|| config.default_format().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Terminal)
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn exit_code_for(status: GapStatus, fail_on_inadequate: bool) -> ExitCode {
    if fail_on_inadequate && status == GapStatus::Inadequate {
        ExitCode::from(INADEQUATE_EXIT_CODE)
    } else {
        ExitCode::SUCCESS
    }
}
