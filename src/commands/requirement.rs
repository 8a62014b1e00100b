use crate::core::Severity;
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat};
use crate::lopa::{rrf_requirement, rrf_requirement_from_severity, Requirement};

/// Where the tolerable frequency comes from on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequirementTarget {
    Frequency(f64),
    Severity(u8),
}

pub struct RequirementConfig {
    pub initiating_frequency: f64,
    pub target: RequirementTarget,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

pub fn compute_requirement(
    initiating_frequency: f64,
    target: RequirementTarget,
) -> crate::errors::Result<Requirement> {
    let requirement = match target {
        RequirementTarget::Frequency(target) => rrf_requirement(initiating_frequency, target)?,
        RequirementTarget::Severity(level) => {
            rrf_requirement_from_severity(Severity::from_level(level)?, initiating_frequency)?
        }
    };
    Ok(requirement)
}

pub fn handle_requirement(config: RequirementConfig) -> anyhow::Result<()> {
    let requirement = compute_requirement(config.initiating_frequency, config.target)?;
    let mut writer = create_writer(config.format, Box::new(std::io::stdout()), config.formatting);
    writer.write_requirement(&requirement)
}
