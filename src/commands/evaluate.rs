use crate::config::LopaConfig;
use crate::core::{GapStatus, ScenarioInput, TargetSource};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, read_scenario, OutputFormat};
use crate::lopa::{run_comprehensive_analysis, target_frequency_for_severity, ComprehensiveResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// A scenario's evaluation together with where its target came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvaluation {
    pub scenario: Option<String>,
    /// "explicit", "severity N (Label)" or "config default"
    pub target_basis: String,
    pub result: ComprehensiveResult,
}

pub struct EvaluateConfig {
    pub scenario: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Validate a scenario at the boundary and run the engine on it.
pub fn evaluate_scenario(
    scenario: &ScenarioInput,
    config: &LopaConfig,
) -> crate::errors::Result<ScenarioEvaluation> {
    let ipls = scenario.validated_ipls()?;
    let (target_frequency, target_basis) =
        match scenario.target_source(config.default_target_frequency())? {
            TargetSource::Explicit(target) => (target, "explicit".to_string()),
            TargetSource::Severity(severity) => (
                target_frequency_for_severity(severity),
                format!("severity {} ({})", severity.level(), severity.label()),
            ),
            TargetSource::ConfigDefault(target) => (target, "config default".to_string()),
        };

    let result = run_comprehensive_analysis(
        &ipls,
        scenario.initiating_event_frequency,
        target_frequency,
    )?;

    Ok(ScenarioEvaluation {
        scenario: scenario.name.clone(),
        target_basis,
        result,
    })
}

/// Returns the gap status so the shell can choose an exit code.
pub fn handle_evaluate(
    command: EvaluateConfig,
    lopa_config: &LopaConfig,
) -> anyhow::Result<GapStatus> {
    let scenario = read_scenario(&command.scenario)?;
    let evaluation = evaluate_scenario(&scenario, lopa_config)?;

    info!(
        scenario = %command.scenario.display(),
        status = %evaluation.result.gap_analysis.status,
        "scenario evaluated"
    );

    let sink: Box<dyn std::io::Write> = match &command.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(command.format, sink, command.formatting);
    writer.write_evaluation(&evaluation)?;

    Ok(evaluation.result.gap_analysis.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::core::{IplInput, IplType};
    use crate::errors::Error;

    fn scenario(target: Option<f64>, severity: Option<u8>) -> ScenarioInput {
        ScenarioInput {
            name: Some("Tank overfill".into()),
            initiating_event_frequency: 0.1,
            target_frequency: target,
            severity,
            ipls: vec![IplInput {
                id: None,
                ipl_type: IplType::SafetyInstrumentedFunction,
                name: "LSHH-300 trip".into(),
                description: Some("Independent high-high level trip".into()),
                pfd: 0.001,
                independent_of_initiator: true,
                independent_of_other_ipls: true,
                sil: Some(3),
                notes: None,
            }],
        }
    }

    #[test]
    fn test_evaluate_with_explicit_target() {
        let evaluation = evaluate_scenario(&scenario(Some(1e-3), None), &LopaConfig::default()).unwrap();
        assert_eq!(evaluation.target_basis, "explicit");
        assert_eq!(evaluation.result.gap_analysis.status, GapStatus::Adequate);
        assert_eq!(evaluation.result.ipl_analyses[0].id, "ipl-1");
    }

    #[test]
    fn test_evaluate_with_severity_target() {
        let evaluation = evaluate_scenario(&scenario(None, Some(5)), &LopaConfig::default()).unwrap();
        assert_eq!(evaluation.target_basis, "severity 5 (Catastrophic)");
        assert_eq!(evaluation.result.lopa_result.target_frequency, 1e-6);
        assert_eq!(evaluation.result.gap_analysis.status, GapStatus::Inadequate);
    }

    #[test]
    fn test_evaluate_with_config_default() {
        let config = LopaConfig {
            analysis: Some(AnalysisConfig {
                default_target_frequency: Some(1e-3),
            }),
            ..LopaConfig::default()
        };
        let evaluation = evaluate_scenario(&scenario(None, None), &config).unwrap();
        assert_eq!(evaluation.target_basis, "config default");
    }

    #[test]
    fn test_evaluate_without_target_fails() {
        let result = evaluate_scenario(&scenario(None, None), &LopaConfig::default());
        assert!(matches!(result, Err(Error::Scenario(_))));
    }

    #[test]
    fn test_evaluate_rejects_bad_frequencies_as_input_errors() {
        let mut bad = scenario(Some(1e-4), None);
        bad.initiating_event_frequency = -1.0;
        let err = evaluate_scenario(&bad, &LopaConfig::default()).unwrap_err();
        assert!(err.is_input_error());
    }
}
