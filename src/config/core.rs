use serde::{Deserialize, Serialize};

/// Root configuration structure for lopa
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LopaConfig {
    /// Scenario evaluation defaults
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Display configuration for terminal output
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisConfig {
    /// Tolerable frequency (per year) for scenarios that give neither a
    /// target frequency nor a severity
    #[serde(default)]
    pub default_target_frequency: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// terminal, json or markdown
    #[serde(default)]
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Disable colors and unicode glyphs
    #[serde(default)]
    pub plain: bool,
}

impl LopaConfig {
    pub fn default_target_frequency(&self) -> Option<f64> {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.default_target_frequency)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }

    pub fn plain(&self) -> bool {
        self.display.as_ref().is_some_and(|display| display.plain)
    }

    /// Drop values the engine would reject, warning about each one.
    pub fn sanitize(mut self) -> Self {
        if let Some(analysis) = self.analysis.as_mut() {
            if let Some(target) = analysis.default_target_frequency {
                if !(target.is_finite() && target > 0.0) {
                    log::warn!(
                        "Ignoring analysis.default_target_frequency = {}: must be positive",
                        target
                    );
                    analysis.default_target_frequency = None;
                }
            }
        }

        if let Some(output) = self.output.as_mut() {
            if let Some(format) = output.default_format.as_deref() {
                if !matches!(format, "terminal" | "json" | "markdown") {
                    log::warn!("Ignoring unknown output.default_format '{}'", format);
                    output.default_format = None;
                }
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_has_no_defaults() {
        let config = LopaConfig::default();
        assert_eq!(config.default_target_frequency(), None);
        assert_eq!(config.default_format(), None);
        assert!(!config.plain());
    }

    #[test]
    fn test_sanitize_drops_invalid_values() {
        let config = LopaConfig {
            analysis: Some(AnalysisConfig {
                default_target_frequency: Some(-1.0),
            }),
            output: Some(OutputConfig {
                default_format: Some("pdf".into()),
            }),
            display: None,
        }
        .sanitize();
        assert_eq!(config.default_target_frequency(), None);
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let config = LopaConfig {
            analysis: Some(AnalysisConfig {
                default_target_frequency: Some(1e-5),
            }),
            output: Some(OutputConfig {
                default_format: Some("json".into()),
            }),
            display: Some(DisplayConfig { plain: true }),
        }
        .sanitize();
        assert_eq!(config.default_target_frequency(), Some(1e-5));
        assert_eq!(config.default_format(), Some("json"));
        assert!(config.plain());
    }
}
