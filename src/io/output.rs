use crate::commands::evaluate::ScenarioEvaluation;
use crate::formatting::display::{
    format_frequency, format_orders_of_magnitude, format_pfd, format_rrf, format_sil,
    gap_status_label, sil_band_label,
};
use crate::formatting::{
    ColorMode, ColoredFormatter, FormattingConfig, OutputFormatter, PlainFormatter,
};
use crate::lopa::Requirement;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_evaluation(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()>;
    fn write_requirement(&mut self, requirement: &Requirement) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_evaluation(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        self.write_json(evaluation)
    }

    fn write_requirement(&mut self, requirement: &Requirement) -> anyhow::Result<()> {
        self.write_json(requirement)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        let lopa = &evaluation.result.lopa_result;
        let reduction = &evaluation.result.reduction_analysis;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row(
            "Initiating event frequency",
            &format_frequency(lopa.initiating_event_frequency),
        )?;
        self.write_row("Target frequency", &format_frequency(lopa.target_frequency))?;
        self.write_row("Target basis", &evaluation.target_basis)?;
        self.write_row(
            "Required RRF",
            &format_rrf(lopa.required_risk_reduction_factor),
        )?;
        self.write_row(
            "Credited RRF",
            &format!(
                "{} ({})",
                format_rrf(reduction.creditable_rrf),
                format_orders_of_magnitude(reduction.creditable_orders_of_magnitude)
            ),
        )?;
        self.write_row("Nominal RRF", &format_rrf(reduction.total_rrf))?;
        self.write_row(
            "Gap status",
            &format!(
                "{} (ratio {:.2})",
                gap_status_label(lopa.gap_status),
                lopa.gap_ratio
            ),
        )?;
        self.write_row("Required SIL", &format_sil(lopa.required_sil))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_layers(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        let analyses = &evaluation.result.ipl_analyses;
        if analyses.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Protection Layers")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| ID | Name | Type | PFD | RRF | Contribution | Credited |"
        )?;
        writeln!(
            self.writer,
            "|----|------|------|-----|-----|--------------|----------|"
        )?;
        for analysis in analyses {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {:.0}% | {} |",
                analysis.id,
                analysis.name,
                analysis.ipl_type,
                format_pfd(analysis.pfd),
                format_rrf(analysis.rrf),
                analysis.contribution_percent.unwrap_or(0.0),
                if analysis.creditable { "yes" } else { "no" }
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### By Type")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Type | Count | Combined RRF |")?;
        writeln!(self.writer, "|------|-------|--------------|")?;
        for group in &evaluation.result.rrf_by_type {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                group.ipl_type,
                group.count,
                format_rrf(group.combined_rrf)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_findings(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        let warnings = &evaluation.result.reduction_analysis.validation_result.warnings;
        if !warnings.is_empty() {
            writeln!(self.writer, "## Validation Warnings")?;
            writeln!(self.writer)?;
            for warning in warnings {
                writeln!(self.writer, "- {warning}")?;
            }
            writeln!(self.writer)?;
        }

        let recommendations = &evaluation.result.lopa_result.recommendations;
        if !recommendations.is_empty() {
            writeln!(self.writer, "## Recommendations")?;
            writeln!(self.writer)?;
            for (i, recommendation) in recommendations.iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, recommendation)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_evaluation(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# LOPA: {}",
            evaluation.scenario.as_deref().unwrap_or("Unnamed scenario")
        )?;
        writeln!(self.writer)?;
        self.write_summary(evaluation)?;
        self.write_layers(evaluation)?;
        self.write_findings(evaluation)?;
        Ok(())
    }

    fn write_requirement(&mut self, requirement: &Requirement) -> anyhow::Result<()> {
        writeln!(self.writer, "# Risk Reduction Requirement")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Required RRF **{}** ({}) for {} against a target of {}.",
            format_rrf(requirement.required_rrf),
            format_orders_of_magnitude(requirement.required_orders_of_magnitude),
            format_frequency(requirement.initiating_event_frequency),
            format_frequency(requirement.target_frequency)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| SIL | Band | Layers needed |")?;
        writeln!(self.writer, "|-----|------|---------------|")?;
        for estimate in &requirement.estimated_ipl_count {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                estimate.sil,
                sil_band_label(estimate.sil),
                estimate.count
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        let formatter: Box<dyn OutputFormatter> =
            if formatting.color == ColorMode::Never && !formatting.unicode {
                Box::new(PlainFormatter)
            } else {
                Box::new(ColoredFormatter::new(formatting))
            };
        Self { writer, formatter }
    }

    fn write_kv(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "  {:<28} {}", self.formatter.dim(key), value)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_evaluation(&mut self, evaluation: &ScenarioEvaluation) -> anyhow::Result<()> {
        let result = &evaluation.result;
        let lopa = &result.lopa_result;
        let reduction = &result.reduction_analysis;

        let title = format!(
            "LOPA: {}",
            evaluation.scenario.as_deref().unwrap_or("Unnamed scenario")
        );
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer)?;

        self.write_kv(
            "Initiating event",
            &format_frequency(lopa.initiating_event_frequency),
        )?;
        self.write_kv(
            "Target",
            &format!(
                "{} ({})",
                format_frequency(lopa.target_frequency),
                evaluation.target_basis
            ),
        )?;
        self.write_kv(
            "Required RRF",
            &format!(
                "{} ({})",
                format_rrf(lopa.required_risk_reduction_factor),
                format_orders_of_magnitude(result.requirement.required_orders_of_magnitude)
            ),
        )?;
        self.write_kv(
            "Credited RRF",
            &format!(
                "{} from {} of {} layers",
                format_rrf(reduction.creditable_rrf),
                reduction.creditable_count,
                reduction.ipl_count
            ),
        )?;

        let status = format!(
            "{} {} (ratio {:.2})",
            self.formatter.status_icon(lopa.gap_status),
            gap_status_label(lopa.gap_status),
            lopa.gap_ratio
        );
        let status = self.formatter.status(lopa.gap_status, &status);
        self.write_kv("Gap", &status)?;
        self.write_kv("Required SIL", &format_sil(lopa.required_sil))?;
        writeln!(self.writer)?;

        if !result.ipl_analyses.is_empty() {
            writeln!(self.writer, "{}", self.formatter.bold("Protection layers"))?;
            for analysis in &result.ipl_analyses {
                let line = format!(
                    "  {:<10} {:<32} PFD {:<14} RRF {:<6} {:>5.1}%",
                    analysis.id,
                    analysis.name,
                    format_pfd(analysis.pfd),
                    format_rrf(analysis.rrf),
                    analysis.contribution_percent.unwrap_or(0.0)
                );
                if analysis.creditable {
                    writeln!(self.writer, "{line}")?;
                } else {
                    writeln!(self.writer, "{} (not credited)", self.formatter.dim(&line))?;
                }
            }
            writeln!(self.writer)?;
        }

        for warning in &reduction.validation_result.warnings {
            writeln!(self.writer, "{}", self.formatter.warning(&format!("! {warning}")))?;
        }

        if !lopa.recommendations.is_empty() {
            writeln!(self.writer, "{}", self.formatter.bold("Recommendations"))?;
            for (i, recommendation) in lopa.recommendations.iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, recommendation)?;
            }
        }
        Ok(())
    }

    fn write_requirement(&mut self, requirement: &Requirement) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Risk reduction requirement")
        )?;
        self.write_kv(
            "Required RRF",
            &format!(
                "{} ({})",
                format_rrf(requirement.required_rrf),
                format_orders_of_magnitude(requirement.required_orders_of_magnitude)
            ),
        )?;
        for estimate in &requirement.estimated_ipl_count {
            self.write_kv(
                &format!("{} layers ({})", estimate.sil, sil_band_label(estimate.sil)),
                &estimate.count.to_string(),
            )?;
        }
        Ok(())
    }
}
