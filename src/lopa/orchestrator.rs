//! One-call LOPA evaluation.
//!
//! Composes layer aggregation, the target requirement and the gap analysis
//! into a single [`ComprehensiveResult`]. The creditable RRF computed by the
//! aggregation is the only actual RRF fed into the gap analysis, so every
//! view of the result agrees with every other.

use super::arithmetic::pfd_from_rrf;
use super::gap::{analyze_gap, GapAnalysis};
use super::ipl::{evaluate_ipl, evaluate_ipl_set, rrf_by_type, AggregateAnalysis, IplAnalysis, TypeBreakdown};
use super::requirement::{rrf_requirement, target_frequency_for_severity, Requirement};
use crate::core::{GapStatus, Ipl, Severity, Sil};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Flat view matching the shape the persistence layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LopaResult {
    pub initiating_event_frequency: f64,
    pub target_frequency: f64,
    /// Target-equivalent PFD, `1 / requiredRRF`.
    pub mitigated_event_likelihood: f64,
    /// Credited (creditable-only) risk reduction.
    pub total_risk_reduction_factor: f64,
    pub required_risk_reduction_factor: f64,
    pub gap_status: GapStatus,
    pub gap_ratio: f64,
    #[serde(rename = "requiredSIL")]
    pub required_sil: Option<Sil>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveResult {
    pub ipl_analyses: Vec<IplAnalysis>,
    pub reduction_analysis: AggregateAnalysis,
    pub rrf_by_type: Vec<TypeBreakdown>,
    pub requirement: Requirement,
    pub gap_analysis: GapAnalysis,
    pub lopa_result: LopaResult,
}

pub fn run_comprehensive_analysis(
    ipls: &[Ipl],
    initiating_event_frequency: f64,
    target_frequency: f64,
) -> Result<ComprehensiveResult, DomainError> {
    let requirement = rrf_requirement(initiating_event_frequency, target_frequency)?;
    let reduction = evaluate_ipl_set(ipls);

    for id in &reduction.validation_result.non_creditable_ids {
        warn!(ipl = %id, "IPL excluded from credited risk reduction");
    }

    let ipl_analyses = ipls
        .iter()
        .map(|ipl| evaluate_ipl(ipl, Some(reduction.total_rrf), None))
        .collect();
    let by_type = rrf_by_type(ipls);
    let gap = analyze_gap(reduction.creditable_rrf, requirement.required_rrf);

    debug!(
        ipl_count = reduction.ipl_count,
        creditable_rrf = reduction.creditable_rrf,
        required_rrf = requirement.required_rrf,
        gap_ratio = gap.gap_ratio,
        status = %gap.status,
        "LOPA evaluation complete"
    );

    let lopa_result = LopaResult {
        initiating_event_frequency,
        target_frequency,
        mitigated_event_likelihood: pfd_from_rrf(requirement.required_rrf)?,
        total_risk_reduction_factor: reduction.creditable_rrf,
        required_risk_reduction_factor: requirement.required_rrf,
        gap_status: gap.status,
        gap_ratio: gap.gap_ratio,
        required_sil: gap.required_sil,
        recommendations: gap.suggested_actions.clone(),
    };

    Ok(ComprehensiveResult {
        ipl_analyses,
        reduction_analysis: reduction,
        rrf_by_type: by_type,
        requirement,
        gap_analysis: gap,
        lopa_result,
    })
}

/// Same as [`run_comprehensive_analysis`], with the target taken from the severity table.
pub fn run_analysis_for_severity(
    ipls: &[Ipl],
    severity: Severity,
    initiating_event_frequency: f64,
) -> Result<ComprehensiveResult, DomainError> {
    run_comprehensive_analysis(
        ipls,
        initiating_event_frequency,
        target_frequency_for_severity(severity),
    )
}
