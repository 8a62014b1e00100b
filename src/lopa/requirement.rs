//! Required risk reduction from frequencies or consequence severity.

use super::arithmetic::orders_of_magnitude;
use super::sil::typical_rrf_for_sil;
use crate::core::{Severity, Sil};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Slack before rounding layer counts up, so exact powers of ten stay exact.
const LAYER_COUNT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedIplCount {
    pub sil: Sil,
    #[serde(rename = "typicalRRF")]
    pub typical_rrf: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub initiating_event_frequency: f64,
    pub target_frequency: f64,
    #[serde(rename = "requiredRRF")]
    pub required_rrf: f64,
    pub required_orders_of_magnitude: f64,
    pub estimated_ipl_count: Vec<EstimatedIplCount>,
}

/// Tolerable event frequency (per year) for a consequence severity.
pub fn target_frequency_for_severity(severity: Severity) -> f64 {
    match severity {
        Severity::Negligible => 1e-2,
        Severity::Minor => 1e-3,
        Severity::Serious => 1e-4,
        Severity::Major => 1e-5,
        Severity::Catastrophic => 1e-6,
    }
}

pub fn rrf_requirement(
    initiating_event_frequency: f64,
    target_frequency: f64,
) -> Result<Requirement, DomainError> {
    ensure_positive("initiating event frequency", initiating_event_frequency)?;
    ensure_positive("target frequency", target_frequency)?;

    let required_rrf = initiating_event_frequency / target_frequency;
    // Both inputs are positive, but the quotient can still overflow or underflow.
    if !(required_rrf.is_finite() && required_rrf > 0.0) {
        return Err(DomainError::UnrepresentableRrf {
            initiating_event_frequency,
            target_frequency,
        });
    }
    let required_orders = orders_of_magnitude(required_rrf);

    Ok(Requirement {
        initiating_event_frequency,
        target_frequency,
        required_rrf,
        required_orders_of_magnitude: required_orders,
        estimated_ipl_count: Sil::ALL
            .iter()
            .map(|&sil| estimate_layers(sil, required_orders))
            .collect(),
    })
}

pub fn rrf_requirement_from_severity(
    severity: Severity,
    initiating_event_frequency: f64,
) -> Result<Requirement, DomainError> {
    rrf_requirement(
        initiating_event_frequency,
        target_frequency_for_severity(severity),
    )
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositiveFrequency { name, value })
    }
}

fn estimate_layers(sil: Sil, required_orders: f64) -> EstimatedIplCount {
    let typical_rrf = typical_rrf_for_sil(sil);
    let per_layer = orders_of_magnitude(typical_rrf);
    let raw = (required_orders / per_layer - LAYER_COUNT_TOLERANCE).ceil();
    EstimatedIplCount {
        sil,
        typical_rrf,
        count: raw.max(0.0) as u32,
    }
}
