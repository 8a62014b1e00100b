//! Actual versus required risk reduction.

use super::arithmetic::additional_rrf_needed;
use super::sil::{rrf_range_for_sil, sil_from_rrf};
use crate::core::{GapStatus, Sil};
use crate::formatting::display::format_rrf;
use serde::{Deserialize, Serialize};

/// Gap ratio at which protection is considered marginal.
pub const MARGINAL_GAP_RATIO: f64 = 0.5;
/// Gap ratio at which protection is considered adequate.
pub const ADEQUATE_GAP_RATIO: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    #[serde(rename = "actualRRF")]
    pub actual_rrf: f64,
    #[serde(rename = "requiredRRF")]
    pub required_rrf: f64,
    pub gap_ratio: f64,
    pub status: GapStatus,
    pub additional_rrf_needed: f64,
    #[serde(rename = "requiredSIL")]
    pub required_sil: Option<Sil>,
    pub suggested_actions: Vec<String>,
}

pub fn classify_gap_ratio(gap_ratio: f64) -> GapStatus {
    if gap_ratio >= ADEQUATE_GAP_RATIO {
        GapStatus::Adequate
    } else if gap_ratio >= MARGINAL_GAP_RATIO {
        GapStatus::Marginal
    } else {
        GapStatus::Inadequate
    }
}

pub fn analyze_gap(actual_rrf: f64, required_rrf: f64) -> GapAnalysis {
    let gap_ratio = actual_rrf / required_rrf;
    let status = classify_gap_ratio(gap_ratio);

    let (additional, required_sil) = match status {
        GapStatus::Adequate => (0.0, None),
        _ => (
            additional_rrf_needed(actual_rrf, required_rrf),
            sil_from_rrf(required_rrf),
        ),
    };

    GapAnalysis {
        actual_rrf,
        required_rrf,
        gap_ratio,
        status,
        additional_rrf_needed: additional,
        required_sil,
        suggested_actions: suggested_actions(status, required_rrf, additional, required_sil),
    }
}

fn suggested_actions(
    status: GapStatus,
    required_rrf: f64,
    additional: f64,
    required_sil: Option<Sil>,
) -> Vec<String> {
    if status == GapStatus::Adequate {
        return Vec::new();
    }

    let mut actions = vec![format!(
        "Provide an additional risk reduction factor of {:.1} to reach the required RRF of {}",
        additional,
        format_rrf(required_rrf)
    )];

    match required_sil {
        Some(sil) => {
            let band = rrf_range_for_sil(sil);
            actions.push(format!(
                "Consider a {} safety instrumented function (RRF {} to {})",
                sil,
                format_rrf(band.min),
                format_rrf(band.max)
            ));
        }
        None => actions.push(format!(
            "Required RRF of {} is below SIL 1; a non-SIL protection layer can close the gap",
            format_rrf(required_rrf)
        )),
    }

    match status {
        GapStatus::Marginal => actions.push(
            "Verify PFD values and proof-test intervals of existing layers; modest improvements may close the gap"
                .to_string(),
        ),
        _ => {
            actions.push(
                "Add an independent protection layer or upgrade an existing one".to_string(),
            );
            actions.push(
                "Review the initiating event frequency and consider inherently safer design"
                    .to_string(),
            );
        }
    }

    actions
}
