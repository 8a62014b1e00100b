//! Per-layer and multi-layer credit computation.

use super::arithmetic::{combine_rrfs, is_creditable_pfd, orders_of_magnitude, MIN_CREDITABLE_PFD};
use super::sil::rrf_range_for_sil;
use crate::core::{Ipl, IplType, Sil};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IplAnalysis {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ipl_type: IplType,
    pub pfd: f64,
    pub rrf: f64,
    pub orders_of_magnitude: f64,
    pub creditable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sil: Option<Sil>,
    /// Share of the context's orders of magnitude, when a context was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when every layer is creditable.
    pub is_valid: bool,
    pub non_creditable_ids: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateAnalysis {
    pub ipl_count: usize,
    pub creditable_count: usize,
    /// Nominal claim: product over every layer, creditable or not.
    #[serde(rename = "totalRRF")]
    pub total_rrf: f64,
    #[serde(rename = "creditableRRF")]
    pub creditable_rrf: f64,
    pub total_orders_of_magnitude: f64,
    pub creditable_orders_of_magnitude: f64,
    pub validation_result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub ipl_type: IplType,
    pub count: usize,
    #[serde(rename = "combinedRRF")]
    pub combined_rrf: f64,
}

/// Sanity-check RRF for a layer category. Not a substitute for a declared PFD.
pub fn typical_rrf_for_ipl_type(ipl_type: IplType) -> f64 {
    match ipl_type {
        IplType::BasicProcessControl => 10.0,
        IplType::SafetyInstrumentedFunction => 100.0,
        IplType::ReliefDevice => 100.0,
        IplType::HumanIntervention => 10.0,
        IplType::Alarm => 10.0,
        IplType::PhysicalProtection => 100.0,
        IplType::Other => 10.0,
    }
}

pub fn evaluate_ipl(
    ipl: &Ipl,
    total_rrf_context: Option<f64>,
    creditable_override: Option<bool>,
) -> IplAnalysis {
    let rrf = ipl.pfd.rrf();
    let orders = orders_of_magnitude(rrf);

    let contribution_percent = total_rrf_context.map(|total| {
        let total_orders = orders_of_magnitude(total);
        if total_orders == 0.0 {
            0.0
        } else {
            100.0 * orders / total_orders
        }
    });

    IplAnalysis {
        id: ipl.id.clone(),
        name: ipl.name.clone(),
        ipl_type: ipl.ipl_type,
        pfd: ipl.pfd.value(),
        rrf,
        orders_of_magnitude: orders,
        creditable: creditable_override.unwrap_or_else(|| ipl.is_creditable()),
        sil: ipl.sil,
        contribution_percent,
    }
}

pub fn evaluate_ipl_set(ipls: &[Ipl]) -> AggregateAnalysis {
    let total_rrf = combine_rrfs(ipls.iter().map(|ipl| ipl.pfd.rrf()));
    let creditable_rrf = combine_rrfs(
        ipls.iter()
            .filter(|ipl| ipl.is_creditable())
            .map(|ipl| ipl.pfd.rrf()),
    );

    let non_creditable_ids: Vec<String> = ipls
        .iter()
        .filter(|ipl| !ipl.is_creditable())
        .map(|ipl| ipl.id.clone())
        .collect();

    AggregateAnalysis {
        ipl_count: ipls.len(),
        creditable_count: ipls.len() - non_creditable_ids.len(),
        total_rrf,
        creditable_rrf,
        total_orders_of_magnitude: orders_of_magnitude(total_rrf),
        creditable_orders_of_magnitude: orders_of_magnitude(creditable_rrf),
        validation_result: ValidationResult {
            is_valid: non_creditable_ids.is_empty(),
            non_creditable_ids,
            warnings: ipls.iter().flat_map(ipl_warnings).collect(),
        },
    }
}

/// Group by category, multiplying within groups, strongest group first.
pub fn rrf_by_type(ipls: &[Ipl]) -> Vec<TypeBreakdown> {
    let mut groups: Vec<TypeBreakdown> = Vec::new();
    for ipl in ipls {
        match groups.iter_mut().find(|g| g.ipl_type == ipl.ipl_type) {
            Some(group) => {
                group.count += 1;
                group.combined_rrf *= ipl.pfd.rrf();
            }
            None => groups.push(TypeBreakdown {
                ipl_type: ipl.ipl_type,
                count: 1,
                combined_rrf: ipl.pfd.rrf(),
            }),
        }
    }
    // sort_by is stable: equal groups keep first-encountered order
    groups.sort_by(|a, b| b.combined_rrf.total_cmp(&a.combined_rrf));
    groups
}

fn ipl_warnings(ipl: &Ipl) -> Vec<String> {
    let mut warnings = Vec::new();
    let rrf = ipl.pfd.rrf();

    let failed_flags: Vec<&str> = [
        (!ipl.independent_of_initiator).then_some("initiating event"),
        (!ipl.independent_of_other_ipls).then_some("other IPLs"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !failed_flags.is_empty() {
        warnings.push(format!(
            "IPL '{}' ({}) is not independent of {} and receives no credit",
            ipl.name,
            ipl.id,
            failed_flags.join(" or ")
        ));
    }

    if let Some(sil) = ipl.sil {
        let band = rrf_range_for_sil(sil);
        if !band.contains(rrf) {
            warnings.push(format!(
                "IPL '{}' claims {} but its RRF {:.0} lies outside {}-{}",
                ipl.name, sil, rrf, band.min, band.max
            ));
        }
    } else if ipl.ipl_type != IplType::SafetyInstrumentedFunction
        && rrf > typical_rrf_for_ipl_type(ipl.ipl_type)
    {
        warnings.push(format!(
            "IPL '{}' claims RRF {:.0}, above the typical {} for {}",
            ipl.name,
            rrf,
            typical_rrf_for_ipl_type(ipl.ipl_type),
            ipl.ipl_type
        ));
    }

    if !is_creditable_pfd(ipl.pfd.value()) {
        warnings.push(format!(
            "IPL '{}' PFD {} is below the minimum creditable {}",
            ipl.name,
            ipl.pfd.value(),
            MIN_CREDITABLE_PFD
        ));
    }

    warnings
}
