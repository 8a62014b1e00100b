//! Boundary records supplied by the surrounding service layer.
//!
//! Input records are loosely typed on purpose: every field that the external
//! store may omit is optional here. They are converted into validated domain
//! values before anything reaches the engine.

use super::types::{Ipl, IplType, Pfd, Severity, Sil};
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// An IPL record as supplied by the analysis author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IplInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub ipl_type: IplType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub pfd: f64,
    #[serde(alias = "independent_of_initiator")]
    pub independent_of_initiator: bool,
    #[serde(rename = "independentOfOtherIPLs", alias = "independent_of_other_ipls")]
    pub independent_of_other_ipls: bool,
    #[serde(default)]
    pub sil: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IplInput {
    /// Validate and sanitize into an [`Ipl`].
    ///
    /// The PFD must lie in `(0, 1]`; values outside the creditable sub-range
    /// are then clamped into it.
    pub fn into_ipl(self, index: usize) -> std::result::Result<Ipl, DomainError> {
        let strict = Pfd::new(self.pfd)?;
        let pfd = Pfd::clamped(strict.value());
        if pfd != strict {
            log::warn!(
                "IPL '{}' PFD {} is outside the creditable range, using {}",
                self.name,
                self.pfd,
                pfd.value()
            );
        }

        let sil = self.sil.map(Sil::from_level).transpose()?;

        Ok(Ipl {
            id: self.id.unwrap_or_else(|| format!("ipl-{}", index + 1)),
            ipl_type: self.ipl_type,
            name: self.name,
            description: self.description.unwrap_or_default(),
            pfd,
            independent_of_initiator: self.independent_of_initiator,
            independent_of_other_ipls: self.independent_of_other_ipls,
            sil,
            notes: self.notes,
        })
    }
}

/// A hazard scenario ready for LOPA: initiating event, target and the claimed layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "initiating_event_frequency")]
    pub initiating_event_frequency: f64,
    #[serde(default, alias = "target_frequency")]
    pub target_frequency: Option<f64>,
    #[serde(default)]
    pub severity: Option<u8>,
    #[serde(default)]
    pub ipls: Vec<IplInput>,
}

/// How the tolerable frequency of a scenario was established.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSource {
    Explicit(f64),
    Severity(Severity),
    ConfigDefault(f64),
}

impl ScenarioInput {
    /// Validate every IPL, stopping at the first invalid record.
    pub fn validated_ipls(&self) -> Result<Vec<Ipl>> {
        self.ipls
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, input)| input.into_ipl(index).map_err(Into::into))
            .collect()
    }

    /// Resolve the target: explicit frequency, then severity, then the fallback.
    pub fn target_source(&self, fallback: Option<f64>) -> Result<TargetSource> {
        if let Some(target) = self.target_frequency {
            return Ok(TargetSource::Explicit(target));
        }
        if let Some(level) = self.severity {
            return Ok(TargetSource::Severity(Severity::from_level(level)?));
        }
        fallback.map(TargetSource::ConfigDefault).ok_or_else(|| {
            crate::errors::Error::scenario(
                "scenario needs a target frequency or a severity (no default target configured)",
            )
        })
    }
}
