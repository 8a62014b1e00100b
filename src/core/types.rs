//! Domain types shared by every LOPA calculation.
//!
//! Values that carry a numeric domain (`Pfd`, `Sil`, `Severity`) are validated
//! once at construction and trusted afterwards, so the engine functions that
//! consume them can stay total.

use crate::errors::DomainError;
use crate::lopa::arithmetic::{clamp_pfd, MAX_CREDITABLE_PFD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Probability of failure on demand
// ============================================================================

/// Probability of failure on demand, guaranteed to lie in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Pfd(f64);

impl Pfd {
    /// Strict constructor: NaN, non-positive and `> 1` values are rejected.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::PfdOutOfRange(value))
        }
    }

    /// Lenient constructor for raw input. Never fails.
    ///
    /// NaN saturates to `MAX_CREDITABLE_PFD`, i.e. no credit at all.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(MAX_CREDITABLE_PFD)
        } else {
            Self(clamp_pfd(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `1 / pfd`. Total because the domain excludes zero.
    pub fn rrf(self) -> f64 {
        1.0 / self.0
    }
}

impl TryFrom<f64> for Pfd {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pfd> for f64 {
    fn from(pfd: Pfd) -> Self {
        pfd.0
    }
}

// ============================================================================
// Safety Integrity Level
// ============================================================================

/// IEC 61511 Safety Integrity Levels for demand-mode functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sil {
    /// RRF 10 to 100
    Sil1,
    /// RRF 100 to 1,000
    Sil2,
    /// RRF 1,000 to 10,000
    Sil3,
    /// RRF 10,000 to 100,000
    Sil4,
}

impl Sil {
    pub const ALL: [Sil; 4] = [Sil::Sil1, Sil::Sil2, Sil::Sil3, Sil::Sil4];

    pub fn from_level(level: u8) -> Result<Self, DomainError> {
        match level {
            1 => Ok(Sil::Sil1),
            2 => Ok(Sil::Sil2),
            3 => Ok(Sil::Sil3),
            4 => Ok(Sil::Sil4),
            other => Err(DomainError::InvalidSil(other)),
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Sil::Sil1 => 1,
            Sil::Sil2 => 2,
            Sil::Sil3 => 3,
            Sil::Sil4 => 4,
        }
    }
}

impl TryFrom<u8> for Sil {
    type Error = DomainError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

impl From<Sil> for u8 {
    fn from(sil: Sil) -> Self {
        sil.level()
    }
}

impl fmt::Display for Sil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIL {}", self.level())
    }
}

// ============================================================================
// Consequence severity
// ============================================================================

/// Consequence severity of a hazard scenario, 1 (negligible) to 5 (catastrophic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Negligible,
    Minor,
    Serious,
    Major,
    Catastrophic,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Negligible,
        Severity::Minor,
        Severity::Serious,
        Severity::Major,
        Severity::Catastrophic,
    ];

    pub fn from_level(level: u8) -> Result<Self, DomainError> {
        match level {
            1 => Ok(Severity::Negligible),
            2 => Ok(Severity::Minor),
            3 => Ok(Severity::Serious),
            4 => Ok(Severity::Major),
            5 => Ok(Severity::Catastrophic),
            other => Err(DomainError::InvalidSeverity(other)),
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Severity::Negligible => 1,
            Severity::Minor => 2,
            Severity::Serious => 3,
            Severity::Major => 4,
            Severity::Catastrophic => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Negligible => "Negligible",
            Severity::Minor => "Minor",
            Severity::Serious => "Serious",
            Severity::Major => "Major",
            Severity::Catastrophic => "Catastrophic",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = DomainError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

// ============================================================================
// Independent protection layers
// ============================================================================

/// Category of an independent protection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IplType {
    #[serde(alias = "bpcs")]
    BasicProcessControl,
    #[serde(alias = "sif")]
    SafetyInstrumentedFunction,
    ReliefDevice,
    HumanIntervention,
    Alarm,
    PhysicalProtection,
    Other,
}

impl IplType {
    pub fn as_str(self) -> &'static str {
        match self {
            IplType::BasicProcessControl => "basic-process-control",
            IplType::SafetyInstrumentedFunction => "safety-instrumented-function",
            IplType::ReliefDevice => "relief-device",
            IplType::HumanIntervention => "human-intervention",
            IplType::Alarm => "alarm",
            IplType::PhysicalProtection => "physical-protection",
            IplType::Other => "other",
        }
    }
}

impl fmt::Display for IplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IplType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "basic-process-control" | "bpcs" => Ok(IplType::BasicProcessControl),
            "safety-instrumented-function" | "sif" => Ok(IplType::SafetyInstrumentedFunction),
            "relief-device" => Ok(IplType::ReliefDevice),
            "human-intervention" => Ok(IplType::HumanIntervention),
            "alarm" => Ok(IplType::Alarm),
            "physical-protection" => Ok(IplType::PhysicalProtection),
            "other" => Ok(IplType::Other),
            _ => Err(format!("Unknown IPL type: {}", s)),
        }
    }
}

/// A validated independent protection layer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipl {
    pub id: String,
    #[serde(rename = "type")]
    pub ipl_type: IplType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pfd: Pfd,
    pub independent_of_initiator: bool,
    #[serde(rename = "independentOfOtherIPLs")]
    pub independent_of_other_ipls: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sil: Option<Sil>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ipl {
    /// A fully independent layer with no SIL rating.
    pub fn new(id: impl Into<String>, ipl_type: IplType, name: impl Into<String>, pfd: Pfd) -> Self {
        Self {
            id: id.into(),
            ipl_type,
            name: name.into(),
            description: String::new(),
            pfd,
            independent_of_initiator: true,
            independent_of_other_ipls: true,
            sil: None,
            notes: None,
        }
    }

    pub fn with_independence(mut self, of_initiator: bool, of_other_ipls: bool) -> Self {
        self.independent_of_initiator = of_initiator;
        self.independent_of_other_ipls = of_other_ipls;
        self
    }

    pub fn with_sil(mut self, sil: Sil) -> Self {
        self.sil = Some(sil);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Credit is only taken when both independence conditions hold.
    pub fn is_creditable(&self) -> bool {
        self.independent_of_initiator && self.independent_of_other_ipls
    }
}

// ============================================================================
// Gap status
// ============================================================================

/// How credited protection compares with the required protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapStatus {
    Inadequate,
    Marginal,
    Adequate,
}

impl GapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GapStatus::Inadequate => "inadequate",
            GapStatus::Marginal => "marginal",
            GapStatus::Adequate => "adequate",
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
