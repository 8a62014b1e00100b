//! RRF to SIL classification.

use crate::core::Sil;
use serde::{Deserialize, Serialize};

/// Half-open RRF band `[min, max)` of a SIL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RrfRange {
    pub min: f64,
    pub max: f64,
}

impl RrfRange {
    pub fn contains(&self, rrf: f64) -> bool {
        rrf >= self.min && rrf < self.max
    }
}

/// Demand-mode SIL bands, lowest first.
const SIL_BANDS: [(Sil, RrfRange); 4] = [
    (Sil::Sil1, RrfRange { min: 10.0, max: 100.0 }),
    (Sil::Sil2, RrfRange { min: 100.0, max: 1_000.0 }),
    (Sil::Sil3, RrfRange { min: 1_000.0, max: 10_000.0 }),
    (Sil::Sil4, RrfRange { min: 10_000.0, max: 100_000.0 }),
];

/// `None` below RRF 10. Anything at or above the SIL 4 floor is SIL 4.
pub fn sil_from_rrf(rrf: f64) -> Option<Sil> {
    SIL_BANDS
        .iter()
        .rev()
        .find(|(_, band)| rrf >= band.min)
        .map(|(sil, _)| *sil)
}

pub fn rrf_range_for_sil(sil: Sil) -> RrfRange {
    SIL_BANDS[usize::from(sil.level() - 1)].1
}

/// Band floor, used for illustrative estimates only.
pub fn typical_rrf_for_sil(sil: Sil) -> f64 {
    rrf_range_for_sil(sil).min
}
