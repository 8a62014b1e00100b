//! Layers of Protection Analysis engine.
//!
//! Data flows one way: arithmetic, then per-layer evaluation and the target
//! requirement, then the gap analysis, and finally the orchestrator that
//! composes them. Nothing here holds state; every function is a pure function
//! of its arguments and may be called concurrently without coordination.
//!
//! ```rust
//! use lopa::core::{Ipl, IplType, Pfd};
//! use lopa::lopa::run_comprehensive_analysis;
//!
//! let ipls = vec![
//!     Ipl::new("bpcs", IplType::BasicProcessControl, "LIC-101", Pfd::new(0.1)?),
//!     Ipl::new("psv", IplType::ReliefDevice, "PSV-201", Pfd::new(0.01)?),
//! ];
//! let result = run_comprehensive_analysis(&ipls, 0.1, 1e-4)?;
//! assert_eq!(result.reduction_analysis.creditable_rrf, 1000.0);
//! # Ok::<(), lopa::errors::DomainError>(())
//! ```

pub mod arithmetic;
pub mod gap;
pub mod ipl;
pub mod orchestrator;
pub mod requirement;
pub mod sil;

pub use arithmetic::{
    additional_rrf_needed, clamp_pfd, combine_rrfs, is_creditable_pfd, orders_of_magnitude,
    pfd_from_rrf, rrf_from_pfd, total_rrf_from_pfds, MAX_CREDITABLE_PFD, MIN_CREDITABLE_PFD,
};
pub use gap::{analyze_gap, classify_gap_ratio, GapAnalysis};
pub use ipl::{
    evaluate_ipl, evaluate_ipl_set, rrf_by_type, typical_rrf_for_ipl_type, AggregateAnalysis,
    IplAnalysis, TypeBreakdown, ValidationResult,
};
pub use orchestrator::{
    run_analysis_for_severity, run_comprehensive_analysis, ComprehensiveResult, LopaResult,
};
pub use requirement::{
    rrf_requirement, rrf_requirement_from_severity, target_frequency_for_severity,
    EstimatedIplCount, Requirement,
};
pub use sil::{rrf_range_for_sil, sil_from_rrf, typical_rrf_for_sil, RrfRange};
