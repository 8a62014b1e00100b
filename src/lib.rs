// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod lopa;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{GapStatus, Ipl, IplInput, IplType, Pfd, ScenarioInput, Severity, Sil};

pub use crate::errors::{DomainError, Error, Result};

pub use crate::lopa::{
    analyze_gap, evaluate_ipl, evaluate_ipl_set, pfd_from_rrf, rrf_by_type, rrf_from_pfd,
    rrf_requirement, run_analysis_for_severity, run_comprehensive_analysis, sil_from_rrf,
    AggregateAnalysis, ComprehensiveResult, GapAnalysis, IplAnalysis, LopaResult, Requirement,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
