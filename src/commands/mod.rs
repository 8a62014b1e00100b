pub mod evaluate;
pub mod init;
pub mod requirement;
pub mod sil;

pub use evaluate::{evaluate_scenario, handle_evaluate, EvaluateConfig, ScenarioEvaluation};
pub use requirement::{compute_requirement, handle_requirement, RequirementConfig, RequirementTarget};
