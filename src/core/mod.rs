pub mod input;
pub mod types;

pub use input::{IplInput, ScenarioInput, TargetSource};
pub use types::{GapStatus, Ipl, IplType, Pfd, Severity, Sil};
