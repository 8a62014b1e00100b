//! `.lopa.toml` configuration.
//!
//! Configuration only tunes the shell around the engine (default target,
//! output format, display). The engine's lookup tables are fixed and have no
//! configuration hook.

mod core;
mod loader;

pub use self::core::{AnalysisConfig, DisplayConfig, LopaConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
