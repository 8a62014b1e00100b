pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::ScenarioInput;
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Load a scenario from `.json` or `.toml`, chosen by extension.
pub fn read_scenario(path: &Path) -> Result<ScenarioInput> {
    let contents = read_file(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&contents)?),
        Some("json") => Ok(serde_json::from_str(&contents)?),
        other => Err(Error::scenario(format!(
            "unsupported scenario format {:?} for {}: expected .json or .toml",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_read_scenario_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overpressure.toml");
        write_file(
            &path,
            indoc! {r#"
                name = "Reactor overpressure"
                initiating_event_frequency = 0.1
                severity = 4

                [[ipls]]
                type = "relief-device"
                name = "PSV-201"
                pfd = 0.01
                independent_of_initiator = true
                independent_of_other_ipls = true
            "#},
        )
        .unwrap();

        let scenario = read_scenario(&path).unwrap();
        assert_eq!(scenario.name.as_deref(), Some("Reactor overpressure"));
        assert_eq!(scenario.severity, Some(4));
        assert_eq!(scenario.ipls.len(), 1);
    }

    #[test]
    fn test_read_scenario_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenario.yaml");
        write_file(&path, "name: x").unwrap();
        assert!(matches!(read_scenario(&path), Err(Error::Scenario(_))));
    }
}
