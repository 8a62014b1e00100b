use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LopaConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".lopa.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and sanitize config from a TOML string
pub fn parse_config(contents: &str) -> Result<LopaConfig> {
    let config = toml::from_str::<LopaConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    Ok(config.sanitize())
}

/// Load a config file that the user named explicitly. Unlike discovery, a
/// missing or malformed file is an error here.
pub fn load_config_from(path: &Path) -> Result<LopaConfig> {
    let contents = read_config_file(path)?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Outcome of looking for a config file in one directory.
#[derive(Debug, PartialEq)]
pub(crate) enum ConfigLookup {
    /// No file here; keep searching upward.
    Missing,
    Loaded(LopaConfig),
    /// A file exists but cannot be used. The search stops at it.
    Unusable,
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> ConfigLookup {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ConfigLookup::Missing,
        Err(e) => {
            log::warn!(
                "Failed to read config file {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            return ConfigLookup::Unusable;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            ConfigLookup::Loaded(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            ConfigLookup::Unusable
        }
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
///
/// The nearest file wins even when it is malformed; parent configs are never
/// consulted in its place.
pub fn discover_config(start: PathBuf) -> LopaConfig {
    for dir in directory_ancestors(start, MAX_TRAVERSAL_DEPTH) {
        let path = dir.join(CONFIG_FILE_NAME);
        match try_load_config_from_path(&path) {
            ConfigLookup::Missing => continue,
            ConfigLookup::Loaded(config) => return config,
            ConfigLookup::Unusable => return LopaConfig::default(),
        }
    }

    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    LopaConfig::default()
}

pub fn load_config() -> LopaConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LopaConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_sections() {
        let config = parse_config(indoc! {r#"
            [analysis]
            default_target_frequency = 1e-5

            [output]
            default_format = "markdown"

            [display]
            plain = true
        "#})
        .unwrap();
        assert_eq!(config.default_target_frequency(), Some(1e-5));
        assert_eq!(config.default_format(), Some("markdown"));
        assert!(config.plain());
    }

    #[test]
    fn test_parse_config_rejects_malformed_toml() {
        let err = parse_config("[analysis\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_directory_ancestors_is_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_walks_up() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[analysis]\ndefault_target_frequency = 0.001\n",
        )
        .unwrap();
        let nested = root.path().join("units").join("reactor");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.default_target_frequency(), Some(0.001));
    }

    #[test]
    fn test_discover_config_falls_back_on_parse_error() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config.default_target_frequency(), None);
    }

    #[test]
    fn test_malformed_nearest_config_does_not_fall_through_to_parent() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[analysis]\ndefault_target_frequency = 0.001\n",
        )
        .unwrap();
        let child = root.path().join("unit-7");
        fs::create_dir_all(&child).unwrap();
        fs::write(child.join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        assert_eq!(
            try_load_config_from_path(&child.join(CONFIG_FILE_NAME)),
            ConfigLookup::Unusable
        );
        assert_eq!(discover_config(child), LopaConfig::default());
    }

    #[test]
    fn test_missing_file_keeps_searching() {
        let root = TempDir::new().unwrap();
        assert_eq!(
            try_load_config_from_path(&root.path().join(CONFIG_FILE_NAME)),
            ConfigLookup::Missing
        );
    }

    #[test]
    fn test_load_config_from_missing_file_is_an_error() {
        let root = TempDir::new().unwrap();
        let result = load_config_from(&root.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
