use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::locator::DEFAULT_MAX_DEPTH;

/// Root configuration structure, deserialized from `.test-detectr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub test: TestConfig,
}

/// Controls manifest discovery.
#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Subdirectory levels searched below the root. Defaults to 3.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Directory names pruned in addition to hidden, `bin`, `obj` and `node_modules`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Deserialize)]
pub struct TestConfig {
    /// Command reported for running the detected tests.
    #[serde(default = "default_test_command")]
    pub command: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            command: default_test_command(),
        }
    }
}

fn default_test_command() -> String {
    "dotnet test".to_string()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.test-detectr/config.toml`
/// 3. `~/.config/test-detectr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".test-detectr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("test-detectr").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.scan.max_depth, 3);
        assert!(cfg.scan.exclude.is_empty());
        assert_eq!(cfg.test.command, "dotnet test");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("[scan]\nexclude = [\"packages\"]\n").unwrap();
        assert_eq!(cfg.scan.max_depth, 3);
        assert_eq!(cfg.scan.exclude, vec!["packages"]);
        assert_eq!(cfg.test.command, "dotnet test");
    }

    #[test]
    fn test_project_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".test-detectr")).unwrap();
        fs::write(
            dir.path().join(".test-detectr/config.toml"),
            "[scan]\nmax_depth = 5\n\n[test]\ncommand = \"dotnet test --no-build\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.scan.max_depth, 5);
        assert_eq!(cfg.test.command, "dotnet test --no-build");
    }

    #[test]
    fn test_override_wins_and_must_parse() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[scan]\nmax_depth = 1\n").unwrap();
        let cfg = load_config(dir.path(), Some(&custom)).unwrap();
        assert_eq!(cfg.scan.max_depth, 1);

        fs::write(&custom, "[scan\nmax_depth = ").unwrap();
        assert!(load_config(dir.path(), Some(&custom)).is_err());
    }
}
