use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::analyzer::dotnet::{
    detect_libraries, detect_runner, extract_package_references, is_test_project,
};
use crate::config::Config;
use crate::locator::find_manifests;
use crate::models::TestEnvironment;

/// Source of manifest contents.
pub trait ManifestReader {
    fn read_manifest(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads manifests from the local filesystem. Invalid UTF-8 is replaced, not rejected.
pub struct FsReader;

impl ManifestReader for FsReader {
    fn read_manifest(&self, path: &Path) -> std::io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Builds a [`TestEnvironment`] from the `.csproj` files under a root directory.
pub struct Detector<'a, R = FsReader> {
    config: &'a Config,
    reader: R,
}

impl<'a> Detector<'a, FsReader> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_reader(config, FsReader)
    }
}

impl<'a, R: ManifestReader> Detector<'a, R> {
    pub fn with_reader(config: &'a Config, reader: R) -> Self {
        Self { config, reader }
    }

    /// Scan `root` and summarize its test environment.
    ///
    /// Fails only when `root` itself cannot be listed. Unreadable manifests, a tree
    /// without manifests and a missing runner are all reported as issues.
    pub fn detect(&self, root: &Path) -> Result<TestEnvironment> {
        std::fs::read_dir(root)
            .with_context(|| format!("cannot read project directory {}", root.display()))?;

        let mut env = TestEnvironment::new(self.config.test.command.clone());

        let manifests = find_manifests(root, self.config.scan.max_depth, &self.config.scan.exclude);
        if manifests.is_empty() {
            env.issues.push("No .csproj files found".to_string());
            return Ok(env);
        }
        debug!("found {} manifest(s) under {}", manifests.len(), root.display());

        for manifest in &manifests {
            let content = match self.reader.read_manifest(manifest) {
                Ok(content) => content,
                Err(err) => {
                    warn!("cannot read {}: {}", manifest.display(), err);
                    env.issues
                        .push(format!("Failed to read {}: {}", manifest.display(), err));
                    continue;
                }
            };

            let packages = extract_package_references(&content);
            if !is_test_project(&packages) {
                debug!("{} is not a test project", manifest.display());
                continue;
            }

            let relative = manifest.strip_prefix(root).unwrap_or(manifest);
            debug!("test project {}: {:?}", relative.display(), packages);
            env.test_projects.push(relative.to_path_buf());

            // The first runner found is kept for the whole tree.
            if env.runner.is_none() {
                env.runner = detect_runner(&packages);
            }
            env.libraries.merge(&detect_libraries(&packages));
        }

        if env.runner.is_none() {
            env.issues
                .push("No test runner found (xUnit, NUnit, or MSTest required)".to_string());
        }

        info!(
            "runner: {}, {} test project(s), {} issue(s)",
            env.runner.map_or("none".to_string(), |r| r.to_string()),
            env.test_projects.len(),
            env.issues.len()
        );

        Ok(env)
    }
}

/// Detect the test environment under `root` using files from the local filesystem.
pub fn detect_test_environment(root: &Path, config: &Config) -> Result<TestEnvironment> {
    Detector::new(config).detect(root)
}
