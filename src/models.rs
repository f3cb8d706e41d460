use std::path::PathBuf;

use serde::Serialize;

/// Test framework family a test project is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Runner {
    #[serde(rename = "xUnit")]
    XUnit,
    NUnit,
    MSTest,
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runner::XUnit => write!(f, "xUnit"),
            Runner::NUnit => write!(f, "NUnit"),
            Runner::MSTest => write!(f, "MSTest"),
        }
    }
}

/// Auxiliary testing libraries referenced by at least one test project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Libraries {
    pub fluent_assertions: bool,
    pub moq: bool,
    pub nsubstitute: bool,
    pub coverlet: bool,
}

impl Libraries {
    /// OR each flag with `other`. A flag that is already set stays set.
    pub fn merge(&mut self, other: &Libraries) {
        self.fluent_assertions |= other.fluent_assertions;
        self.moq |= other.moq;
        self.nsubstitute |= other.nsubstitute;
        self.coverlet |= other.coverlet;
    }

    /// `(display name, present)` pairs in report order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("FluentAssertions", self.fluent_assertions),
            ("Moq", self.moq),
            ("NSubstitute", self.nsubstitute),
            ("Coverlet", self.coverlet),
        ]
    }
}

/// Summary of the test environment found under a project root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestEnvironment {
    pub runner: Option<Runner>,
    pub libraries: Libraries,
    pub test_command: String,
    /// Test project manifests relative to the scanned root, in discovery order.
    pub test_projects: Vec<PathBuf>,
    pub issues: Vec<String>,
}

impl TestEnvironment {
    pub fn new(test_command: impl Into<String>) -> Self {
        Self {
            runner: None,
            libraries: Libraries::default(),
            test_command: test_command.into(),
            test_projects: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// `true` when no issues were recorded.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Commands that would install a default xUnit setup when no runner was found.
    pub fn missing_dependencies(&self) -> Vec<String> {
        if self.runner.is_some() {
            return Vec::new();
        }
        [
            "dotnet add package xunit",
            "dotnet add package xunit.runner.visualstudio",
            "dotnet add package Microsoft.NET.Test.Sdk",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_flags_set() {
        let mut libs = Libraries {
            moq: true,
            ..Default::default()
        };
        libs.merge(&Libraries {
            coverlet: true,
            ..Default::default()
        });
        libs.merge(&Libraries::default());
        assert!(libs.moq);
        assert!(libs.coverlet);
        assert!(!libs.fluent_assertions);
        assert!(!libs.nsubstitute);
    }

    #[test]
    fn test_missing_dependencies_only_without_runner() {
        let mut env = TestEnvironment::new("dotnet test");
        let missing = env.missing_dependencies();
        assert_eq!(missing.len(), 3);
        assert_eq!(missing[0], "dotnet add package xunit");

        env.runner = Some(Runner::NUnit);
        assert!(env.missing_dependencies().is_empty());
    }

    #[test]
    fn test_runner_display() {
        assert_eq!(Runner::XUnit.to_string(), "xUnit");
        assert_eq!(Runner::NUnit.to_string(), "NUnit");
        assert_eq!(Runner::MSTest.to_string(), "MSTest");
    }

    #[test]
    fn test_runner_json_matches_display() {
        for runner in [Runner::XUnit, Runner::NUnit, Runner::MSTest] {
            assert_eq!(
                serde_json::to_value(runner).unwrap(),
                serde_json::Value::String(runner.to_string())
            );
        }
    }
}
