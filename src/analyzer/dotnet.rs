use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Libraries, Runner};

/// Matches `<PackageReference ... Include="Name" ...>` wherever `Include` sits among
/// the attributes. The element may be self-closing or carry child elements.
static PACKAGE_REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<PackageReference\b[^>]*?\bInclude\s*=\s*(?:"([^"]+)"|'([^']+)')"#).unwrap()
});

/// Package referenced by every test project regardless of framework.
const TEST_SDK_PACKAGE: &str = "microsoft.net.test.sdk";

/// Framework package that identifies MSTest even without the `mstest` prefix.
const MSTEST_FRAMEWORK_PACKAGE: &str = "microsoft.visualstudio.testplatform.testframework";

const RUNNER_MARKERS: [&str; 3] = ["xunit", "nunit", "mstest"];

/// Extract the lowercased `Include` value of every `<PackageReference>` in a
/// `.csproj` document.
///
/// This is a text scan, not an XML parse: malformed or partial markup still yields
/// whatever references can be matched.
pub fn extract_package_references(content: &str) -> Vec<String> {
    PACKAGE_REFERENCE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// A project is a test project if it references any runner package (including
/// companions such as `xunit.runner.visualstudio`) or the test SDK.
pub fn is_test_project(packages: &[String]) -> bool {
    packages.iter().any(|p| {
        p == TEST_SDK_PACKAGE || RUNNER_MARKERS.iter().any(|marker| p.contains(marker))
    })
}

/// Pick the runner family for one project. xUnit wins over NUnit, NUnit over MSTest.
pub fn detect_runner(packages: &[String]) -> Option<Runner> {
    if packages.iter().any(|p| p.starts_with("xunit")) {
        Some(Runner::XUnit)
    } else if packages.iter().any(|p| p.starts_with("nunit")) {
        Some(Runner::NUnit)
    } else if packages
        .iter()
        .any(|p| p.starts_with("mstest") || p == MSTEST_FRAMEWORK_PACKAGE)
    {
        Some(Runner::MSTest)
    } else {
        None
    }
}

pub fn detect_libraries(packages: &[String]) -> Libraries {
    let has = |name: &str| packages.iter().any(|p| p == name);
    Libraries {
        fluent_assertions: has("fluentassertions"),
        moq: has("moq"),
        nsubstitute: has("nsubstitute"),
        coverlet: has("coverlet.collector"),
    }
}
