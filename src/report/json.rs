use anyhow::Result;
use serde::Serialize;

use crate::models::TestEnvironment;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    environment: &'a TestEnvironment,
    missing_dependencies: Vec<String>,
}

pub fn render(env: &TestEnvironment) -> Result<()> {
    println!("{}", to_json(env)?);
    Ok(())
}

fn to_json(env: &TestEnvironment) -> Result<String> {
    let report = JsonReport {
        environment: env,
        missing_dependencies: env.missing_dependencies(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Runner;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn test_json_shape() {
        let mut env = TestEnvironment::new("dotnet test");
        env.runner = Some(Runner::XUnit);
        env.libraries.moq = true;
        env.test_projects.push(PathBuf::from("Foo.Tests.csproj"));

        let json: Value = serde_json::from_str(&to_json(&env).unwrap()).unwrap();
        assert_eq!(json["runner"], "xUnit");
        assert_eq!(json["libraries"]["moq"], true);
        assert_eq!(json["test_command"], "dotnet test");
        assert_eq!(json["test_projects"][0], "Foo.Tests.csproj");
        assert_eq!(json["issues"].as_array().unwrap().len(), 0);
        assert_eq!(json["missing_dependencies"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_without_runner() {
        let mut env = TestEnvironment::new("dotnet test");
        env.issues.push("No .csproj files found".to_string());

        let json: Value = serde_json::from_str(&to_json(&env).unwrap()).unwrap();
        assert!(json["runner"].is_null());
        assert_eq!(json["missing_dependencies"].as_array().unwrap().len(), 3);
    }
}
