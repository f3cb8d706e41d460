use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::TestEnvironment;

/// Render a colored terminal report.
pub fn render(env: &TestEnvironment, path: &Path, quiet: bool) {
    if quiet {
        println!("{}", summary_line(env));
        return;
    }

    println!(
        "\n {} v{}",
        "test-detectr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", path.display());

    println!("{}\n", "## Test Environment".bold());
    match env.runner {
        Some(runner) => println!(" Runner: {} {}", runner, "✓".green()),
        None => println!(" Runner: {} {}", "NOT FOUND".red(), "✗".red()),
    }
    println!();
    render_libraries(env);
    println!();

    if !env.test_projects.is_empty() {
        println!(" Test Projects:");
        for project in &env.test_projects {
            println!("   - {}", project.display());
        }
        println!();
    }

    println!(" Test Command: {}", env.test_command.cyan());

    if !env.issues.is_empty() {
        println!("\n{}\n", "## Issues".yellow().bold());
        for issue in &env.issues {
            println!("   - {}", issue);
        }
    }

    let missing = env.missing_dependencies();
    if !missing.is_empty() {
        println!("\n{}\n", "## Missing Dependencies".red().bold());
        for cmd in &missing {
            println!("   {}", cmd);
        }
    }
}

fn render_libraries(env: &TestEnvironment) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Library").add_attribute(Attribute::Bold),
            Cell::new("Installed").add_attribute(Attribute::Bold),
        ]);

    for (name, present) in env.libraries.entries() {
        let (label, color) = if present {
            ("YES ✓", Color::Green)
        } else {
            ("NO", Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(label).fg(color).set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn summary_line(env: &TestEnvironment) -> String {
    let runner = env
        .runner
        .map_or_else(|| "none".to_string(), |r| r.to_string());
    format!(
        "Runner: {}  Test projects: {}  Issues: {}",
        runner,
        env.test_projects.len(),
        env.issues.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Runner;
    use std::path::PathBuf;

    #[test]
    fn test_summary_line() {
        let mut env = TestEnvironment::new("dotnet test");
        assert_eq!(summary_line(&env), "Runner: none  Test projects: 0  Issues: 0");

        env.runner = Some(Runner::MSTest);
        env.test_projects.push(PathBuf::from("A.Tests.csproj"));
        env.issues.push("Failed to read B.csproj: denied".to_string());
        assert_eq!(
            summary_line(&env),
            "Runner: MSTest  Test projects: 1  Issues: 1"
        );
    }
}
