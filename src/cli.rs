use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "test-detectr",
    about = "Detect the .NET test framework and testing libraries used by a project",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.test-detectr/config.toml, fallback ~/.config/test-detectr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Subdirectory levels to search for .csproj files (overrides config)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
