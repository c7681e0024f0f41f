use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// When to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sprout - scaffold a new serverless Node.js project
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: sprout my-service")]
pub struct Cli {
    /// Name of the project directory to create
    pub project_name: String,

    /// Do not run `<package-manager> install` after copying the template
    #[arg(long)]
    pub skip_install: bool,

    /// Package manager used to install dependencies (npm, pnpm, yarn)
    #[arg(long, value_name = "PM")]
    pub package_manager: Option<String>,

    /// Git repository holding the template
    #[arg(long, value_name = "URL")]
    pub template_repo: Option<String>,

    /// Directory inside the template repository
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<String>,

    /// Path to a config file (default: ~/.config/sprout/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
