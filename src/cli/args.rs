use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "omnipm",
    about = "Universal package manager front-end",
    long_about = "Universal package manager front-end: picks the language backend (poetry, npm, cargo, bundler, ...) that owns your project",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Language backend to use (e.g. python, python3-poetry, nodejs)
    #[arg(short = 'l', long = "lang", value_name = "LANG", global = true)]
    pub lang: Option<String>,

    /// Project directory to inspect (default: current directory)
    #[arg(short = 'C', long = "project-dir", value_name = "DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Output format: table, json, yaml
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the language backend that would handle this project
    WhichLanguage,

    /// List all language backends and whether their tool is installed
    ListLanguages,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
