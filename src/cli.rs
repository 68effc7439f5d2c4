use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat as WriterFormat;

#[derive(Parser, Debug)]
#[command(name = "bizdoctor")]
#[command(about = "Automation ROI and portfolio planning for business intake data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .bizdoctor.toml)
    #[arg(long, global = true, env = "BIZDOCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// A JSON document `{"company": {...}, "bottlenecks": [...]}`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input JSON file, or - for stdin
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Executive summary with ROI highlights and a recommendation
    Report {
        #[command(flatten)]
        io: InputArgs,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable colours
        #[arg(long)]
        plain: bool,
    },

    /// Ranked portfolio with totals, recommendations and phases (JSON)
    Portfolio {
        #[command(flatten)]
        io: InputArgs,
    },

    /// Industry benchmark comparison (JSON)
    Benchmark {
        #[command(flatten)]
        io: InputArgs,
    },

    /// Business profile: size, readiness and growth potential (JSON)
    Profile {
        #[command(flatten)]
        io: InputArgs,
    },

    /// Annualized impact and priority per bottleneck (JSON)
    Annualize {
        #[command(flatten)]
        io: InputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Subcommand name, for crash reports.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Report { .. } => "report",
            Commands::Portfolio { .. } => "portfolio",
            Commands::Benchmark { .. } => "benchmark",
            Commands::Profile { .. } => "profile",
            Commands::Annualize { .. } => "annualize",
            Commands::Init { .. } => "init",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for WriterFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => WriterFormat::Json,
            OutputFormat::Markdown => WriterFormat::Markdown,
            OutputFormat::Terminal => WriterFormat::Terminal,
        }
    }
}
