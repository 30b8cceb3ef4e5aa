use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dronescore",
    version,
    about = "Synthetic drone configuration dataset generator and scorer"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample and score a synthetic dataset, then write it as CSV
    Generate(GenerateCommand),
    /// Score a single drone configuration
    Score(ScoreCommand),
    /// Check a generated dataset against its documented ranges
    Inspect(InspectCommand),
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Number of rows to generate
    #[arg(long)]
    pub samples: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Standard deviation of the score noise
    #[arg(long)]
    pub noise_std_dev: Option<f64>,
    /// Directory holding dronescore.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Total weight in grams
    #[arg(long)]
    pub total_weight: f64,
    #[arg(long)]
    pub center_of_mass_offset: f64,
    #[arg(long)]
    pub thrust_to_weight: f64,
    /// Arm length in millimeters
    #[arg(long)]
    pub arm_length: f64,
    /// Propeller size in inches (5-9)
    #[arg(long)]
    pub propeller_size: u32,
    #[arg(long)]
    pub motor_kv: u32,
    /// Seed for the noise term; the score is noise-free when omitted
    #[arg(long)]
    pub noise_seed: Option<u64>,
    #[arg(long, default_value_t = crate::types::config::DEFAULT_NOISE_STD_DEV)]
    pub noise_std_dev: f64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ScoreFormat,
}

#[derive(Args)]
pub struct InspectCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ScoreFormat {
    Json,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
