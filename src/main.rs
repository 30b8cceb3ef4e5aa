mod cli;
mod config;
mod error;
mod generator;
mod inspect;
mod logging;
mod report;
mod sampler;
mod scoring;
mod types;

use crate::error::DroneScoreError;
use crate::types::config::is_valid_noise_std_dev;
use crate::types::sample::DroneConfig;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, DroneScoreError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Generate(cmd) => {
            let outcome = generator::writer::execute_generate(&cmd)?;
            if !cli.quiet {
                println!("generated {} row(s)", outcome.rows);
                println!("dataset: {}", outcome.output.display());
                println!("manifest: {}", outcome.manifest.display());
                println!("sha256: {}", outcome.sha256);
                println!("mean score: {:.2}", outcome.mean_score);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let config = DroneConfig {
                total_weight: cmd.total_weight,
                center_of_mass_offset: cmd.center_of_mass_offset,
                thrust_to_weight: cmd.thrust_to_weight,
                arm_length: cmd.arm_length,
                propeller_size: cmd.propeller_size,
                motor_kv: cmd.motor_kv,
            };
            config.validate()?;
            if !is_valid_noise_std_dev(cmd.noise_std_dev) {
                return Err(DroneScoreError::InvalidConfiguration(format!(
                    "noise_std_dev must be a non-negative number (found {})",
                    cmd.noise_std_dev
                )));
            }

            let card = match cmd.noise_seed {
                Some(seed) => {
                    let noise = sampler::Sampler::new(seed).noise(cmd.noise_std_dev);
                    scoring::score_with_noise(config, noise)
                }
                None => scoring::score(config),
            };
            tracing::info!(score = card.score, rating = card.rating.label(), "scored");

            let rendered = match cmd.format {
                cli::ScoreFormat::Json => report::json::to_json(&card)?,
                cli::ScoreFormat::Md => report::md::score_to_markdown(&card),
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Inspect(cmd) => {
            let inspection = inspect::inspect(&cmd.path)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
            };
            let rendered = report::render(&inspection, output_format)?;
            println!("{rendered}");

            if inspection.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if !inspection.findings.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
