use crate::cli::GenerateCommand;
use crate::config;
use crate::error::{DroneScoreError, Result};
use crate::generator::manifest::{self, RunManifest};
use crate::sampler;
use crate::types::config::GenerationSettings;
use crate::types::sample::{DatasetRow, DATASET_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub rows: usize,
    pub output: PathBuf,
    pub manifest: PathBuf,
    pub mean_score: f64,
    pub sha256: String,
}

pub fn execute_generate(cmd: &GenerateCommand) -> Result<GenerateOutcome> {
    if !cmd.config_dir.exists() {
        return Err(DroneScoreError::PathNotFound(
            cmd.config_dir.display().to_string(),
        ));
    }
    let loaded = config::load_config(&cmd.config_dir)?;
    let settings = resolve_settings(cmd, loaded.generation_settings());
    settings.validate()?;
    run_generation(&settings)
}

/// Command-line flags override whatever the config files resolved to.
fn resolve_settings(cmd: &GenerateCommand, base: GenerationSettings) -> GenerationSettings {
    GenerationSettings {
        samples: cmd.samples.unwrap_or(base.samples),
        seed: cmd.seed.unwrap_or(base.seed),
        output: cmd
            .output
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or(base.output),
        noise_std_dev: cmd.noise_std_dev.unwrap_or(base.noise_std_dev),
    }
}

pub fn run_generation(settings: &GenerationSettings) -> Result<GenerateOutcome> {
    tracing::info!(
        samples = settings.samples,
        seed = settings.seed,
        noise_std_dev = settings.noise_std_dev,
        "generating dataset"
    );
    let rows = sampler::generate_dataset(settings.samples, settings.seed, settings.noise_std_dev);

    let output = PathBuf::from(&settings.output);
    write_dataset(&output, &rows)?;
    let sha256 = manifest::sha256_file(&output)?;
    let run_manifest = RunManifest::new(
        settings.seed,
        settings.samples,
        settings.noise_std_dev,
        sha256.clone(),
    );
    let manifest_path = manifest::write_manifest(&output, &run_manifest)?;
    tracing::info!(path = %output.display(), sha256 = %sha256, "dataset written");

    Ok(GenerateOutcome {
        rows: rows.len(),
        output,
        manifest: manifest_path,
        mean_score: mean_score(&rows),
        sha256,
    })
}

pub fn write_dataset(path: &Path, rows: &[DatasetRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(DroneScoreError::Io)?;
    }
    // Header written explicitly so an empty dataset still carries its columns.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(DATASET_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(DroneScoreError::Io)?;
    Ok(())
}

fn mean_score(rows: &[DatasetRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|row| row.score).sum::<f64>() / rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_in(dir: &Path, samples: usize, seed: u64) -> GenerationSettings {
        GenerationSettings {
            samples,
            seed,
            output: dir.join("rating.csv").to_string_lossy().to_string(),
            ..GenerationSettings::default()
        }
    }

    #[test]
    fn write_dataset_emits_header_in_column_order() {
        let tmp = TempDir::new().expect("temp dir should create");
        let path = tmp.path().join("nested/out.csv");
        let rows = sampler::generate_dataset(3, 42, 3.0);

        write_dataset(&path, &rows).expect("dataset should write");

        let content = fs::read_to_string(&path).expect("dataset should read");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(DATASET_COLUMNS.join(",").as_str()));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn run_generation_writes_dataset_and_manifest() {
        let tmp = TempDir::new().expect("temp dir should create");
        let outcome = run_generation(&settings_in(tmp.path(), 50, 42)).expect("run should succeed");

        assert_eq!(outcome.rows, 50);
        assert!(outcome.output.exists());
        assert!(outcome.manifest.exists());
        assert!((0.0..=100.0).contains(&outcome.mean_score));

        let loaded = manifest::read_manifest(&outcome.output)
            .expect("manifest should read")
            .expect("manifest should exist");
        assert_eq!(loaded.sha256, outcome.sha256);
        assert_eq!(loaded.samples, 50);
    }

    #[test]
    fn same_seed_produces_identical_digest() {
        let first_dir = TempDir::new().expect("temp dir should create");
        let second_dir = TempDir::new().expect("temp dir should create");

        let first = run_generation(&settings_in(first_dir.path(), 200, 42)).expect("first run");
        let second = run_generation(&settings_in(second_dir.path(), 200, 42)).expect("second run");

        assert_eq!(first.sha256, second.sha256);
    }

    #[test]
    fn flags_override_resolved_settings() {
        let cmd = GenerateCommand {
            samples: Some(10),
            seed: None,
            output: Some(PathBuf::from("flag.csv")),
            noise_std_dev: Some(0.0),
            config_dir: PathBuf::from("."),
        };
        let base = GenerationSettings {
            seed: 7,
            ..GenerationSettings::default()
        };

        let resolved = resolve_settings(&cmd, base);
        assert_eq!(resolved.samples, 10);
        assert_eq!(resolved.seed, 7);
        assert_eq!(resolved.output, "flag.csv");
        assert_eq!(resolved.noise_std_dev, 0.0);
    }

    #[test]
    fn flag_replaces_invalid_config_value() {
        let tmp = TempDir::new().expect("temp dir should create");
        fs::write(
            tmp.path().join(config::DEFAULT_CONFIG_FILE),
            "[generation]\nsamples = 0\n",
        )
        .expect("config should write");
        let cmd = GenerateCommand {
            samples: Some(5),
            seed: None,
            output: Some(tmp.path().join("flag.csv")),
            noise_std_dev: None,
            config_dir: tmp.path().to_path_buf(),
        };

        let outcome = execute_generate(&cmd).expect("flag should override config");
        assert_eq!(outcome.rows, 5);
    }

    #[test]
    fn invalid_config_value_without_flag_is_rejected() {
        let tmp = TempDir::new().expect("temp dir should create");
        fs::write(
            tmp.path().join(config::DEFAULT_CONFIG_FILE),
            "[generation]\nsamples = 0\n",
        )
        .expect("config should write");
        let cmd = GenerateCommand {
            samples: None,
            seed: None,
            output: Some(tmp.path().join("never.csv")),
            noise_std_dev: None,
            config_dir: tmp.path().to_path_buf(),
        };

        let err = execute_generate(&cmd).expect_err("zero samples should be rejected");
        assert!(err.to_string().contains("generation.samples"));
        assert!(!tmp.path().join("never.csv").exists());
    }

    #[test]
    fn write_failure_is_reported() {
        let tmp = TempDir::new().expect("temp dir should create");
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").expect("blocker should write");

        let result = write_dataset(&blocker.join("out.csv"), &[]);
        assert!(result.is_err());
    }
}
