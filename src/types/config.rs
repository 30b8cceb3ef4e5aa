use crate::error::DroneScoreError;
use serde::Deserialize;

pub const DEFAULT_SAMPLES: usize = 50_000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_OUTPUT: &str = "drone_config_rating.csv";
pub const DEFAULT_NOISE_STD_DEV: f64 = 3.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DroneScoreConfig {
    pub generation: Option<GenerationConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub noise_std_dev: Option<f64>,
}

/// Fully resolved generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub samples: usize,
    pub seed: u64,
    pub output: String,
    pub noise_std_dev: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            output: DEFAULT_OUTPUT.to_string(),
            noise_std_dev: DEFAULT_NOISE_STD_DEV,
        }
    }
}

impl DroneScoreConfig {
    pub fn generation_settings(&self) -> GenerationSettings {
        let defaults = GenerationSettings::default();
        let generation = self.generation.as_ref();
        GenerationSettings {
            samples: generation
                .and_then(|generation| generation.samples)
                .unwrap_or(defaults.samples),
            seed: generation
                .and_then(|generation| generation.seed)
                .unwrap_or(defaults.seed),
            output: generation
                .and_then(|generation| generation.output.clone())
                .unwrap_or(defaults.output),
            noise_std_dev: self
                .scoring
                .as_ref()
                .and_then(|scoring| scoring.noise_std_dev)
                .unwrap_or(defaults.noise_std_dev),
        }
    }

}

/// A noise standard deviation is usable when it is finite and non-negative.
pub fn is_valid_noise_std_dev(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<(), DroneScoreError> {
        if self.samples == 0 {
            return Err(DroneScoreError::ConfigParse(
                "generation.samples must be greater than 0".to_string(),
            ));
        }
        if self.output.trim().is_empty() {
            return Err(DroneScoreError::ConfigParse(
                "generation.output cannot be empty".to_string(),
            ));
        }
        if !is_valid_noise_std_dev(self.noise_std_dev) {
            return Err(DroneScoreError::ConfigParse(format!(
                "scoring.noise_std_dev must be a non-negative number (found {})",
                self.noise_std_dev
            )));
        }
        Ok(())
    }
}
