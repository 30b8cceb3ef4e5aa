pub mod distributions;

use crate::scoring;
use crate::types::sample::{
    min_arm_length, round_to, DatasetRow, DroneConfig, ARM_LENGTH_SPAN, CENTER_OF_MASS_BOUNDS,
    MOTOR_KV_RANGE, PROPELLER_SIZES, THRUST_TO_WEIGHT_BOUNDS, TOTAL_WEIGHT_BOUNDS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base airframe mass per inch of propeller, in grams.
const WEIGHT_PER_PROPELLER_INCH: f64 = 150.0;
const WEIGHT_STD_DEV: f64 = 300.0;
const CENTER_OF_MASS_SCALE: f64 = 1.0;

/// Seeded source of drone configurations and score noise.
///
/// Every draw comes from one stream, so a given seed fixes both the inputs
/// and the noise applied to their scores.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one configuration, clipped and rounded to its documented ranges.
    pub fn sample(&mut self) -> DroneConfig {
        let rng = &mut self.rng;

        let propeller_size = PROPELLER_SIZES[rng.gen_range(0..PROPELLER_SIZES.len())];
        let motor_kv = rng.gen_range(MOTOR_KV_RANGE);

        let base_weight = propeller_size as f64 * WEIGHT_PER_PROPELLER_INCH;
        let total_weight = distributions::normal(rng, base_weight, WEIGHT_STD_DEV)
            .clamp(TOTAL_WEIGHT_BOUNDS.0, TOTAL_WEIGHT_BOUNDS.1);

        let min_arm = min_arm_length(propeller_size);
        let arm_length = distributions::uniform(rng, min_arm, min_arm + ARM_LENGTH_SPAN);

        let thrust_to_weight =
            distributions::uniform(rng, THRUST_TO_WEIGHT_BOUNDS.0, THRUST_TO_WEIGHT_BOUNDS.1);

        let center_of_mass_offset = distributions::exponential(rng, CENTER_OF_MASS_SCALE)
            .clamp(CENTER_OF_MASS_BOUNDS.0, CENTER_OF_MASS_BOUNDS.1);

        DroneConfig {
            total_weight: round_to(total_weight, 1),
            center_of_mass_offset: round_to(center_of_mass_offset, 2),
            thrust_to_weight: round_to(thrust_to_weight, 2),
            arm_length: round_to(arm_length, 1),
            propeller_size,
            motor_kv,
        }
    }

    pub fn noise(&mut self, std_dev: f64) -> f64 {
        distributions::normal(&mut self.rng, 0.0, std_dev)
    }
}

/// Samples `samples` configurations, then scores each one with noise drawn
/// from the same seeded stream.
pub fn generate_dataset(samples: usize, seed: u64, noise_std_dev: f64) -> Vec<DatasetRow> {
    let mut sampler = Sampler::new(seed);
    let configs: Vec<DroneConfig> = (0..samples).map(|_| sampler.sample()).collect();
    tracing::debug!(rows = configs.len(), "sampled configurations");

    configs
        .into_iter()
        .map(|config| {
            let noise = sampler.noise(noise_std_dev);
            let card = scoring::score_with_noise(config, noise);
            DatasetRow::new(config, card.score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_NOISE_STD_DEV;

    const SEED: u64 = 42;

    #[test]
    fn generate_dataset_produces_requested_row_count() {
        assert_eq!(generate_dataset(250, SEED, DEFAULT_NOISE_STD_DEV).len(), 250);
        assert!(generate_dataset(0, SEED, DEFAULT_NOISE_STD_DEV).is_empty());
    }

    #[test]
    fn sampled_fields_stay_within_documented_ranges() {
        let mut sampler = Sampler::new(SEED);
        for _ in 0..5_000 {
            let config = sampler.sample();
            assert!(PROPELLER_SIZES.contains(&config.propeller_size));
            assert!(MOTOR_KV_RANGE.contains(&config.motor_kv));
            assert!((500.0..=2500.0).contains(&config.total_weight));
            assert!((0.0..=10.0).contains(&config.center_of_mass_offset));
            assert!((0.8..=3.5).contains(&config.thrust_to_weight));
            assert!(config.arm_length + 1e-9 >= min_arm_length(config.propeller_size));
            assert!(config.arm_length <= min_arm_length(config.propeller_size) + 100.0 + 1e-9);
        }
    }

    #[test]
    fn every_score_is_clamped() {
        let rows = generate_dataset(5_000, SEED, DEFAULT_NOISE_STD_DEV);
        assert!(rows.iter().all(|row| (0.0..=100.0).contains(&row.score)));
    }

    #[test]
    fn same_seed_reproduces_rows_including_noise() {
        let first = generate_dataset(1_000, SEED, DEFAULT_NOISE_STD_DEV);
        let second = generate_dataset(1_000, SEED, DEFAULT_NOISE_STD_DEV);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let first = generate_dataset(100, SEED, DEFAULT_NOISE_STD_DEV);
        let second = generate_dataset(100, SEED + 1, DEFAULT_NOISE_STD_DEV);
        assert_ne!(first, second);
    }

    #[test]
    fn zero_noise_matches_deterministic_score() {
        let rows = generate_dataset(200, SEED, 0.0);
        for row in rows {
            let config = DroneConfig {
                total_weight: row.total_weight,
                center_of_mass_offset: row.center_of_mass_offset,
                thrust_to_weight: row.thrust_to_weight,
                arm_length: row.arm_length,
                propeller_size: row.propeller_size,
                motor_kv: row.motor_kv,
            };
            assert_eq!(row.score, scoring::score(config).score);
        }
    }

    #[test]
    fn every_propeller_size_is_drawn() {
        let mut sampler = Sampler::new(SEED);
        let drawn: std::collections::BTreeSet<u32> =
            (0..500).map(|_| sampler.sample().propeller_size).collect();
        assert_eq!(drawn.into_iter().collect::<Vec<_>>(), PROPELLER_SIZES.to_vec());
    }
}
