pub mod rating;

use crate::types::sample::{round_to, DroneConfig};
use crate::types::scoring::{Score, ScoreBreakdown, ScoreCard, MAX_SCORE, MIN_SCORE};

const CENTER_OF_MASS_TOLERANCE: f64 = 0.5;
const CENTER_OF_MASS_EXPONENT: f64 = 1.8;
const CENTER_OF_MASS_FACTOR: f64 = 5.0;

/// Reference `motor_kv * propeller_size` product for a balanced pairing.
const IDEAL_KV_PRODUCT: f64 = 12_000.0;
const KV_DEVIATION_TOLERANCE: f64 = 0.2;
const KV_DEVIATION_FACTOR: f64 = 40.0;

/// Grams of lift per propeller inch, and the safety margin on top of it.
const LOAD_PER_PROPELLER_INCH: f64 = 250.0;
const LOAD_MARGIN: f64 = 1.5;
const OVERLOAD_FACTOR: f64 = 60.0;

pub fn center_of_mass_penalty(offset: f64) -> Score {
    if offset > CENTER_OF_MASS_TOLERANCE {
        offset.powf(CENTER_OF_MASS_EXPONENT) * CENTER_OF_MASS_FACTOR
    } else {
        0.0
    }
}

pub fn thrust_to_weight_penalty(ratio: f64) -> Score {
    if ratio < 1.2 {
        50.0
    } else if ratio < 1.5 {
        20.0
    } else if ratio > 3.0 {
        10.0
    } else {
        0.0
    }
}

pub fn motor_propeller_penalty(motor_kv: u32, propeller_size: u32) -> Score {
    let actual = motor_kv as f64 * propeller_size as f64;
    let deviation = (actual - IDEAL_KV_PRODUCT).abs() / IDEAL_KV_PRODUCT;
    if deviation > KV_DEVIATION_TOLERANCE {
        deviation * KV_DEVIATION_FACTOR
    } else {
        0.0
    }
}

pub fn max_propeller_load(propeller_size: u32) -> f64 {
    propeller_size as f64 * LOAD_PER_PROPELLER_INCH * LOAD_MARGIN
}

pub fn propeller_overload_penalty(total_weight: f64, propeller_size: u32) -> Score {
    let max_load = max_propeller_load(propeller_size);
    if total_weight > max_load {
        ((total_weight - max_load) / max_load) * OVERLOAD_FACTOR
    } else {
        0.0
    }
}

pub fn breakdown(config: DroneConfig, noise: Score) -> ScoreBreakdown {
    ScoreBreakdown {
        center_of_mass: center_of_mass_penalty(config.center_of_mass_offset),
        thrust_to_weight: thrust_to_weight_penalty(config.thrust_to_weight),
        motor_propeller_mismatch: motor_propeller_penalty(config.motor_kv, config.propeller_size),
        propeller_overload: propeller_overload_penalty(config.total_weight, config.propeller_size),
        noise,
    }
}

/// Scores `config` with an explicit noise term. The result is clamped to
/// `[0, 100]` and rounded to one decimal.
pub fn score_with_noise(config: DroneConfig, noise: Score) -> ScoreCard {
    let breakdown = breakdown(config, noise);
    let score = round_to(breakdown.raw().clamp(MIN_SCORE, MAX_SCORE), 1);
    let rating = rating::interpret(score);
    ScoreCard {
        config,
        breakdown,
        score,
        rating,
        explanation: rating.explanation(),
    }
}

/// Noise-free score.
pub fn score(config: DroneConfig) -> ScoreCard {
    score_with_noise(config, 0.0)
}
