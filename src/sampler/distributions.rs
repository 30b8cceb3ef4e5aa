use rand::Rng;
use std::f64::consts::PI;

/// Standard normal via Box-Muller.
pub fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

pub fn normal(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    mean + std_dev * standard_normal(rng)
}

/// Exponential with the given scale (mean), by inverse CDF.
pub fn exponential(rng: &mut impl Rng, scale: f64) -> f64 {
    let u: f64 = rng.gen();
    -scale * (1.0 - u).ln()
}

/// Uniform over `[low, high)`.
pub fn uniform(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}
