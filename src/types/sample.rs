use crate::error::{DroneScoreError, Result};
use serde::{Deserialize, Serialize};

pub const PROPELLER_SIZES: [u32; 5] = [5, 6, 7, 8, 9];
pub const MOTOR_KV_RANGE: std::ops::Range<u32> = 1400..2700;
pub const TOTAL_WEIGHT_BOUNDS: (f64, f64) = (500.0, 2500.0);
pub const CENTER_OF_MASS_BOUNDS: (f64, f64) = (0.0, 10.0);
pub const THRUST_TO_WEIGHT_BOUNDS: (f64, f64) = (0.8, 3.5);
/// Width of the arm-length window above the propeller clearance minimum, in mm.
pub const ARM_LENGTH_SPAN: f64 = 100.0;

const MM_PER_INCH: f64 = 25.4;
const ARM_CLEARANCE_MM: f64 = 20.0;

/// Shortest arm that clears a propeller of the given size, in mm.
pub fn min_arm_length(propeller_size: u32) -> f64 {
    (propeller_size as f64 * MM_PER_INCH) / 2.0 + ARM_CLEARANCE_MM
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Hardware parameters of one drone, the inputs to the score function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DroneConfig {
    pub total_weight: f64,
    pub center_of_mass_offset: f64,
    pub thrust_to_weight: f64,
    pub arm_length: f64,
    pub propeller_size: u32,
    pub motor_kv: u32,
}

impl DroneConfig {
    /// Rejects inputs the score function is not defined for.
    pub fn validate(&self) -> Result<()> {
        if !PROPELLER_SIZES.contains(&self.propeller_size) {
            return Err(DroneScoreError::InvalidConfiguration(format!(
                "propeller_size must be one of {:?} (found {})",
                PROPELLER_SIZES, self.propeller_size
            )));
        }
        let fields = [
            ("total_weight", self.total_weight),
            ("center_of_mass_offset", self.center_of_mass_offset),
            ("thrust_to_weight", self.thrust_to_weight),
            ("arm_length", self.arm_length),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(DroneScoreError::InvalidConfiguration(format!(
                "{name} must be a finite number (found {value})"
            )));
        }
        if self.total_weight <= 0.0 {
            return Err(DroneScoreError::InvalidConfiguration(format!(
                "total_weight must be positive (found {})",
                self.total_weight
            )));
        }
        if self.center_of_mass_offset < 0.0 {
            return Err(DroneScoreError::InvalidConfiguration(format!(
                "center_of_mass_offset cannot be negative (found {})",
                self.center_of_mass_offset
            )));
        }
        Ok(())
    }
}

/// One record of the output table. Field order is the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub total_weight: f64,
    pub center_of_mass_offset: f64,
    pub thrust_to_weight: f64,
    pub arm_length: f64,
    pub propeller_size: u32,
    pub motor_kv: u32,
    pub score: f64,
}

pub const DATASET_COLUMNS: [&str; 7] = [
    "total_weight",
    "center_of_mass_offset",
    "thrust_to_weight",
    "arm_length",
    "propeller_size",
    "motor_kv",
    "score",
];

impl DatasetRow {
    pub fn new(config: DroneConfig, score: f64) -> Self {
        Self {
            total_weight: config.total_weight,
            center_of_mass_offset: config.center_of_mass_offset,
            thrust_to_weight: config.thrust_to_weight,
            arm_length: config.arm_length,
            propeller_size: config.propeller_size,
            motor_kv: config.motor_kv,
            score,
        }
    }
}
