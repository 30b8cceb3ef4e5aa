use crate::types::sample::DroneConfig;
use serde::Serialize;

pub type Score = f64;

pub const MAX_SCORE: Score = 100.0;
pub const MIN_SCORE: Score = 0.0;

/// Individual penalties subtracted from [`MAX_SCORE`], plus the noise term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub center_of_mass: Score,
    pub thrust_to_weight: Score,
    pub motor_propeller_mismatch: Score,
    pub propeller_overload: Score,
    pub noise: Score,
}

impl ScoreBreakdown {
    pub fn total_penalty(&self) -> Score {
        self.center_of_mass
            + self.thrust_to_weight
            + self.motor_propeller_mismatch
            + self.propeller_overload
    }

    /// Score before clamping and rounding.
    pub fn raw(&self) -> Score {
        MAX_SCORE - self.total_penalty() + self.noise
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Poor,
    Acceptable,
    Good,
    Excellent,
}

impl Rating {
    pub const ALL: [Rating; 4] = [
        Rating::Poor,
        Rating::Acceptable,
        Rating::Good,
        Rating::Excellent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Acceptable => "acceptable",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Poor => "drone is poorly balanced or underpowered",
            Self::Acceptable => "usable configuration with room for improvement",
            Self::Good => "sound overall configuration",
            Self::Excellent => "optimal and stable configuration",
        }
    }
}

/// A scored configuration as presented to users.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub config: DroneConfig,
    pub breakdown: ScoreBreakdown,
    pub score: Score,
    pub rating: Rating,
    pub explanation: &'static str,
}
