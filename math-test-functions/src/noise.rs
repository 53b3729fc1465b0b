//! Stochastic perturbations for noisy test functions.
//!
//! Randomness always comes from a generator the caller passes in, so runs
//! seeded with the same `StdRng` are reproducible and concurrent callers
//! never share a generator.

use crate::error::{Result, TestFunctionError};
use rand::RngCore;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution of a noise term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseModel {
    /// Uniform on `[low, high)`.
    Uniform {
        /// Inclusive lower end
        low: f64,
        /// Exclusive upper end
        high: f64,
    },
    /// Zero-mean Gaussian.
    Gaussian {
        /// Standard deviation
        std_dev: f64,
    },
}

impl NoiseModel {
    /// Uniform on `[0, 1)`.
    pub const UNIT_UNIFORM: NoiseModel = NoiseModel::Uniform {
        low: 0.0,
        high: 1.0,
    };

    /// Standard normal.
    pub const STANDARD_NORMAL: NoiseModel = NoiseModel::Gaussian { std_dev: 1.0 };

    /// Draw one sample on behalf of `function`.
    pub fn sample(&self, function: &'static str, rng: &mut dyn RngCore) -> Result<f64> {
        match *self {
            NoiseModel::Uniform { low, high } => {
                let dist = Uniform::new(low, high).map_err(|e| {
                    TestFunctionError::InvalidParameter {
                        function,
                        reason: format!("uniform noise [{low}, {high}): {e}"),
                    }
                })?;
                Ok(dist.sample(rng))
            }
            NoiseModel::Gaussian { std_dev } => {
                let dist = Normal::new(0.0, std_dev).map_err(|e| {
                    TestFunctionError::InvalidParameter {
                        function,
                        reason: format!("gaussian noise with std_dev {std_dev}: {e}"),
                    }
                })?;
                Ok(dist.sample(rng))
            }
        }
    }

    /// Smallest value a sample can take.
    pub fn lower_bound(&self) -> f64 {
        match *self {
            NoiseModel::Uniform { low, .. } => low,
            NoiseModel::Gaussian { .. } => f64::NEG_INFINITY,
        }
    }
}
