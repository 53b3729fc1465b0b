#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

pub mod catalog;
pub mod dual;
pub mod error;
pub mod functions;
pub mod metadata;
pub mod noise;
pub mod record;
pub mod scalar;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use catalog::{FunctionCatalog, all_functions};
pub use dual::{Dual, dual_gradient};
pub use error::{Result, TestFunctionError};
pub use functions::*;
pub use metadata::{Dimension, FunctionMetadata, Property, ValueSpec, VectorSpec};
pub use noise::NoiseModel;
pub use record::{GradientFn, NoisyValueFn, Objective, TestFunction, ValueFn, make_test_function};
pub use scalar::Scalar;

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(meta: &FunctionMetadata, n: usize) -> Result<ndarray::Array2<f64>> {
    let lb = meta.lb(n)?;
    let ub = meta.ub(n)?;
    Ok(ndarray::Array2::from_shape_fn((2, n), |(i, j)| {
        if i == 0 { lb[j] } else { ub[j] }
    }))
}
