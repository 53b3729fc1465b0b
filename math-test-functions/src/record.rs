//! The test function record and the [`Objective`] seam.

use crate::error::Result;
use crate::metadata::{Dimension, FunctionMetadata, Property};
use crate::scalar::Scalar;
use ndarray::Array1;
use rand::RngCore;

/// Value function signature.
pub type ValueFn<T> = fn(&Array1<T>) -> Result<T>;

/// Gradient function signature.
pub type GradientFn<T> = fn(&Array1<T>) -> Result<Array1<T>>;

/// Noisy value function signature; randomness comes from the caller.
pub type NoisyValueFn<T> = fn(&Array1<T>, &mut dyn RngCore) -> Result<T>;

/// Anything with a value, a gradient and ground truth to test against.
///
/// Implemented by the static catalog records and by objectives that carry
/// caller-chosen parameters such as [`Quadratic`](crate::Quadratic).
pub trait Objective<T: Scalar> {
    /// Registered name.
    fn name(&self) -> &'static str;

    /// Admissible dimensions.
    fn dimension(&self) -> Dimension;

    /// Property tags.
    fn properties(&self) -> &[Property];

    /// Deterministic objective value.
    fn value(&self, x: &Array1<T>) -> Result<T>;

    /// Analytic gradient of [`Objective::value`].
    fn gradient(&self, x: &Array1<T>) -> Result<Array1<T>>;

    /// Canonical start point.
    fn start(&self, n: usize) -> Result<Array1<f64>>;

    /// One global minimizer.
    fn min_position(&self, n: usize) -> Result<Array1<f64>>;

    /// Global minimum value.
    fn min_value(&self, n: usize) -> Result<f64>;

    /// Lower bounds.
    fn lb(&self, n: usize) -> Result<Array1<f64>>;

    /// Upper bounds.
    fn ub(&self, n: usize) -> Result<Array1<f64>>;
}

/// One catalog entry: value, gradient, metadata and an optional noisy
/// evaluator.
#[derive(Debug, Clone)]
pub struct TestFunction<T: Scalar> {
    value_fn: ValueFn<T>,
    gradient_fn: GradientFn<T>,
    noisy_fn: Option<NoisyValueFn<T>>,
    /// Descriptive metadata
    pub meta: FunctionMetadata,
}

/// Bundle a value function, its gradient and metadata into a record.
pub fn make_test_function<T: Scalar>(
    value_fn: ValueFn<T>,
    gradient_fn: GradientFn<T>,
    meta: FunctionMetadata,
) -> TestFunction<T> {
    TestFunction {
        value_fn,
        gradient_fn,
        noisy_fn: None,
        meta,
    }
}

impl<T: Scalar> TestFunction<T> {
    /// Attach the stochastic evaluator of a noisy function.
    pub fn with_noise(mut self, noisy_fn: NoisyValueFn<T>) -> Self {
        self.noisy_fn = Some(noisy_fn);
        self
    }

    /// Registered name.
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    /// Deterministic value. For noisy functions the stochastic term is
    /// suppressed, which is what gradients and dual-number passes see.
    pub fn value(&self, x: &Array1<T>) -> Result<T> {
        (self.value_fn)(x)
    }

    /// Analytic gradient.
    pub fn gradient(&self, x: &Array1<T>) -> Result<Array1<T>> {
        (self.gradient_fn)(x)
    }

    /// Value including the stochastic term drawn from `rng`. Identical to
    /// [`TestFunction::value`] for deterministic functions.
    pub fn value_noisy(&self, x: &Array1<T>, rng: &mut dyn RngCore) -> Result<T> {
        match self.noisy_fn {
            Some(noisy) => noisy(x, rng),
            None => self.value(x),
        }
    }

    /// Whether a noisy evaluator is attached.
    pub fn is_noisy(&self) -> bool {
        self.noisy_fn.is_some()
    }

    /// The value function pointer, for callers that need a plain `fn`.
    pub fn value_fn(&self) -> ValueFn<T> {
        self.value_fn
    }

    /// Metadata consistency plus agreement between the `has_noise` tag and
    /// the attached noisy evaluator.
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        self.meta.check_consistency()?;
        if self.meta.has_property(Property::HasNoise) != self.is_noisy() {
            return Err(format!(
                "{}: 'has_noise' tag does not match the noisy evaluator",
                self.name()
            ));
        }
        Ok(())
    }
}

impl<T: Scalar> Objective<T> for TestFunction<T> {
    fn name(&self) -> &'static str {
        self.meta.name
    }

    fn dimension(&self) -> Dimension {
        self.meta.dimension
    }

    fn properties(&self) -> &[Property] {
        self.meta.properties
    }

    fn value(&self, x: &Array1<T>) -> Result<T> {
        TestFunction::value(self, x)
    }

    fn gradient(&self, x: &Array1<T>) -> Result<Array1<T>> {
        TestFunction::gradient(self, x)
    }

    fn start(&self, n: usize) -> Result<Array1<f64>> {
        self.meta.start(n)
    }

    fn min_position(&self, n: usize) -> Result<Array1<f64>> {
        self.meta.min_position(n)
    }

    fn min_value(&self, n: usize) -> Result<f64> {
        self.meta.min_value(n)
    }

    fn lb(&self, n: usize) -> Result<Array1<f64>> {
        self.meta.lb(n)
    }

    fn ub(&self, n: usize) -> Result<Array1<f64>> {
        self.meta.ub(n)
    }
}
