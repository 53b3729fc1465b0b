//! Descriptive metadata attached to every test function.
//!
//! Points and bounds are either constants (fixed-dimension functions) or
//! functions of the requested dimension `n` (scalable functions). Every
//! accessor validates `n` the same way the value function validates its
//! input, and returns a freshly built vector.

use crate::error::{Result, TestFunctionError};
use ndarray::Array1;
use std::fmt;
use std::str::FromStr;

/// Admissible input dimensions of a test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Only this dimension is accepted.
    Fixed(usize),
    /// Any `n = min + k * step` with `k >= 0`; `default` is used when the
    /// caller does not pick a dimension.
    Scalable {
        /// Smallest admissible dimension
        min: usize,
        /// Increment between admissible dimensions
        step: usize,
        /// Dimension used when none is requested
        default: usize,
    },
}

impl Dimension {
    /// Scalable from `min` upwards in steps of one.
    pub const fn scalable(min: usize, default: usize) -> Self {
        Dimension::Scalable {
            min,
            step: 1,
            default,
        }
    }

    /// Validate `n` against this constraint on behalf of `function`.
    pub fn check(&self, function: &'static str, n: usize) -> Result<()> {
        if n == 0 {
            return Err(TestFunctionError::EmptyInput { function });
        }
        match *self {
            Dimension::Fixed(expected) if n != expected => {
                Err(TestFunctionError::DimensionMismatch {
                    function,
                    expected,
                    got: n,
                })
            }
            Dimension::Scalable { min, .. } if n < min => {
                Err(TestFunctionError::DimensionTooSmall {
                    function,
                    min,
                    got: n,
                })
            }
            Dimension::Scalable { min, step, .. } if step > 1 && (n - min) % step != 0 => {
                Err(TestFunctionError::DimensionStep {
                    function,
                    min,
                    step,
                    got: n,
                })
            }
            _ => Ok(()),
        }
    }

    /// Dimension to use when none is specified.
    pub fn default_n(&self) -> usize {
        match *self {
            Dimension::Fixed(n) => n,
            Dimension::Scalable { default, .. } => default,
        }
    }

    /// Whether more than one dimension is accepted.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Dimension::Scalable { .. })
    }
}

/// Controlled vocabulary of mathematical properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// Sum of independent single-variable terms
    Separable,
    /// Variables interact
    NonSeparable,
    /// More than one local minimum
    Multimodal,
    /// Exactly one local minimum
    Unimodal,
    /// Convex on its whole domain
    Convex,
    /// Not convex
    NonConvex,
    /// Differentiable everywhere on its domain
    Differentiable,
    /// Differentiable almost everywhere (kinks, steps)
    PartiallyDifferentiable,
    /// Conventional search domain is a finite box
    Bounded,
    /// Continuous on its domain
    Continuous,
    /// Defined for arbitrary dimension
    Scalable,
    /// Evaluation carries a stochastic term
    HasNoise,
    /// Literature disagrees on the global minimum
    Controversial,
}

impl Property {
    /// Every tag, in declaration order.
    pub const ALL: [Property; 13] = [
        Property::Separable,
        Property::NonSeparable,
        Property::Multimodal,
        Property::Unimodal,
        Property::Convex,
        Property::NonConvex,
        Property::Differentiable,
        Property::PartiallyDifferentiable,
        Property::Bounded,
        Property::Continuous,
        Property::Scalable,
        Property::HasNoise,
        Property::Controversial,
    ];

    /// Literal tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Separable => "separable",
            Property::NonSeparable => "non-separable",
            Property::Multimodal => "multimodal",
            Property::Unimodal => "unimodal",
            Property::Convex => "convex",
            Property::NonConvex => "non-convex",
            Property::Differentiable => "differentiable",
            Property::PartiallyDifferentiable => "partially differentiable",
            Property::Bounded => "bounded",
            Property::Continuous => "continuous",
            Property::Scalable => "scalable",
            Property::HasNoise => "has_noise",
            Property::Controversial => "controversial",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown property tag: {s}"))
    }
}

/// A point or bound: constant, constant fill, or computed from `n`.
#[derive(Debug, Clone, Copy)]
pub enum VectorSpec {
    /// Fixed coordinates; only valid for fixed-dimension functions.
    Fixed(&'static [f64]),
    /// Every coordinate equal to this value.
    Fill(f64),
    /// Built from the dimension.
    Computed(fn(usize) -> Array1<f64>),
}

impl VectorSpec {
    /// Materialize for dimension `n`.
    pub fn eval(&self, n: usize) -> Array1<f64> {
        match *self {
            VectorSpec::Fixed(v) => Array1::from(v.to_vec()),
            VectorSpec::Fill(v) => Array1::from_elem(n, v),
            VectorSpec::Computed(f) => f(n),
        }
    }
}

/// A scalar that is either constant or depends on `n`.
#[derive(Debug, Clone, Copy)]
pub enum ValueSpec {
    /// Independent of the dimension.
    Fixed(f64),
    /// Computed from the dimension.
    Computed(fn(usize) -> f64),
}

impl ValueSpec {
    /// Materialize for dimension `n`.
    pub fn eval(&self, n: usize) -> f64 {
        match *self {
            ValueSpec::Fixed(v) => v,
            ValueSpec::Computed(f) => f(n),
        }
    }
}

/// Metadata for a test function: dimension, ground truth, bounds, tags.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Registered name, also the catalog key
    pub name: &'static str,
    /// Prose description
    pub description: &'static str,
    /// LaTeX formula
    pub math: &'static str,
    /// Literature reference
    pub source: &'static str,
    /// Admissible dimensions
    pub dimension: Dimension,
    /// Property tags
    pub properties: &'static [Property],
    /// Canonical evaluation point away from the minimum
    pub start: VectorSpec,
    /// One global minimizer
    pub min_position: VectorSpec,
    /// Global minimum value
    pub min_value: ValueSpec,
    /// Lower bounds of the conventional search domain
    pub lb: VectorSpec,
    /// Upper bounds of the conventional search domain
    pub ub: VectorSpec,
    /// Absolute tolerance on `min_value`, scaled by `max(1, |min_value|)`
    pub min_value_tolerance: f64,
    /// Listed in Molga & Smutnicki (2005)
    pub in_molga_smutnicki_2005: bool,
}

impl FunctionMetadata {
    /// Canonical start point for dimension `n`.
    pub fn start(&self, n: usize) -> Result<Array1<f64>> {
        self.dimension.check(self.name, n)?;
        Ok(self.start.eval(n))
    }

    /// Global minimizer for dimension `n`.
    pub fn min_position(&self, n: usize) -> Result<Array1<f64>> {
        self.dimension.check(self.name, n)?;
        Ok(self.min_position.eval(n))
    }

    /// Global minimum value for dimension `n`.
    pub fn min_value(&self, n: usize) -> Result<f64> {
        self.dimension.check(self.name, n)?;
        Ok(self.min_value.eval(n))
    }

    /// Lower bounds for dimension `n`.
    pub fn lb(&self, n: usize) -> Result<Array1<f64>> {
        self.dimension.check(self.name, n)?;
        Ok(self.lb.eval(n))
    }

    /// Upper bounds for dimension `n`.
    pub fn ub(&self, n: usize) -> Result<Array1<f64>> {
        self.dimension.check(self.name, n)?;
        Ok(self.ub.eval(n))
    }

    /// Bounds as `(lower, upper)` pairs, the shape optimizers take.
    pub fn bounds(&self, n: usize) -> Result<Vec<(f64, f64)>> {
        let lb = self.lb(n)?;
        let ub = self.ub(n)?;
        Ok(lb.iter().copied().zip(ub.iter().copied()).collect())
    }

    /// Dimension to use when none is specified.
    pub fn default_n(&self) -> usize {
        self.dimension.default_n()
    }

    /// Whether the function carries `property`.
    pub fn has_property(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }

    /// Check that the tags agree with each other and with the dimension.
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        const EXCLUSIVE: [(Property, Property); 4] = [
            (Property::Separable, Property::NonSeparable),
            (Property::Unimodal, Property::Multimodal),
            (Property::Convex, Property::NonConvex),
            (Property::Differentiable, Property::PartiallyDifferentiable),
        ];
        for (a, b) in EXCLUSIVE {
            if self.has_property(a) && self.has_property(b) {
                return Err(format!("{}: tagged both '{}' and '{}'", self.name, a, b));
            }
        }
        if self.has_property(Property::Scalable) != self.dimension.is_scalable() {
            return Err(format!(
                "{}: 'scalable' tag does not match dimension {:?}",
                self.name, self.dimension
            ));
        }
        if self.has_property(Property::Convex) && self.has_property(Property::Multimodal) {
            return Err(format!("{}: convex functions are unimodal", self.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_check() {
        let fixed = Dimension::Fixed(2);
        assert!(fixed.check("booth", 2).is_ok());
        assert!(matches!(
            fixed.check("booth", 3),
            Err(TestFunctionError::DimensionMismatch { expected: 2, got: 3, .. })
        ));
        assert!(matches!(
            fixed.check("booth", 0),
            Err(TestFunctionError::EmptyInput { .. })
        ));

        let scalable = Dimension::scalable(2, 10);
        assert!(scalable.check("rosenbrock", 2).is_ok());
        assert!(scalable.check("rosenbrock", 100).is_ok());
        assert!(matches!(
            scalable.check("rosenbrock", 1),
            Err(TestFunctionError::DimensionTooSmall { min: 2, got: 1, .. })
        ));

        let stepped = Dimension::Scalable {
            min: 4,
            step: 4,
            default: 4,
        };
        assert!(stepped.check("powell", 8).is_ok());
        assert!(stepped.check("powell", 6).is_err());
    }

    #[test]
    fn test_property_tags_roundtrip() {
        for p in Property::ALL {
            assert_eq!(p.as_str().parse::<Property>(), Ok(p));
        }
        assert_eq!(
            Property::PartiallyDifferentiable.to_string(),
            "partially differentiable"
        );
        assert!("smooth".parse::<Property>().is_err());
    }

    #[test]
    fn test_vector_spec_returns_fresh_vectors() {
        let spec = VectorSpec::Fill(1.5);
        let mut a = spec.eval(3);
        a[0] = 99.0;
        assert_eq!(spec.eval(3), Array1::from_elem(3, 1.5));

        let computed = VectorSpec::Computed(|n| Array1::from_shape_fn(n, |i| i as f64));
        assert_eq!(computed.eval(3), Array1::from(vec![0.0, 1.0, 2.0]));
    }
}
