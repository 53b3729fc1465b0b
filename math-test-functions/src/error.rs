//! Error types for test function evaluation.
//!
//! Every error is raised before any arithmetic happens and names the
//! function that rejected its input, so a failing test loop points straight
//! at the offending record.

use thiserror::Error;

/// Errors raised by value functions, gradients and metadata closures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestFunctionError {
    /// The input vector (or requested dimension) is empty.
    #[error("{function}: input vector must not be empty")]
    EmptyInput {
        /// Name of the rejecting function
        function: &'static str,
    },

    /// A fixed-dimension function received a vector of another length.
    #[error("{function}: requires exactly {expected} dimensions, got {got}")]
    DimensionMismatch {
        /// Name of the rejecting function
        function: &'static str,
        /// The only admissible dimension
        expected: usize,
        /// Dimension actually provided
        got: usize,
    },

    /// A scalable function received fewer dimensions than it supports.
    #[error("{function}: requires at least {min} dimensions, got {got}")]
    DimensionTooSmall {
        /// Name of the rejecting function
        function: &'static str,
        /// Smallest admissible dimension
        min: usize,
        /// Dimension actually provided
        got: usize,
    },

    /// A scalable function only accepts dimensions `min + k * step`.
    #[error("{function}: dimension must be {min} + a multiple of {step}, got {got}")]
    DimensionStep {
        /// Name of the rejecting function
        function: &'static str,
        /// Smallest admissible dimension
        min: usize,
        /// Increment between admissible dimensions
        step: usize,
        /// Dimension actually provided
        got: usize,
    },

    /// The input lies outside the mathematical domain of the formula.
    #[error("{function}: domain violation: {reason}")]
    DomainViolation {
        /// Name of the rejecting function
        function: &'static str,
        /// What constraint was broken
        reason: String,
    },

    /// The gradient does not exist at the requested point and the function
    /// documents an error rather than a subgradient.
    #[error("{function}: not differentiable: {reason}")]
    NotDifferentiable {
        /// Name of the rejecting function
        function: &'static str,
        /// Where and why the derivative is undefined
        reason: String,
    },

    /// A configuration object (quadratic parameters, noise model) is invalid.
    #[error("{function}: invalid parameter: {reason}")]
    InvalidParameter {
        /// Name of the function the parameters belong to
        function: &'static str,
        /// What is wrong with the parameter
        reason: String,
    },
}

/// A specialized `Result` type for test function operations.
pub type Result<T> = std::result::Result<T, TestFunctionError>;

impl TestFunctionError {
    /// Name of the function that raised the error.
    pub fn function(&self) -> &'static str {
        match self {
            TestFunctionError::EmptyInput { function }
            | TestFunctionError::DimensionMismatch { function, .. }
            | TestFunctionError::DimensionTooSmall { function, .. }
            | TestFunctionError::DimensionStep { function, .. }
            | TestFunctionError::DomainViolation { function, .. }
            | TestFunctionError::NotDifferentiable { function, .. }
            | TestFunctionError::InvalidParameter { function, .. } => function,
        }
    }

    /// Returns `true` if this is a dimension-related error.
    ///
    /// This includes `EmptyInput`, `DimensionMismatch`, `DimensionTooSmall`
    /// and `DimensionStep`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            TestFunctionError::EmptyInput { .. }
                | TestFunctionError::DimensionMismatch { .. }
                | TestFunctionError::DimensionTooSmall { .. }
                | TestFunctionError::DimensionStep { .. }
        )
    }

    /// Returns `true` if the input was well-shaped but outside the domain,
    /// or sits on a point where the derivative is undefined.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            TestFunctionError::DomainViolation { .. } | TestFunctionError::NotDifferentiable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TestFunctionError::DimensionMismatch {
            function: "booth",
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "booth: requires exactly 2 dimensions, got 3");

        let err = TestFunctionError::DimensionStep {
            function: "powell",
            min: 4,
            step: 4,
            got: 6,
        };
        assert_eq!(
            err.to_string(),
            "powell: dimension must be 4 + a multiple of 4, got 6"
        );
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = TestFunctionError::EmptyInput { function: "sphere" };
        let domain_err = TestFunctionError::DomainViolation {
            function: "alpine_n2",
            reason: "x[0] = -1 is negative".to_string(),
        };

        assert!(dim_err.is_dimension_error());
        assert!(!domain_err.is_dimension_error());
        assert!(domain_err.is_domain_error());
        assert_eq!(domain_err.function(), "alpine_n2");
    }
}
