//! Scalar abstraction shared by every formula in the catalog.
//!
//! Formulas are written once against [`Scalar`] and run unchanged on `f32`,
//! `f64` and forward-mode [`Dual`](crate::Dual) numbers. The only
//! kind-specific step is [`Scalar::configure_precision`], which dimension
//! validation calls before any arithmetic.

use num_traits::{Float, NumAssign, NumCast};
use std::fmt::Debug;
use std::iter::{Product, Sum};

/// Numeric type a test function can be evaluated on.
pub trait Scalar:
    Float + NumAssign + Sum + Product + Debug + Send + Sync + 'static
{
    /// Mantissa width in bits used for evaluation.
    const PRECISION_BITS: u32;

    /// Set up the working precision before a computation.
    ///
    /// Fixed-width kinds need nothing; an arbitrary-precision kind would pin
    /// its precision to `PRECISION_BITS` here.
    fn configure_precision() {}

    /// Convert a literal constant into this scalar kind.
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Convert an index or count into this scalar kind.
    fn from_usize(i: usize) -> Self {
        Self::lit(i as f64)
    }

    /// Primal value as `f64`, dropping any derivative part.
    fn value_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f64 {
    const PRECISION_BITS: u32 = f64::MANTISSA_DIGITS;
}

impl Scalar for f32 {
    const PRECISION_BITS: u32 = f32::MANTISSA_DIGITS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_roundtrips_constants() {
        assert_eq!(f64::lit(2.5), 2.5);
        assert_eq!(f32::lit(0.5), 0.5_f32);
        assert_eq!(f64::from_usize(7), 7.0);
        assert_eq!(f64::PRECISION_BITS, 53);
        assert_eq!(f32::PRECISION_BITS, 24);
    }
}
