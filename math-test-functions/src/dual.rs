//! Forward-mode dual numbers.
//!
//! A [`Dual`] carries a value and one tangent component. Evaluating any
//! catalog formula on duals seeded with a unit tangent yields the exact
//! directional derivative, which is how hand-written gradients are
//! cross-checked.

use crate::error::Result;
use crate::scalar::Scalar;
use ndarray::Array1;
use num_traits::{Float, Num, NumCast, One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::num::FpCategory;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Dual number `val + der·ε` with `ε² = 0`.
///
/// Comparisons only look at `val`, so branches inside formulas follow the
/// same path as the plain `f64` evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dual {
    /// Primal value
    pub val: f64,
    /// Tangent (derivative) component
    pub der: f64,
}

impl Dual {
    /// Dual with explicit value and tangent.
    #[inline]
    pub fn new(val: f64, der: f64) -> Self {
        Self { val, der }
    }

    /// Independent variable: tangent 1.
    #[inline]
    pub fn variable(val: f64) -> Self {
        Self { val, der: 1.0 }
    }

    /// Constant: tangent 0.
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, der: 0.0 }
    }

    #[inline]
    fn chain(self, val: f64, slope: f64) -> Self {
        // a zero tangent must stay zero even where the slope is infinite
        let der = if self.der == 0.0 { 0.0 } else { self.der * slope };
        Self { val, der }
    }
}

impl Scalar for Dual {
    const PRECISION_BITS: u32 = f64::MANTISSA_DIGITS;
}

/// Gradient of `f` at `x` by one forward pass per coordinate.
///
/// Errors raised by `f` (dimension checks, domain violations) are passed
/// through unchanged.
pub fn dual_gradient<F>(f: F, x: &Array1<f64>) -> Result<Array1<f64>>
where
    F: Fn(&Array1<Dual>) -> Result<Dual>,
{
    let n = x.len();
    if n == 0 {
        f(&Array1::from_vec(Vec::new()))?;
    }
    let mut grad = Array1::zeros(n);
    for j in 0..n {
        let seeded = Array1::from_shape_fn(n, |i| Dual::new(x[i], if i == j { 1.0 } else { 0.0 }));
        grad[j] = f(&seeded)?.der;
    }
    Ok(grad)
}

impl PartialEq for Dual {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl Neg for Dual {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.val, -self.der)
    }
}

impl Add for Dual {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.der + rhs.der)
    }
}

impl Sub for Dual {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.der - rhs.der)
    }
}

impl Mul for Dual {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.val * rhs.val, self.der * rhs.val + self.val * rhs.der)
    }
}

impl Div for Dual {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let val = self.val / rhs.val;
        Self::new(val, (self.der - val * rhs.der) / rhs.val)
    }
}

impl Rem for Dual {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        let q = (self.val / rhs.val).trunc();
        Self::new(self.val % rhs.val, self.der - q * rhs.der)
    }
}

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Dual {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Dual {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Dual {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Dual {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Dual> for Dual {
    fn sum<I: Iterator<Item = &'a Dual>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, &x| acc + x)
    }
}

impl Product for Dual {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }
    fn is_zero(&self) -> bool {
        self.val == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Num for Dual {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(s: &str, radix: u32) -> std::result::Result<Self, Self::FromStrRadixErr> {
        <f64 as Num>::from_str_radix(s, radix).map(Self::constant)
    }
}

impl ToPrimitive for Dual {
    fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.val.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.val)
    }
}

impl NumCast for Dual {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Self::constant)
    }
}

impl Float for Dual {
    fn nan() -> Self {
        Self::constant(f64::NAN)
    }
    fn infinity() -> Self {
        Self::constant(f64::INFINITY)
    }
    fn neg_infinity() -> Self {
        Self::constant(f64::NEG_INFINITY)
    }
    fn neg_zero() -> Self {
        Self::constant(-0.0)
    }
    fn min_value() -> Self {
        Self::constant(f64::MIN)
    }
    fn min_positive_value() -> Self {
        Self::constant(f64::MIN_POSITIVE)
    }
    fn epsilon() -> Self {
        Self::constant(f64::EPSILON)
    }
    fn max_value() -> Self {
        Self::constant(f64::MAX)
    }
    fn is_nan(self) -> bool {
        self.val.is_nan()
    }
    fn is_infinite(self) -> bool {
        self.val.is_infinite()
    }
    fn is_finite(self) -> bool {
        self.val.is_finite()
    }
    fn is_normal(self) -> bool {
        self.val.is_normal()
    }
    fn classify(self) -> FpCategory {
        self.val.classify()
    }
    fn floor(self) -> Self {
        Self::constant(self.val.floor())
    }
    fn ceil(self) -> Self {
        Self::constant(self.val.ceil())
    }
    fn round(self) -> Self {
        Self::constant(self.val.round())
    }
    fn trunc(self) -> Self {
        Self::constant(self.val.trunc())
    }
    fn fract(self) -> Self {
        Self::new(self.val.fract(), self.der)
    }
    fn abs(self) -> Self {
        if self.val > 0.0 {
            self
        } else if self.val < 0.0 {
            -self
        } else {
            // zero subgradient at the kink
            Self::constant(self.val.abs())
        }
    }
    fn signum(self) -> Self {
        Self::constant(self.val.signum())
    }
    fn is_sign_positive(self) -> bool {
        self.val.is_sign_positive()
    }
    fn is_sign_negative(self) -> bool {
        self.val.is_sign_negative()
    }
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
    fn recip(self) -> Self {
        let r = self.val.recip();
        self.chain(r, -r * r)
    }
    fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::one();
        }
        self.chain(self.val.powi(n), n as f64 * self.val.powi(n - 1))
    }
    fn powf(self, n: Self) -> Self {
        let val = self.val.powf(n.val);
        let base_part = if self.der == 0.0 {
            0.0
        } else {
            self.der * n.val * self.val.powf(n.val - 1.0)
        };
        let exp_part = if n.der == 0.0 || val == 0.0 {
            0.0
        } else {
            n.der * val * self.val.ln()
        };
        Self::new(val, base_part + exp_part)
    }
    fn sqrt(self) -> Self {
        let s = self.val.sqrt();
        self.chain(s, 0.5 / s)
    }
    fn exp(self) -> Self {
        let e = self.val.exp();
        self.chain(e, e)
    }
    fn exp2(self) -> Self {
        let e = self.val.exp2();
        self.chain(e, e * std::f64::consts::LN_2)
    }
    fn ln(self) -> Self {
        self.chain(self.val.ln(), self.val.recip())
    }
    fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }
    fn log2(self) -> Self {
        self.chain(self.val.log2(), (self.val * std::f64::consts::LN_2).recip())
    }
    fn log10(self) -> Self {
        self.chain(self.val.log10(), (self.val * std::f64::consts::LN_10).recip())
    }
    fn max(self, other: Self) -> Self {
        if self.val.is_nan() || other.val > self.val {
            other
        } else {
            self
        }
    }
    fn min(self, other: Self) -> Self {
        if self.val.is_nan() || other.val < self.val {
            other
        } else {
            self
        }
    }
    fn abs_sub(self, other: Self) -> Self {
        if self.val > other.val {
            self - other
        } else {
            Self::zero()
        }
    }
    fn cbrt(self) -> Self {
        let c = self.val.cbrt();
        self.chain(c, (3.0 * c * c).recip())
    }
    fn hypot(self, other: Self) -> Self {
        let h = self.val.hypot(other.val);
        if h == 0.0 {
            return Self::constant(h);
        }
        Self::new(h, (self.val * self.der + other.val * other.der) / h)
    }
    fn sin(self) -> Self {
        self.chain(self.val.sin(), self.val.cos())
    }
    fn cos(self) -> Self {
        self.chain(self.val.cos(), -self.val.sin())
    }
    fn tan(self) -> Self {
        let t = self.val.tan();
        self.chain(t, 1.0 + t * t)
    }
    fn asin(self) -> Self {
        self.chain(self.val.asin(), (1.0 - self.val * self.val).sqrt().recip())
    }
    fn acos(self) -> Self {
        self.chain(self.val.acos(), -(1.0 - self.val * self.val).sqrt().recip())
    }
    fn atan(self) -> Self {
        self.chain(self.val.atan(), (1.0 + self.val * self.val).recip())
    }
    fn atan2(self, other: Self) -> Self {
        let r2 = self.val * self.val + other.val * other.val;
        let der = if r2 == 0.0 {
            0.0
        } else {
            (other.val * self.der - self.val * other.der) / r2
        };
        Self::new(self.val.atan2(other.val), der)
    }
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
    fn exp_m1(self) -> Self {
        self.chain(self.val.exp_m1(), self.val.exp())
    }
    fn ln_1p(self) -> Self {
        self.chain(self.val.ln_1p(), (1.0 + self.val).recip())
    }
    fn sinh(self) -> Self {
        self.chain(self.val.sinh(), self.val.cosh())
    }
    fn cosh(self) -> Self {
        self.chain(self.val.cosh(), self.val.sinh())
    }
    fn tanh(self) -> Self {
        let t = self.val.tanh();
        self.chain(t, 1.0 - t * t)
    }
    fn asinh(self) -> Self {
        self.chain(self.val.asinh(), (self.val * self.val + 1.0).sqrt().recip())
    }
    fn acosh(self) -> Self {
        self.chain(self.val.acosh(), (self.val * self.val - 1.0).sqrt().recip())
    }
    fn atanh(self) -> Self {
        self.chain(self.val.atanh(), (1.0 - self.val * self.val).recip())
    }
    fn integer_decode(self) -> (u64, i16, i8) {
        Float::integer_decode(self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_product_rule() {
        let x = Dual::variable(3.0);
        let y = x * x;
        assert_eq!(y.val, 9.0);
        assert_eq!(y.der, 6.0);
    }

    #[test]
    fn test_transcendental_derivatives() {
        let x = Dual::variable(0.7);
        assert_relative_eq!(x.sin().der, 0.7_f64.cos(), epsilon = 1e-15);
        assert_relative_eq!(x.exp().der, 0.7_f64.exp(), epsilon = 1e-15);
        assert_relative_eq!(x.ln().der, 1.0 / 0.7, epsilon = 1e-15);
        assert_relative_eq!(x.sqrt().der, 0.5 / 0.7_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(x.powi(3).der, 3.0 * 0.49, epsilon = 1e-15);
        assert_relative_eq!(
            x.powf(Dual::constant(2.5)).der,
            2.5 * 0.7_f64.powf(1.5),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_variable_exponent() {
        // d/dx x^x = x^x (ln x + 1)
        let x = Dual::variable(1.5);
        let y = x.powf(x);
        assert_relative_eq!(y.der, 1.5_f64.powf(1.5) * (1.5_f64.ln() + 1.0), epsilon = 1e-12);

        // zero base with a variable exponent stays finite
        let zero = Dual::constant(0.0);
        assert_eq!(zero.powf(Dual::variable(2.0)).der, 0.0);
    }

    #[test]
    fn test_nonsmooth_operations() {
        assert_eq!(Dual::variable(0.0).abs().der, 0.0);
        assert_eq!(Dual::variable(-2.0).abs().der, -1.0);
        assert_eq!(Dual::variable(1.7).floor().der, 0.0);
        assert_eq!(Dual::variable(0.0).sqrt().der, f64::INFINITY);
        assert_eq!(Dual::constant(0.0).sqrt().der, 0.0);
    }

    #[test]
    fn test_comparisons_use_value_only() {
        assert!(Dual::new(1.0, 5.0) < Dual::new(2.0, -5.0));
        assert_eq!(Dual::new(1.0, 5.0), Dual::new(1.0, 0.0));
        assert_eq!(Dual::new(1.0, 2.0).max(Dual::new(3.0, 4.0)).der, 4.0);
    }

    #[test]
    fn test_dual_gradient() {
        let f = |x: &Array1<Dual>| -> Result<Dual> {
            Ok(x[0] * x[0] * x[1] + x[1].sin())
        };
        let g = dual_gradient(f, &Array1::from(vec![2.0, 0.5])).expect("gradient");
        assert_relative_eq!(g[0], 2.0, epsilon = 1e-15);
        assert_relative_eq!(g[1], 4.0 + 0.5_f64.cos(), epsilon = 1e-15);
    }
}
