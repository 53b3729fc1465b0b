//! Branin test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "branin";
const DIM: Dimension = Dimension::Fixed(2);

/// Branin function - 2D multimodal, three global minima
/// Global minimum: f(x) = 0.397887 at (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
///
/// Infinite input: +∞.
pub fn branin<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let x1 = x[0];
    let (s, t) = (T::lit(10.0), T::lit(1.0 / (8.0 * PI)));
    let r = residual(x1, x[1]);
    Ok(r * r + s * (T::one() - t) * x1.cos() + s)
}

fn residual<T: Scalar>(x1: T, x2: T) -> T {
    let b = T::lit(5.1 / (4.0 * PI * PI));
    let c = T::lit(5.0 / PI);
    x2 - b * x1 * x1 + c * x1 - T::lit(6.0)
}

/// Gradient of [`branin`].
pub fn branin_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let b = T::lit(5.1 / (4.0 * PI * PI));
    let c = T::lit(5.0 / PI);
    let s_one_minus_t = T::lit(10.0 * (1.0 - 1.0 / (8.0 * PI)));
    let r = residual(x1, x2);
    let two = T::lit(2.0);
    Ok(Array1::from(vec![
        two * r * (c - two * b * x1) - s_one_minus_t * x1.sin(),
        two * r,
    ]))
}

/// Catalog record for [`branin`].
pub fn branin_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        branin,
        branin_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Three global minima on a rescaled cosine landscape.",
            math: r"f(\mathbf{x}) = \left(x_2 - \frac{5.1}{4\pi^2}x_1^2 + \frac{5}{\pi}x_1 - 6\right)^2 + 10\left(1 - \frac{1}{8\pi}\right)\cos x_1 + 10",
            source: "Branin (1972), Widely convergent method for finding multiple solutions of simultaneous nonlinear equations",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.0, 5.0]),
            min_position: VectorSpec::Fixed(&[PI, 2.275]),
            min_value: ValueSpec::Fixed(0.39788735772973816),
            lb: VectorSpec::Fixed(&[-5.0, 0.0]),
            ub: VectorSpec::Fixed(&[10.0, 15.0]),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_branin_known_properties() {
        assert_minimum(&branin_function(), 2);
        let expected = 0.39788735772973816;
        for m in [[-PI, 12.275], [3.0 * PI, 2.475]] {
            let v = branin(&Array1::<f64>::from(m.to_vec())).unwrap();
            assert!((v - expected).abs() < 1e-12, "{v}");
        }
    }

    #[test]
    fn test_branin_gradient() {
        assert_gradient_matches(branin, branin_gradient, &[0.0, 5.0]);
        assert_gradient_matches(branin, branin_gradient, &[7.3, 11.2]);
    }
}
