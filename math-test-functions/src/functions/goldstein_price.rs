//! Goldstein-Price test function

use super::prelude::*;

const NAME: &str = "goldstein_price";
const DIM: Dimension = Dimension::Fixed(2);

/// Goldstein-Price function - 2D multimodal
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
///
/// Infinite input: +∞.
pub fn goldstein_price<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let f = Factors::new(x[0], x[1]);
    Ok(f.a * f.b)
}

/// The two bracketed factors and their building blocks.
struct Factors<T> {
    s: T,
    p: T,
    t: T,
    q: T,
    a: T,
    b: T,
}

impl<T: Scalar> Factors<T> {
    fn new(x1: T, x2: T) -> Self {
        let l = T::lit;
        let s = x1 + x2 + T::one();
        let p = l(19.0) - l(14.0) * x1 + l(3.0) * x1 * x1 - l(14.0) * x2
            + l(6.0) * x1 * x2
            + l(3.0) * x2 * x2;
        let t = l(2.0) * x1 - l(3.0) * x2;
        let q = l(18.0) - l(32.0) * x1 + l(12.0) * x1 * x1 + l(48.0) * x2
            - l(36.0) * x1 * x2
            + l(27.0) * x2 * x2;
        Factors {
            s,
            p,
            t,
            q,
            a: T::one() + s * s * p,
            b: l(30.0) + t * t * q,
        }
    }
}

/// Gradient of [`goldstein_price`].
pub fn goldstein_price_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let l = T::lit;
    let (x1, x2) = (x[0], x[1]);
    let Factors { s, p, t, q, a, b } = Factors::new(x1, x2);
    // dp/dx1 == dp/dx2
    let dp = l(-14.0) + l(6.0) * x1 + l(6.0) * x2;
    let da = l(2.0) * s * p + s * s * dp;
    let db1 = l(4.0) * t * q + t * t * (l(-32.0) + l(24.0) * x1 - l(36.0) * x2);
    let db2 = l(-6.0) * t * q + t * t * (l(48.0) - l(36.0) * x1 + l(54.0) * x2);
    Ok(Array1::from(vec![da * b + a * db1, da * b + a * db2]))
}

/// Catalog record for [`goldstein_price`].
pub fn goldstein_price_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        goldstein_price,
        goldstein_price_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Product of two quartic factors with several local minima and a large dynamic range.",
            math: r"f(\mathbf{x}) = [1 + (x_1 + x_2 + 1)^2(19 - 14x_1 + 3x_1^2 - 14x_2 + 6x_1x_2 + 3x_2^2)] \times [30 + (2x_1 - 3x_2)^2(18 - 32x_1 + 12x_1^2 + 48x_2 - 36x_1x_2 + 27x_2^2)]",
            source: "Goldstein & Price (1971), On descent from local minima",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 1.0]),
            min_position: VectorSpec::Fixed(&[0.0, -1.0]),
            min_value: ValueSpec::Fixed(3.0),
            lb: VectorSpec::Fill(-2.0),
            ub: VectorSpec::Fill(2.0),
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
    fn test_goldstein_price_known_properties() {
        assert_minimum(&goldstein_price_function(), 2);
        // a = 1 + 1 * 19, b = 30 + 0
        assert_eq!(goldstein_price(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 600.0);
        let g = goldstein_price_gradient(&Array1::<f64>::from(vec![0.0, -1.0])).unwrap();
        assert!(g.iter().all(|gi| gi.abs() < 1e-9));
    }

    #[test]
    fn test_goldstein_price_gradient() {
        assert_gradient_matches(goldstein_price, goldstein_price_gradient, &[0.3, -0.8]);
        assert_gradient_matches(goldstein_price, goldstein_price_gradient, &[-1.5, 1.2]);
    }
}
