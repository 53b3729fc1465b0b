//! Dixon-Price test function

use super::prelude::*;

const NAME: &str = "dixon_price";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Dixon-Price function - N-dimensional, unimodal
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i), i = 1..n
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn dixon_price<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let mut sum = (x[0] - T::one()).powi(2);
    for i in 1..n {
        let r = T::lit(2.0) * x[i] * x[i] - x[i - 1];
        sum += T::from_usize(i + 1) * r * r;
    }
    Ok(sum)
}

/// Gradient of [`dixon_price`].
pub fn dixon_price_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let mut grad = Array1::zeros(n);
    grad[0] = T::lit(2.0) * (x[0] - T::one());
    for i in 1..n {
        let w = T::from_usize(i + 1);
        let r = T::lit(2.0) * x[i] * x[i] - x[i - 1];
        grad[i] += T::lit(8.0) * w * x[i] * r;
        grad[i - 1] -= T::lit(2.0) * w * r;
    }
    Ok(grad)
}

fn minimizer(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |k| {
        let p = 2f64.powi(k as i32 + 1);
        2f64.powf(-(p - 2.0) / p)
    })
}

/// Catalog record for [`dixon_price`].
pub fn dixon_price_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        dixon_price,
        dixon_price_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Chained quadratic valley whose minimizer follows a power-of-two recurrence.",
            math: r"f(\mathbf{x}) = (x_1 - 1)^2 + \sum_{i=2}^{n} i (2x_i^2 - x_{i-1})^2",
            source: "Dixon & Price (1989), Truncated Newton method for sparse unconstrained optimization using automatic differentiation",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(2.0),
            min_position: VectorSpec::Computed(minimizer),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}
