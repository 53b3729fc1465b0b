//! Freudenstein-Roth test function

use super::prelude::*;

const NAME: &str = "freudenstein_roth";
const DIM: Dimension = Dimension::Fixed(2);

/// Freudenstein-Roth function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (5, 4)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn freudenstein_roth<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (a, b) = residuals(x[0], x[1]);
    Ok(a * a + b * b)
}

fn residuals<T: Scalar>(x1: T, x2: T) -> (T, T) {
    let l = T::lit;
    (
        x1 - l(13.0) + ((l(5.0) - x2) * x2 - l(2.0)) * x2,
        x1 - l(29.0) + ((x2 + T::one()) * x2 - l(14.0)) * x2,
    )
}

/// Gradient of [`freudenstein_roth`].
pub fn freudenstein_roth_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let l = T::lit;
    let x2 = x[1];
    let (a, b) = residuals(x[0], x2);
    let da = l(10.0) * x2 - l(3.0) * x2 * x2 - l(2.0);
    let db = l(3.0) * x2 * x2 + l(2.0) * x2 - l(14.0);
    Ok(Array1::from(vec![
        l(2.0) * (a + b),
        l(2.0) * (a * da + b * db),
    ]))
}

/// Catalog record for [`freudenstein_roth`].
pub fn freudenstein_roth_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        freudenstein_roth,
        freudenstein_roth_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Least-squares residual pair with a deceptive local minimum near (11.41, -0.90).",
            math: r"f(\mathbf{x}) = (x_1 - 13 + ((5 - x_2)x_2 - 2)x_2)^2 + (x_1 - 29 + ((x_2 + 1)x_2 - 14)x_2)^2",
            source: "Freudenstein & Roth (1963), Numerical solution of systems of nonlinear equations",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.5, -2.0]),
            min_position: VectorSpec::Fixed(&[5.0, 4.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
