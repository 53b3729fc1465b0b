//! Bohachevsky N.1 test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "bohachevsky1";
const DIM: Dimension = Dimension::Fixed(2);

/// Bohachevsky N.1 function - 2D multimodal, separable
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn bohachevsky1<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(x1 * x1 + T::lit(2.0) * x2 * x2
        - T::lit(0.3) * (T::lit(3.0 * PI) * x1).cos()
        - T::lit(0.4) * (T::lit(4.0 * PI) * x2).cos()
        + T::lit(0.7))
}

/// Gradient of [`bohachevsky1`].
pub fn bohachevsky1_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        T::lit(2.0) * x1 + T::lit(0.9 * PI) * (T::lit(3.0 * PI) * x1).sin(),
        T::lit(4.0) * x2 + T::lit(1.6 * PI) * (T::lit(4.0 * PI) * x2).sin(),
    ]))
}

/// Catalog record for [`bohachevsky1`].
pub fn bohachevsky1_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        bohachevsky1,
        bohachevsky1_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Bowl with cosine ripples in both coordinates.",
            math: r"f(\mathbf{x}) = x_1^2 + 2x_2^2 - 0.3\cos(3\pi x_1) - 0.4\cos(4\pi x_2) + 0.7",
            source: "Bohachevsky, Johnson & Stein (1986), Generalized simulated annealing for function optimization",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[10.0, 10.0]),
            min_position: VectorSpec::Fixed(&[0.0, 0.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-100.0),
            ub: VectorSpec::Fill(100.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
