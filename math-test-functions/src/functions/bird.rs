//! Bird test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "bird";
const DIM: Dimension = Dimension::Fixed(2);

/// Bird function - 2D multimodal, two global minima
/// Global minimum: f(x) = -106.76453674926475 at (4.70104313, 3.15293850)
/// and (-1.58214220, -3.13024680)
/// Bounds: x_i in [-2π, 2π]
///
/// Infinite input: +∞.
pub fn bird<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let one = T::one();
    Ok(x1.sin() * (one - x2.cos()).powi(2).exp()
        + x2.cos() * (one - x1.sin()).powi(2).exp()
        + (x1 - x2).powi(2))
}

/// Gradient of [`bird`].
pub fn bird_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let one = T::one();
    let two = T::lit(2.0);
    let (s1, c1) = (x1.sin(), x1.cos());
    let (s2, c2) = (x2.sin(), x2.cos());
    let a = (one - c2).powi(2).exp();
    let b = (one - s1).powi(2).exp();
    Ok(Array1::from(vec![
        c1 * a - two * c2 * b * (one - s1) * c1 + two * (x1 - x2),
        two * s1 * a * (one - c2) * s2 - s2 * b - two * (x1 - x2),
    ]))
}

/// Catalog record for [`bird`].
pub fn bird_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        bird,
        bird_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Exponentially modulated trigonometric bumps with two deep global minima.",
            math: r"f(\mathbf{x}) = \sin x_1 e^{(1 - \cos x_2)^2} + \cos x_2 e^{(1 - \sin x_1)^2} + (x_1 - x_2)^2",
            source: "Mishra (2006), Some new test functions for global optimization and performance of repulsive particle swarm method",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, -1.0]),
            min_position: VectorSpec::Fixed(&[4.70104313028291, 3.152938497091216]),
            min_value: ValueSpec::Fixed(-106.76453674926475),
            lb: VectorSpec::Fill(-2.0 * PI),
            ub: VectorSpec::Fill(2.0 * PI),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}
