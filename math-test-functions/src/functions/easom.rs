//! Easom test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "easom";
const DIM: Dimension = Dimension::Fixed(2);

/// Easom function - 2D, a single narrow well on an almost flat plane
/// Global minimum: f(x) = -1 at x = (π, π)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: 0, the limit of the Gaussian envelope; gradient is zero.
pub fn easom<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::zero());
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(-x1.cos() * x2.cos() * envelope(x1, x2))
}

fn envelope<T: Scalar>(x1: T, x2: T) -> T {
    let pi = T::lit(PI);
    (-((x1 - pi).powi(2) + (x2 - pi).powi(2))).exp()
}

/// Gradient of [`easom`].
pub fn easom_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let (x1, x2) = (x[0], x[1]);
    let pi = T::lit(PI);
    let two = T::lit(2.0);
    let e = envelope(x1, x2);
    let (s1, c1) = (x1.sin(), x1.cos());
    let (s2, c2) = (x2.sin(), x2.cos());
    Ok(Array1::from(vec![
        c2 * e * (s1 + two * (x1 - pi) * c1),
        c1 * e * (s2 + two * (x2 - pi) * c2),
    ]))
}

/// Catalog record for [`easom`].
pub fn easom_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        easom,
        easom_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Needle-like well at (π, π) surrounded by a plateau at zero.",
            math: r"f(\mathbf{x}) = -\cos x_1 \cos x_2 \exp\left(-(x_1 - \pi)^2 - (x_2 - \pi)^2\right)",
            source: "Easom (1990), A survey of global optimization techniques",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[2.0, 2.0]),
            min_position: VectorSpec::Fixed(&[PI, PI]),
            min_value: ValueSpec::Fixed(-1.0),
            lb: VectorSpec::Fill(-100.0),
            ub: VectorSpec::Fill(100.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}
