//! Salomon test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "salomon";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Salomon function - N-dimensional, multimodal, radially symmetric
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// The origin is a cone tip; the gradient there is the zero subgradient.
/// Infinite input: +∞.
pub fn salomon<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let r = radius(x);
    Ok(T::one() - (T::lit(2.0 * PI) * r).cos() + T::lit(0.1) * r)
}

fn radius<T: Scalar>(x: &Array1<T>) -> T {
    x.iter().map(|&xi| xi * xi).sum::<T>().sqrt()
}

/// Gradient of [`salomon`].
pub fn salomon_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let r = radius(x);
    if r == T::zero() {
        return Ok(Array1::zeros(n));
    }
    let dr = (T::lit(2.0 * PI) * (T::lit(2.0 * PI) * r).sin() + T::lit(0.1)) / r;
    Ok(x.mapv(|xi| dr * xi))
}

/// Catalog record for [`salomon`].
pub fn salomon_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        salomon,
        salomon_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Concentric ripples on a slowly rising cone.",
            math: r"f(\mathbf{x}) = 1 - \cos\left(2\pi\|\mathbf{x}\|\right) + 0.1\|\mathbf{x}\|",
            source: "Salomon (1996), Re-evaluating genetic algorithm performance under coordinate rotation of benchmark functions",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-100.0),
            ub: VectorSpec::Fill(100.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
