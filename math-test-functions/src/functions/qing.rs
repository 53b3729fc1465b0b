//! Qing test function

use super::prelude::*;

const NAME: &str = "qing";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Qing function - N-dimensional, multimodal, 2^n global minima
/// Global minimum: f(x) = 0 at x_i = ±sqrt(i)
/// Bounds: x_i in [-500, 500]
///
/// Infinite input: +∞.
pub fn qing<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| (xi * xi - T::from_usize(i + 1)).powi(2))
        .sum())
}

/// Gradient of [`qing`].
pub fn qing_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::lit(4.0) * x[i] * (x[i] * x[i] - T::from_usize(i + 1))
    }))
}

fn minimizer(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| ((i + 1) as f64).sqrt())
}

/// Catalog record for [`qing`].
pub fn qing_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        qing,
        qing_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Separable quartic wells at ±sqrt(i); all sign combinations are global.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}(x_i^2 - i)^2",
            source: "Qing (2006), Dynamic differential evolution strategy and applications in electromagnetic inverse scattering problems",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Computed(minimizer),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-500.0),
            ub: VectorSpec::Fill(500.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
