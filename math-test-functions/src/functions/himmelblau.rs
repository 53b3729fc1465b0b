//! Himmelblau test function

use super::prelude::*;

const NAME: &str = "himmelblau";
const DIM: Dimension = Dimension::Fixed(2);

/// Himmelblau function - 2D multimodal, four identical global minima
/// Global minimum: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
///
/// Infinite input: +∞.
pub fn himmelblau<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let a = x1 * x1 + x2 - T::lit(11.0);
    let b = x1 + x2 * x2 - T::lit(7.0);
    Ok(a * a + b * b)
}

/// Gradient of [`himmelblau`].
pub fn himmelblau_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let a = x1 * x1 + x2 - T::lit(11.0);
    let b = x1 + x2 * x2 - T::lit(7.0);
    Ok(Array1::from(vec![
        T::lit(4.0) * x1 * a + T::lit(2.0) * b,
        T::lit(2.0) * a + T::lit(4.0) * x2 * b,
    ]))
}

/// Catalog record for [`himmelblau`].
pub fn himmelblau_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        himmelblau,
        himmelblau_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Four equal global minima separated by ridges.",
            math: r"f(\mathbf{x}) = (x_1^2 + x_2 - 11)^2 + (x_1 + x_2^2 - 7)^2",
            source: "Himmelblau (1972), Applied Nonlinear Programming",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.0, 0.0]),
            min_position: VectorSpec::Fixed(&[3.0, 2.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.0),
            ub: VectorSpec::Fill(5.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
