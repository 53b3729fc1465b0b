//! McCormick test function

use super::prelude::*;

const NAME: &str = "mccormick";
const DIM: Dimension = Dimension::Fixed(2);

/// McCormick function - 2D multimodal
/// Global minimum: f(x) = -1.9132229549810362 at x = (0.5 - π/3, -0.5 - π/3)
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
///
/// Infinite input: +∞.
pub fn mccormick<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    Ok((x1 + x2).sin() + (x1 - x2).powi(2) - T::lit(1.5) * x1 + T::lit(2.5) * x2 + T::one())
}

/// Gradient of [`mccormick`].
pub fn mccormick_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let c = (x1 + x2).cos();
    let d = T::lit(2.0) * (x1 - x2);
    Ok(Array1::from(vec![c + d - T::lit(1.5), c - d + T::lit(2.5)]))
}

/// Catalog record for [`mccormick`].
pub fn mccormick_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        mccormick,
        mccormick_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sine ridge over a tilted quadratic trough.",
            math: r"f(\mathbf{x}) = \sin(x_1 + x_2) + (x_1 - x_2)^2 - 1.5x_1 + 2.5x_2 + 1",
            source: "McCormick (1976), Computability of global solutions to factorable nonconvex programs",
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
            min_position: VectorSpec::Fixed(&[-0.5471975511965976, -1.5471975511965976]),
            min_value: ValueSpec::Fixed(-1.9132229549810362),
            lb: VectorSpec::Fixed(&[-1.5, -3.0]),
            ub: VectorSpec::Fixed(&[4.0, 4.0]),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
