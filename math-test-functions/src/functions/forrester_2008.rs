//! Forrester et al. (2008) test function

use super::prelude::*;

const NAME: &str = "forrester_2008";
const DIM: Dimension = Dimension::Fixed(1);

/// Forrester et al. (2008) function - 1D multimodal
/// Global minimum: f(x) = -6.020740055767083 at x = 0.757248757804603
/// Bounds: x in [0, 1]
///
/// Infinite input: NaN, the oscillation has no limit.
pub fn forrester_2008<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let x0 = x[0];
    Ok((T::lit(6.0) * x0 - T::lit(2.0)).powi(2) * (T::lit(12.0) * x0 - T::lit(4.0)).sin())
}

/// Gradient of [`forrester_2008`].
pub fn forrester_2008_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let x0 = x[0];
    let twelve = T::lit(12.0);
    let a = T::lit(6.0) * x0 - T::lit(2.0);
    let w = twelve * x0 - T::lit(4.0);
    Ok(Array1::from(vec![twelve * a * w.sin() + twelve * a * a * w.cos()]))
}

/// Catalog record for [`forrester_2008`].
pub fn forrester_2008_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        forrester_2008,
        forrester_2008_gradient,
        FunctionMetadata {
            name: NAME,
            description: "One-dimensional growing sinusoid with one local and one global minimum.",
            math: r"f(x) = (6x - 2)^2 \sin(12x - 4)",
            source: "Forrester, Sobester & Keane (2008), Engineering Design via Surrogate Modelling",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.3]),
            min_position: VectorSpec::Fixed(&[0.757248757804603]),
            min_value: ValueSpec::Fixed(-6.020740055767083),
            lb: VectorSpec::Fixed(&[0.0]),
            ub: VectorSpec::Fixed(&[1.0]),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}
