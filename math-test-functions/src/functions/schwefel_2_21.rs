//! Schwefel 2.21 test function

use super::prelude::*;

const NAME: &str = "schwefel_2_21";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Schwefel 2.21 function - N-dimensional, largest absolute coordinate
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn schwefel_2_21<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter().fold(T::zero(), |m, xi| m.max(xi.abs())))
}

/// Gradient of [`schwefel_2_21`].
///
/// Max-based objectives report a zero gradient everywhere, with no
/// smoothing; optimizers relying on it see a flat landscape.
pub fn schwefel_2_21_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::zeros(n))
}

/// Catalog record for [`schwefel_2_21`].
pub fn schwefel_2_21_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        schwefel_2_21,
        schwefel_2_21_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Infinity norm; only the largest coordinate matters.",
            math: r"f(\mathbf{x}) = \max_{i} |x_i|",
            source: "Schwefel (1981), Numerical Optimization of Computer Models",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwefel_2_21_known_properties() {
        let x = Array1::<f64>::from(vec![1.0, -7.5, 3.0]);
        assert_eq!(schwefel_2_21(&x).unwrap(), 7.5);
        assert_eq!(schwefel_2_21_gradient(&x).unwrap(), Array1::<f64>::zeros(3));
        assert_eq!(schwefel_2_21(&Array1::<f64>::from(vec![0.0])).unwrap(), 0.0);
    }
}
