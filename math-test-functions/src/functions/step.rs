//! Step test function

use super::prelude::*;

const NAME: &str = "step";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Step function - N-dimensional, piecewise constant plateaus
/// Global minimum: f(x) = 0 for x_i in [-0.5, 0.5)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn step<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .map(|&xi| (xi + T::lit(0.5)).floor().powi(2))
        .sum())
}

/// Gradient of [`step`]: zero on every plateau, no smoothing across steps.
pub fn step_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::zeros(n))
}

/// Catalog record for [`step`].
pub fn step_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        step,
        step_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sphere quantised to integer plateaus; gradients carry no information.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}\lfloor x_i + 0.5\rfloor^2",
            source: "De Jong (1975), An analysis of the behavior of a class of genetic adaptive systems",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::NonConvex,
                Property::Separable,
                Property::PartiallyDifferentiable,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(3.0),
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
    fn test_step_plateaus() {
        assert_eq!(step(&Array1::<f64>::from(vec![0.49, -0.5])).unwrap(), 0.0);
        assert_eq!(step(&Array1::<f64>::from(vec![0.5, -0.51])).unwrap(), 2.0);
        assert_eq!(step_gradient(&Array1::<f64>::from(vec![3.2, -7.7])).unwrap(), Array1::<f64>::zeros(2));
    }
}
