//! Schwefel test function

use super::prelude::*;

const NAME: &str = "schwefel";
const DIM: Dimension = Dimension::scalable(1, 2);

const OFFSET: f64 = 418.9828872724338;
const ARGMIN: f64 = 420.9687463599821;

/// Schwefel function - N-dimensional, deceptive, minimum far from the
/// second-best basin
/// Global minimum: f(x) ≈ 0 at x_i = 420.9687463599821
/// Bounds: x_i in [-500, 500]
///
/// Infinite input: NaN, the oscillation grows without limit.
pub fn schwefel<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let s: T = x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum();
    Ok(T::lit(OFFSET) * T::from_usize(n) - s)
}

/// Gradient of [`schwefel`].
pub fn schwefel_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    // d/dx [x sin sqrt|x|] = sin r + r cos(r) / 2 with r = sqrt|x|
    Ok(x.mapv(|xi| {
        let r = xi.abs().sqrt();
        -(r.sin() + T::lit(0.5) * r * r.cos())
    }))
}

/// Catalog record for [`schwefel`].
pub fn schwefel_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        schwefel,
        schwefel_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Deceptive landscape whose best basin lies near the domain corner.",
            math: r"f(\mathbf{x}) = 418.9829n - \sum_{i=1}^{n} x_i \sin\sqrt{|x_i|}",
            source: "Schwefel (1981), Numerical Optimization of Computer Models",
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
            start: VectorSpec::Fill(100.0),
            min_position: VectorSpec::Fill(ARGMIN),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-500.0),
            ub: VectorSpec::Fill(500.0),
            min_value_tolerance: 1e-9,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_schwefel_known_properties() {
        let f = schwefel_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let g = schwefel_gradient(&Array1::<f64>::from(vec![ARGMIN])).unwrap();
        assert!(g[0].abs() < 1e-9);
    }

    #[test]
    fn test_schwefel_gradient() {
        assert_gradient_matches(schwefel, schwefel_gradient, &[100.0, -250.0, 3.0]);
    }
}
