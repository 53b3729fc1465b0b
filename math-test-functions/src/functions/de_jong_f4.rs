//! De Jong F4 (quartic with noise) test function

use super::prelude::*;

const NAME: &str = "de_jong_f4";
const DIM: Dimension = Dimension::scalable(1, 2);
const NOISE: NoiseModel = NoiseModel::UNIT_UNIFORM;

/// De Jong F4 function - N-dimensional quartic plus U[0, 1) noise
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0) (noise-free component)
/// Bounds: x_i in [-1.28, 1.28]
///
/// Returns the noise-free component; see [`de_jong_f4_stochastic`].
/// Infinite input: +∞.
pub fn de_jong_f4<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| T::from_usize(i + 1) * xi.powi(4))
        .sum())
}

/// [`de_jong_f4`] plus one uniform draw on `[0, 1)` from `rng`.
pub fn de_jong_f4_stochastic<T: Scalar>(x: &Array1<T>, rng: &mut dyn RngCore) -> Result<T> {
    let base = de_jong_f4(x)?;
    Ok(base + T::lit(NOISE.sample(NAME, rng)?))
}

/// Gradient of the noise-free component.
pub fn de_jong_f4_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::lit(4.0) * T::from_usize(i + 1) * x[i].powi(3)
    }))
}

/// Catalog record for [`de_jong_f4`].
pub fn de_jong_f4_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        de_jong_f4,
        de_jong_f4_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Weighted quartic bowl observed through additive uniform noise.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} i x_i^4 + \varepsilon, \quad \varepsilon \sim U[0, 1)",
            source: "De Jong (1975), An analysis of the behavior of a class of genetic adaptive systems",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
                Property::HasNoise,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-1.28),
            ub: VectorSpec::Fill(1.28),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
    .with_noise(de_jong_f4_stochastic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_de_jong_f4_noise_is_bounded() {
        let f = de_jong_f4_function::<f64>();
        assert_minimum(&f, 3);
        let x = Array1::<f64>::from(vec![1.0, -1.0]);
        assert_eq!(f.value(&x).unwrap(), 3.0);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = f.value_noisy(&x, &mut rng).unwrap();
            assert!((3.0..4.0).contains(&v));
        }
    }

    #[test]
    fn test_de_jong_f4_gradient() {
        assert_gradient_matches(de_jong_f4, de_jong_f4_gradient, &[0.5, -1.1, 0.9]);
    }
}
