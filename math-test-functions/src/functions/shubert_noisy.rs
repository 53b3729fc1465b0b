//! Shubert test function with additive Gaussian noise

use super::prelude::*;
use super::shubert::{shubert_factor, shubert_factor_slope};

const NAME: &str = "shubert_noisy";
const DIM: Dimension = Dimension::Fixed(2);
const NOISE: NoiseModel = NoiseModel::STANDARD_NORMAL;

/// Noisy Shubert function - 2D, Shubert plus N(0, 1) noise
/// Global minimum: f(x) = -186.73090883102392 (noise-free component)
/// Bounds: x_i in [-10, 10]
///
/// Returns the noise-free component; see [`shubert_noisy_stochastic`].
/// Infinite input: NaN.
pub fn shubert_noisy<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    Ok(shubert_factor(x[0]) * shubert_factor(x[1]))
}

/// [`shubert_noisy`] plus one standard normal draw from `rng`.
pub fn shubert_noisy_stochastic<T: Scalar>(x: &Array1<T>, rng: &mut dyn RngCore) -> Result<T> {
    let base = shubert_noisy(x)?;
    Ok(base + T::lit(NOISE.sample(NAME, rng)?))
}

/// Gradient of the noise-free component.
pub fn shubert_noisy_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        shubert_factor_slope(x1) * shubert_factor(x2),
        shubert_factor(x1) * shubert_factor_slope(x2),
    ]))
}

/// Catalog record for [`shubert_noisy`].
pub fn shubert_noisy_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shubert_noisy,
        shubert_noisy_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Shubert landscape observed through unit Gaussian noise.",
            math: r"f(\mathbf{x}) = \prod_{j=1}^{2} \sum_{i=1}^{5} i \cos((i + 1)x_j + i) + \varepsilon, \quad \varepsilon \sim \mathcal{N}(0, 1)",
            source: "Shubert (1972), A sequential method seeking the global maximum of a function",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
                Property::HasNoise,
            ],
            start: VectorSpec::Fixed(&[0.0, 0.0]),
            min_position: VectorSpec::Fixed(&[-7.083506407714322, 4.8580568769524834]),
            min_value: ValueSpec::Fixed(-186.73090883102392),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
    .with_noise(shubert_noisy_stochastic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_minimum;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shubert_noisy_is_reproducible_per_seed() {
        let f = shubert_noisy_function::<f64>();
        assert!(f.is_noisy());
        assert_minimum(&f, 2);

        let x = Array1::<f64>::from(vec![0.5, -0.5]);
        let clean = f.value(&x).unwrap();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let va = f.value_noisy(&x, &mut a).unwrap();
        let vb = f.value_noisy(&x, &mut b).unwrap();
        assert_eq!(va, vb);
        assert_ne!(va, clean);
        assert!((va - clean).abs() < 6.0);
    }
}
