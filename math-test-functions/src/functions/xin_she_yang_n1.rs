//! Xin-She Yang N.1 test function

use super::prelude::*;

const NAME: &str = "xin_she_yang_n1";
const DIM: Dimension = Dimension::scalable(1, 2);
const NOISE: NoiseModel = NoiseModel::UNIT_UNIFORM;

/// Xin-She Yang N.1 function - N-dimensional, random weights per term
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
///
/// Each term |x_i|^i carries a weight eps_i ~ U[0, 1). The deterministic
/// value fixes eps_i = 1; see [`xin_she_yang_n1_stochastic`].
/// Infinite input: +∞.
pub fn xin_she_yang_n1<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter().enumerate().map(|(i, &xi)| term(i, xi)).sum())
}

fn term<T: Scalar>(i: usize, xi: T) -> T {
    xi.abs().powi(i as i32 + 1)
}

/// [`xin_she_yang_n1`] with every weight drawn from `rng`.
pub fn xin_she_yang_n1_stochastic<T: Scalar>(
    x: &Array1<T>,
    rng: &mut dyn RngCore,
) -> Result<T> {
    let base = xin_she_yang_n1(x)?;
    if base.is_nan() || base.is_infinite() {
        return Ok(base);
    }
    let mut sum = T::zero();
    for (i, &xi) in x.iter().enumerate() {
        let eps = T::lit(NOISE.sample(NAME, rng)?);
        sum += eps * term(i, xi);
    }
    Ok(sum)
}

/// Gradient of the unit-weight value.
///
/// The first term is |x_1|, with subgradient 0 at x_1 = 0.
pub fn xin_she_yang_n1_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::from_usize(i + 1) * x[i].abs().powi(i as i32) * sign(x[i])
    }))
}

/// Catalog record for [`xin_she_yang_n1`].
pub fn xin_she_yang_n1_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        xin_she_yang_n1,
        xin_she_yang_n1_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Increasing powers of |x_i| with random weights; the landscape changes on every draw.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}\varepsilon_i |x_i|^i, \quad \varepsilon_i \sim U[0, 1)",
            source: "Yang (2010), Engineering Optimization: An Introduction with Metaheuristic Applications",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
                Property::HasNoise,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.0),
            ub: VectorSpec::Fill(5.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
    .with_noise(xin_she_yang_n1_stochastic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_xin_she_yang_n1_known_values() {
        let f = xin_she_yang_n1_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let x = Array1::<f64>::from(vec![2.0, -3.0]);
        assert_eq!(f.value(&x).unwrap(), 11.0);

        let mut rng = StdRng::seed_from_u64(3);
        let noisy = f.value_noisy(&x, &mut rng).unwrap();
        assert!((0.0..11.0).contains(&noisy));
        assert_eq!(f.value_noisy(&Array1::<f64>::zeros(4), &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn test_xin_she_yang_n1_gradient() {
        assert_gradient_matches(xin_she_yang_n1, xin_she_yang_n1_gradient, &[0.5, -1.5, 2.0]);
    }
}
