//! Drop-wave test function

use super::prelude::*;

const NAME: &str = "drop_wave";
const DIM: Dimension = Dimension::Fixed(2);

/// Drop-wave function - 2D multimodal, concentric ripples
/// Global minimum: f(x) = -1 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Infinite input: 0, the limit as the denominator grows; gradient is zero.
pub fn drop_wave<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::zero());
    }
    let u = x[0] * x[0] + x[1] * x[1];
    let num = T::one() + (T::lit(12.0) * u.sqrt()).cos();
    let den = T::lit(0.5) * u + T::lit(2.0);
    Ok(-num / den)
}

/// Gradient of [`drop_wave`].
pub fn drop_wave_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let twelve = T::lit(12.0);
    let u = x[0] * x[0] + x[1] * x[1];
    let rho = u.sqrt();
    let num = T::one() + (twelve * rho).cos();
    let den = T::lit(0.5) * u + T::lit(2.0);
    // 12 sin(12 rho) / rho, continued by its limit 144 at the origin
    let k = if rho > T::zero() {
        twelve * (twelve * rho).sin() / rho
    } else {
        T::lit(144.0)
    };
    let scale = (k * den + num) / (den * den);
    Ok(x.mapv(|xi| xi * scale))
}

/// Catalog record for [`drop_wave`].
pub fn drop_wave_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        drop_wave,
        drop_wave_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Radially symmetric ripples decaying away from a deep central well.",
            math: r"f(\mathbf{x}) = -\frac{1 + \cos\left(12\sqrt{x_1^2 + x_2^2}\right)}{0.5(x_1^2 + x_2^2) + 2}",
            source: "Surjanovic & Bingham, Virtual Library of Simulation Experiments",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 1.0]),
            min_position: VectorSpec::Fixed(&[0.0, 0.0]),
            min_value: ValueSpec::Fixed(-1.0),
            lb: VectorSpec::Fill(-5.12),
            ub: VectorSpec::Fill(5.12),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_drop_wave_known_properties() {
        assert_minimum(&drop_wave_function(), 2);
        let g = drop_wave_gradient(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap();
        assert_eq!(g, Array1::<f64>::from(vec![0.0, 0.0]));
    }

    #[test]
    fn test_drop_wave_gradient() {
        assert_gradient_matches(drop_wave, drop_wave_gradient, &[1.0, 1.0]);
        assert_gradient_matches(drop_wave, drop_wave_gradient, &[-0.03, 0.2]);
    }
}
