//! Cross-in-tray test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "cross_in_tray";
const DIM: Dimension = Dimension::Fixed(2);

/// Cross-in-tray function - 2D multimodal, four symmetric global minima
/// Global minimum: f(x) = -2.0626118708227397 at x = (±1.34940661, ±1.34940661)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: NaN, the oscillation has no limit.
pub fn cross_in_tray<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let (x1, x2) = (x[0], x[1]);
    let s = x1.sin() * x2.sin();
    if s == T::zero() {
        return Ok(T::lit(-0.0001));
    }
    let l = s.abs().ln() + radius_term(x1, x2).abs();
    Ok(T::lit(-0.0001) * (T::lit(0.1) * ln_1p_exp(l)).exp())
}

fn radius_term<T: Scalar>(x1: T, x2: T) -> T {
    T::lit(100.0) - (x1 * x1 + x2 * x2).sqrt() / T::lit(PI)
}

/// `ln(1 + e^l)` without forming `e^l` for large `l`.
fn ln_1p_exp<T: Scalar>(l: T) -> T {
    if l > T::zero() {
        l + (-l).exp().ln_1p()
    } else {
        l.exp().ln_1p()
    }
}

/// Derivative of [`ln_1p_exp`].
fn logistic<T: Scalar>(l: T) -> T {
    if l > T::zero() {
        T::one() / (T::one() + (-l).exp())
    } else {
        let e = l.exp();
        e / (T::one() + e)
    }
}

/// Gradient of [`cross_in_tray`].
///
/// Zero subgradient on the axes, where `sin x1 sin x2` vanishes.
pub fn cross_in_tray_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let (x1, x2) = (x[0], x[1]);
    let s = x1.sin() * x2.sin();
    if s == T::zero() {
        return Ok(filled(n, T::zero()));
    }
    let rho = (x1 * x1 + x2 * x2).sqrt();
    let w = radius_term(x1, x2);
    let l = s.abs().ln() + w.abs();
    let (dw1, dw2) = if rho > T::zero() {
        let k = -sign(w) / (T::lit(PI) * rho);
        (k * x1, k * x2)
    } else {
        (T::zero(), T::zero())
    };
    let dl1 = x1.cos() / x1.sin() + dw1;
    let dl2 = x2.cos() / x2.sin() + dw2;
    let f = T::lit(-0.0001) * (T::lit(0.1) * ln_1p_exp(l)).exp();
    let c = f * T::lit(0.1) * logistic(l);
    Ok(Array1::from(vec![c * dl1, c * dl2]))
}

/// Catalog record for [`cross_in_tray`].
pub fn cross_in_tray_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        cross_in_tray,
        cross_in_tray_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Cross-shaped ridges along the axes with four wells between them.",
            math: r"f(\mathbf{x}) = -0.0001\left(\left|\sin x_1 \sin x_2 \exp\left(\left|100 - \frac{\sqrt{x_1^2 + x_2^2}}{\pi}\right|\right)\right| + 1\right)^{0.1}",
            source: "Mishra (2006), Global optimization by differential evolution and particle swarm methods",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.5, -2.0]),
            min_position: VectorSpec::Fixed(&[1.3494066074669662, 1.3494066061012115]),
            min_value: ValueSpec::Fixed(-2.0626118708227397),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_cross_in_tray_known_properties() {
        assert_minimum(&cross_in_tray_function(), 2);
        // on the axes the product vanishes
        let v = cross_in_tray(&Array1::<f64>::from(vec![0.0, 3.0])).unwrap();
        assert!((v + 0.0001).abs() < 1e-15);
    }

    #[test]
    fn test_cross_in_tray_gradient() {
        assert_gradient_matches(cross_in_tray, cross_in_tray_gradient, &[0.5, -2.0]);
        assert_gradient_matches(cross_in_tray, cross_in_tray_gradient, &[3.1, 4.4]);
        assert_gradient_matches(cross_in_tray, cross_in_tray_gradient, &[-9.5, 0.02]);
        let g = cross_in_tray_gradient(&Array1::<f64>::from(vec![0.0, 3.0])).unwrap();
        assert_eq!(g, Array1::<f64>::zeros(2));
    }

    #[test]
    fn test_cross_in_tray_single_precision_stays_finite() {
        let single = cross_in_tray_function::<f32>();
        let double = cross_in_tray_function::<f64>();
        for x in [double.meta.start(2).unwrap(), double.meta.min_position(2).unwrap()] {
            let expected = double.value(&x).unwrap();
            let actual = single.value(&x.mapv(|v| v as f32)).unwrap();
            assert!(actual.is_finite(), "{:?}: {}", x, actual);
            assert!((actual as f64 - expected).abs() < 1e-4, "f32 {} vs f64 {}", actual, expected);
            let g = single.gradient(&x.mapv(|v| v as f32)).unwrap();
            assert!(g.iter().all(|gi| gi.is_finite()), "{:?}", g);
        }
    }
}
