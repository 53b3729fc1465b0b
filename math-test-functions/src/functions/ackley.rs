//! Ackley test function

use super::prelude::*;
use std::f64::consts::{E, PI};

const NAME: &str = "ackley";
const DIM: Dimension = Dimension::scalable(1, 2);

const A: f64 = 20.0;
const B: f64 = 0.2;
const C: f64 = 2.0 * PI;

/// Ackley function - N-dimensional, multimodal, nearly flat outer region
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
///
/// Parameters a = 20, b = 0.2, c = 2π. The origin is a cusp; the gradient
/// there is the zero subgradient.
/// Infinite input: NaN, the cosine term has no limit.
pub fn ackley<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let n_t = T::from_usize(n);
    let sum_sq: T = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: T = x.iter().map(|&xi| (T::lit(C) * xi).cos()).sum();
    Ok(-T::lit(A) * (-T::lit(B) * (sum_sq / n_t).sqrt()).exp() - (sum_cos / n_t).exp()
        + T::lit(A)
        + T::lit(E))
}

/// Gradient of [`ackley`].
pub fn ackley_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let n_t = T::from_usize(n);
    let sum_sq: T = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: T = x.iter().map(|&xi| (T::lit(C) * xi).cos()).sum();
    let r = (sum_sq / n_t).sqrt();
    let radial = if r == T::zero() {
        T::zero()
    } else {
        T::lit(A * B) * (-T::lit(B) * r).exp() / (n_t * r)
    };
    let wave = T::lit(C) / n_t * (sum_cos / n_t).exp();
    Ok(x.mapv(|xi| radial * xi + wave * (T::lit(C) * xi).sin()))
}

/// Catalog record for [`ackley`].
pub fn ackley_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        ackley,
        ackley_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Nearly flat outer plateau riddled with local minima around a deep central hole.",
            math: r"f(\mathbf{x}) = -a\exp\left(-b\sqrt{\tfrac{1}{n}\sum x_i^2}\right) - \exp\left(\tfrac{1}{n}\sum\cos(c x_i)\right) + a + e",
            source: "Ackley (1987), A connectionist machine for genetic hillclimbing",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-32.768),
            ub: VectorSpec::Fill(32.768),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};
    use approx::assert_relative_eq;

    #[test]
    fn test_ackley_known_values() {
        let f = ackley_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let v = ackley(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap();
        assert_relative_eq!(v, 3.6253849384403627, epsilon = 1e-12);
        assert_eq!(ackley_gradient(&Array1::<f64>::zeros(3)).unwrap(), Array1::<f64>::zeros(3));
    }

    #[test]
    fn test_ackley_gradient_and_infinity() {
        assert_gradient_matches(ackley, ackley_gradient, &[0.3, -1.2, 2.5]);
        assert!(ackley(&Array1::<f64>::from(vec![f64::INFINITY, 0.0])).unwrap().is_nan());
    }
}
