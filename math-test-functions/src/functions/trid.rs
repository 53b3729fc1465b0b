//! Trid test function

use super::prelude::*;

const NAME: &str = "trid";
const DIM: Dimension = Dimension::scalable(2, 6);

/// Trid function - N-dimensional, convex, tridiagonal Hessian
/// Global minimum: f(x) = -n(n + 4)(n - 1)/6 at x_i = i(n + 1 - i)
/// Bounds: x_i in [-n^2, n^2]
///
/// Infinite input: +∞.
pub fn trid<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let squares: T = x.iter().map(|&xi| (xi - T::one()).powi(2)).sum();
    let coupling: T = (1..n).map(|i| x[i] * x[i - 1]).sum();
    Ok(squares - coupling)
}

/// Gradient of [`trid`].
pub fn trid_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        let mut g = T::lit(2.0) * (x[i] - T::one());
        if i > 0 {
            g -= x[i - 1];
        }
        if i + 1 < n {
            g -= x[i + 1];
        }
        g
    }))
}

fn minimizer(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |k| ((k + 1) * (n - k)) as f64)
}

fn minimum(n: usize) -> f64 {
    let n = n as f64;
    -n * (n + 4.0) * (n - 1.0) / 6.0
}

fn lower(n: usize) -> Array1<f64> {
    Array1::from_elem(n, -((n * n) as f64))
}

fn upper(n: usize) -> Array1<f64> {
    Array1::from_elem(n, (n * n) as f64)
}

/// Catalog record for [`trid`].
pub fn trid_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        trid,
        trid_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Convex quadratic with neighbour coupling; minimum value and bounds grow with n.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}(x_i - 1)^2 - \sum_{i=2}^{n} x_i x_{i-1}",
            source: "Surjanovic & Bingham, Virtual Library of Simulation Experiments",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.0),
            min_position: VectorSpec::Computed(minimizer),
            min_value: ValueSpec::Computed(minimum),
            lb: VectorSpec::Computed(lower),
            ub: VectorSpec::Computed(upper),
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
    fn test_trid_known_properties() {
        let f = trid_function::<f64>();
        assert_eq!(f.meta.min_value(6).unwrap(), -50.0);
        assert_eq!(f.meta.min_value(10).unwrap(), -210.0);
        assert_eq!(f.meta.lb(3).unwrap(), Array1::<f64>::from(vec![-9.0, -9.0, -9.0]));
        for n in [2, 6, 10] {
            assert_minimum(&f, n);
            let g = trid_gradient(&minimizer(n)).unwrap();
            assert!(g.iter().all(|gi| *gi == 0.0));
        }
    }

    #[test]
    fn test_trid_gradient() {
        assert_gradient_matches(trid, trid_gradient, &[1.0, -2.0, 3.5, 0.25]);
    }
}
