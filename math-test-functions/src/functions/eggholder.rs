//! Eggholder test function

use super::prelude::*;

const NAME: &str = "eggholder";
const DIM: Dimension = Dimension::Fixed(2);

/// Eggholder function - 2D, highly multimodal
/// Global minimum: f(x) = -959.6406627208503 at x = (512, 404.2318058)
/// Bounds: x_i in [-512, 512]
///
/// Infinite input: NaN, the oscillation has no limit.
/// The gradient is NaN where either square-root argument vanishes.
pub fn eggholder<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let (x1, x2) = (x[0], x[1]);
    let y = x2 + T::lit(47.0);
    let u = x1 / T::lit(2.0) + y;
    let v = x1 - y;
    Ok(-y * u.abs().sqrt().sin() - x1 * v.abs().sqrt().sin())
}

/// d/du sin(sqrt|u|); infinite at u = 0, reported as NaN.
fn sin_sqrt_abs_slope<T: Scalar>(u: T) -> T {
    let r = u.abs().sqrt();
    if r == T::zero() {
        return T::nan();
    }
    r.cos() * sign(u) / (T::lit(2.0) * r)
}

/// Gradient of [`eggholder`].
pub fn eggholder_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let (x1, x2) = (x[0], x[1]);
    let y = x2 + T::lit(47.0);
    let u = x1 / T::lit(2.0) + y;
    let v = x1 - y;
    let su = sin_sqrt_abs_slope(u);
    let sv = sin_sqrt_abs_slope(v);
    Ok(Array1::from(vec![
        -y * su * T::lit(0.5) - v.abs().sqrt().sin() - x1 * sv,
        -u.abs().sqrt().sin() - y * su + x1 * sv,
    ]))
}

/// Catalog record for [`eggholder`].
pub fn eggholder_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        eggholder,
        eggholder_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Deep irregular wells; the global minimum sits on the domain edge.",
            math: r"f(\mathbf{x}) = -(x_2 + 47)\sin\sqrt{\left|\frac{x_1}{2} + x_2 + 47\right|} - x_1\sin\sqrt{|x_1 - (x_2 + 47)|}",
            source: "Whitley et al. (1996), Evaluating evolutionary algorithms",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.0, 0.0]),
            min_position: VectorSpec::Fixed(&[512.0, 404.2318058]),
            min_value: ValueSpec::Fixed(-959.6406627208503),
            lb: VectorSpec::Fill(-512.0),
            ub: VectorSpec::Fill(512.0),
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
    fn test_eggholder_known_properties() {
        assert_minimum(&eggholder_function(), 2);
        assert!(eggholder(&Array1::<f64>::from(vec![f64::INFINITY, 0.0])).unwrap().is_nan());
    }

    #[test]
    fn test_eggholder_gradient() {
        assert_gradient_matches(eggholder, eggholder_gradient, &[100.0, -20.0]);
        assert_gradient_matches(eggholder, eggholder_gradient, &[-300.0, 250.0]);
        // x1 / 2 + x2 + 47 = 0
        let g = eggholder_gradient(&Array1::<f64>::from(vec![-94.0, 0.0])).unwrap();
        assert!(g.iter().all(|gi| gi.is_nan()));
    }
}
