//! De Jong F5 (Shekel's foxholes) test function

use super::prelude::*;

const NAME: &str = "de_jong_f5";
const DIM: Dimension = Dimension::Fixed(2);

const GRID: [f64; 5] = [-32.0, -16.0, 0.0, 16.0, 32.0];

/// Foxhole centres: the first coordinate cycles fastest.
fn hole(j: usize) -> (f64, f64) {
    (GRID[j % 5], GRID[j / 5])
}

/// De Jong F5 function - 2D, 25 foxholes on a flat plateau
/// Global minimum: f(x) = 0.99800383779445 at x = (-31.97833205, -31.97833463)
/// Bounds: x_i in [-65.536, 65.536]
///
/// Infinite input: 500, the plateau height `1 / 0.002`; gradient is zero.
pub fn de_jong_f5<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::lit(500.0));
    }
    let s = (0..25).fold(T::lit(0.002), |acc, j| acc + T::one() / depth(x, j));
    Ok(T::one() / s)
}

fn depth<T: Scalar>(x: &Array1<T>, j: usize) -> T {
    let (a1, a2) = hole(j);
    T::from_usize(j + 1) + (x[0] - T::lit(a1)).powi(6) + (x[1] - T::lit(a2)).powi(6)
}

/// Gradient of [`de_jong_f5`].
pub fn de_jong_f5_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let six = T::lit(6.0);
    let mut s = T::lit(0.002);
    let (mut g1, mut g2) = (T::zero(), T::zero());
    for j in 0..25 {
        let (a1, a2) = hole(j);
        let d = depth(x, j);
        s += T::one() / d;
        g1 += six * (x[0] - T::lit(a1)).powi(5) / (d * d);
        g2 += six * (x[1] - T::lit(a2)).powi(5) / (d * d);
    }
    let s2 = s * s;
    Ok(Array1::from(vec![g1 / s2, g2 / s2]))
}

/// Catalog record for [`de_jong_f5`].
pub fn de_jong_f5_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        de_jong_f5,
        de_jong_f5_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Flat plateau pierced by 25 foxholes of increasing depth.",
            math: r"f(\mathbf{x}) = \left(0.002 + \sum_{j=1}^{25} \frac{1}{j + (x_1 - a_{1j})^6 + (x_2 - a_{2j})^6}\right)^{-1}",
            source: "De Jong (1975), An analysis of the behavior of a class of genetic adaptive systems",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[-20.5, 14.2]),
            min_position: VectorSpec::Fixed(&[-31.978332050043626, -31.978334628049268]),
            min_value: ValueSpec::Fixed(0.99800383779445),
            lb: VectorSpec::Fill(-65.536),
            ub: VectorSpec::Fill(65.536),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_de_jong_f5_known_properties() {
        assert_minimum(&de_jong_f5_function(), 2);
        let far = de_jong_f5(&Array1::<f64>::from(vec![60.0, -60.0])).unwrap();
        assert!(far > 400.0 && far < 500.0, "{far}");
        assert_eq!(de_jong_f5(&Array1::<f64>::from(vec![f64::INFINITY, 0.0])).unwrap(), 500.0);
    }

    #[test]
    fn test_de_jong_f5_gradient() {
        assert_gradient_matches(de_jong_f5, de_jong_f5_gradient, &[-20.5, 14.2]);
    }
}
