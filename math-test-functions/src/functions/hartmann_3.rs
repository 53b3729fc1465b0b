//! Hartmann 3-D test function

use super::prelude::*;

const NAME: &str = "hartmann_3";
const DIM: Dimension = Dimension::Fixed(3);

const ALPHA: [f64; 4] = [1.0, 1.2, 3.0, 3.2];
const A: [[f64; 3]; 4] = [
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
];
const P: [[f64; 3]; 4] = [
    [0.3689, 0.1170, 0.2673],
    [0.4699, 0.4387, 0.7470],
    [0.1091, 0.8732, 0.5547],
    [0.0381, 0.5743, 0.8828],
];

/// Hartmann 3-D function - multimodal, four local minima
/// Global minimum: f(x) = -3.862779787332663 at x = (0.11458890, 0.55564890, 0.85254699)
/// Bounds: x_i in [0, 1]
///
/// Infinite input: 0, every Gaussian term vanishes; gradient is zero.
pub fn hartmann_3<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::zero());
    }
    let total: T = (0..4).map(|i| T::lit(ALPHA[i]) * bump(x, i)).sum();
    Ok(-total)
}

fn bump<T: Scalar>(x: &Array1<T>, i: usize) -> T {
    let r: T = (0..3)
        .map(|j| T::lit(A[i][j]) * (x[j] - T::lit(P[i][j])).powi(2))
        .sum();
    (-r).exp()
}

/// Gradient of [`hartmann_3`].
pub fn hartmann_3_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let mut grad = Array1::zeros(n);
    for i in 0..4 {
        let w = T::lit(2.0 * ALPHA[i]) * bump(x, i);
        for j in 0..3 {
            grad[j] += w * T::lit(A[i][j]) * (x[j] - T::lit(P[i][j]));
        }
    }
    Ok(grad)
}

/// Catalog record for [`hartmann_3`].
pub fn hartmann_3_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        hartmann_3,
        hartmann_3_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Negative sum of four anisotropic Gaussian bumps in the unit cube.",
            math: r"f(\mathbf{x}) = -\sum_{i=1}^{4} \alpha_i \exp\left(-\sum_{j=1}^{3} A_{ij}(x_j - P_{ij})^2\right)",
            source: "Dixon & Szegö (1978), The global optimization problem: an introduction",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Fixed(&[
                0.11458889909170943,
                0.5556488953171403,
                0.8525469850832641,
            ]),
            min_value: ValueSpec::Fixed(-3.862779787332663),
            lb: VectorSpec::Fill(0.0),
            ub: VectorSpec::Fill(1.0),
            min_value_tolerance: 1e-9,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_hartmann_3_known_properties() {
        assert_minimum(&hartmann_3_function(), 3);
        assert!(hartmann_3(&Array1::<f64>::from(vec![0.5, 0.5])).is_err());
    }

    #[test]
    fn test_hartmann_3_gradient() {
        assert_gradient_matches(hartmann_3, hartmann_3_gradient, &[0.5, 0.5, 0.5]);
        assert_gradient_matches(hartmann_3, hartmann_3_gradient, &[0.1, 0.9, 0.3]);
    }
}
