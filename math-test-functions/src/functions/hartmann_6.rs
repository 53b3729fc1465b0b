//! Hartmann 6-D test function

use super::prelude::*;

const NAME: &str = "hartmann_6";
const DIM: Dimension = Dimension::Fixed(6);

const ALPHA: [f64; 4] = [1.0, 1.2, 3.0, 3.2];
const A: [[f64; 6]; 4] = [
    [10.0, 3.0, 17.0, 3.5, 1.7, 8.0],
    [0.05, 10.0, 17.0, 0.1, 8.0, 14.0],
    [3.0, 3.5, 1.7, 10.0, 17.0, 8.0],
    [17.0, 8.0, 0.05, 10.0, 0.1, 14.0],
];
const P: [[f64; 6]; 4] = [
    [0.1312, 0.1696, 0.5569, 0.0124, 0.8283, 0.5886],
    [0.2329, 0.4135, 0.8307, 0.3736, 0.1004, 0.9991],
    [0.2348, 0.1451, 0.3522, 0.2883, 0.3047, 0.6650],
    [0.4047, 0.8828, 0.8732, 0.5743, 0.1091, 0.0381],
];

/// Hartmann 6-D function - multimodal, six local minima
/// Global minimum: f(x) = -3.322368011415515 at
/// x = (0.20168951, 0.15001069, 0.47687398, 0.27533243, 0.31165162, 0.65730054)
/// Bounds: x_i in [0, 1]
///
/// Infinite input: 0, every Gaussian term vanishes; gradient is zero.
pub fn hartmann_6<T: Scalar>(x: &Array1<T>) -> Result<T> {
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
    let r: T = (0..6)
        .map(|j| T::lit(A[i][j]) * (x[j] - T::lit(P[i][j])).powi(2))
        .sum();
    (-r).exp()
}

/// Gradient of [`hartmann_6`].
pub fn hartmann_6_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
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
        for j in 0..6 {
            grad[j] += w * T::lit(A[i][j]) * (x[j] - T::lit(P[i][j]));
        }
    }
    Ok(grad)
}

/// Catalog record for [`hartmann_6`].
pub fn hartmann_6_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        hartmann_6,
        hartmann_6_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Negative sum of four anisotropic Gaussian bumps in the 6-D unit cube.",
            math: r"f(\mathbf{x}) = -\sum_{i=1}^{4} \alpha_i \exp\left(-\sum_{j=1}^{6} A_{ij}(x_j - P_{ij})^2\right)",
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
                0.20168951317340017,
                0.1500106914918041,
                0.4768739762629688,
                0.27533243009765546,
                0.3116516170978226,
                0.6573005363054844,
            ]),
            min_value: ValueSpec::Fixed(-3.322368011415515),
            lb: VectorSpec::Fill(0.0),
            ub: VectorSpec::Fill(1.0),
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
    fn test_hartmann_6_known_properties() {
        assert_minimum(&hartmann_6_function(), 6);
        let g = hartmann_6_gradient(&hartmann_6_function::<f64>().meta.min_position(6).unwrap())
            .unwrap();
        assert!(g.iter().all(|gi| gi.abs() < 1e-5));
    }

    #[test]
    fn test_hartmann_6_gradient() {
        assert_gradient_matches(
            hartmann_6,
            hartmann_6_gradient,
            &[0.5, 0.2, 0.7, 0.1, 0.9, 0.4],
        );
    }
}
