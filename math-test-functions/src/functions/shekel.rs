//! Shekel family of test functions (m = 5, 7, 10)

use super::prelude::*;

const DIM: Dimension = Dimension::Fixed(4);

const BETA: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];
const CENTERS: [[f64; 4]; 10] = [
    [4.0, 4.0, 4.0, 4.0],
    [1.0, 1.0, 1.0, 1.0],
    [8.0, 8.0, 8.0, 8.0],
    [6.0, 6.0, 6.0, 6.0],
    [3.0, 7.0, 3.0, 7.0],
    [2.0, 9.0, 2.0, 9.0],
    [5.0, 5.0, 3.0, 3.0],
    [8.0, 1.0, 8.0, 1.0],
    [6.0, 2.0, 6.0, 2.0],
    [7.0, 3.6, 7.0, 3.6],
];

/// `-sum_{i<m} 1 / (|x - c_i|^2 + beta_i)` shared by the three members.
fn shekel_value<T: Scalar>(name: &'static str, m: usize, x: &Array1<T>) -> Result<T> {
    check_input(name, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::zero());
    }
    let total: T = (0..m).map(|i| T::one() / distance(x, i)).sum();
    Ok(-total)
}

fn distance<T: Scalar>(x: &Array1<T>, i: usize) -> T {
    let d: T = x
        .iter()
        .zip(CENTERS[i].iter())
        .map(|(&xj, &cj)| (xj - T::lit(cj)).powi(2))
        .sum();
    d + T::lit(BETA[i])
}

fn shekel_gradient<T: Scalar>(name: &'static str, m: usize, x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(name, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let mut grad = Array1::zeros(n);
    for i in 0..m {
        let d = distance(x, i);
        let w = T::lit(2.0) / (d * d);
        for (j, &cj) in CENTERS[i].iter().enumerate() {
            grad[j] += w * (x[j] - T::lit(cj));
        }
    }
    Ok(grad)
}

fn shekel_metadata(
    name: &'static str,
    properties: &'static [Property],
    min_position: &'static [f64],
    min_value: f64,
) -> FunctionMetadata {
    FunctionMetadata {
        name,
        description: "Negative sum of inverted quadratic wells of varying depth in [0, 10]^4.",
        math: r"f(\mathbf{x}) = -\sum_{i=1}^{m} \left(\sum_{j=1}^{4}(x_j - C_{ji})^2 + \beta_i\right)^{-1}",
        source: "Shekel (1971), Test functions for multimodal search techniques",
        dimension: DIM,
        properties,
        start: VectorSpec::Fill(2.0),
        min_position: VectorSpec::Fixed(min_position),
        min_value: ValueSpec::Fixed(min_value),
        lb: VectorSpec::Fill(0.0),
        ub: VectorSpec::Fill(10.0),
        min_value_tolerance: 1e-10,
        in_molga_smutnicki_2005: false,
    }
}

const PROPERTIES: &[Property] = &[
    Property::Multimodal,
    Property::NonConvex,
    Property::NonSeparable,
    Property::Differentiable,
    Property::Continuous,
    Property::Bounded,
];

/// Shekel m = 7 reports differing minima in the literature.
const PROPERTIES_CONTROVERSIAL: &[Property] = &[
    Property::Multimodal,
    Property::NonConvex,
    Property::NonSeparable,
    Property::Differentiable,
    Property::Continuous,
    Property::Bounded,
    Property::Controversial,
];

/// Shekel function, m = 5
/// Global minimum: f(x) = -10.153199679058227 near x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
///
/// Infinite input: 0; gradient is zero.
pub fn shekel_5<T: Scalar>(x: &Array1<T>) -> Result<T> {
    shekel_value("shekel_5", 5, x)
}

/// Gradient of [`shekel_5`].
pub fn shekel_5_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    shekel_gradient("shekel_5", 5, x)
}

/// Catalog record for [`shekel_5`].
pub fn shekel_5_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shekel_5,
        shekel_5_gradient,
        shekel_metadata(
            "shekel_5",
            PROPERTIES,
            &[
                4.000037152959992,
                4.000133277225568,
                4.000037151226775,
                4.0001332736057975,
            ],
            -10.153199679058227,
        ),
    )
}

/// Shekel function, m = 7
/// Global minimum: f(x) = -10.402940566818662 near x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
///
/// Infinite input: 0; gradient is zero.
pub fn shekel_7<T: Scalar>(x: &Array1<T>) -> Result<T> {
    shekel_value("shekel_7", 7, x)
}

/// Gradient of [`shekel_7`].
pub fn shekel_7_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    shekel_gradient("shekel_7", 7, x)
}

/// Catalog record for [`shekel_7`].
pub fn shekel_7_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shekel_7,
        shekel_7_gradient,
        shekel_metadata(
            "shekel_7",
            PROPERTIES_CONTROVERSIAL,
            &[
                4.000572917701902,
                4.000689363319119,
                3.9994897084355863,
                3.9996061579976874,
            ],
            -10.402940566818662,
        ),
    )
}

/// Shekel function, m = 10
/// Global minimum: f(x) = -10.536409816692041 near x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
///
/// Infinite input: 0; gradient is zero.
pub fn shekel_10<T: Scalar>(x: &Array1<T>) -> Result<T> {
    shekel_value("shekel_10", 10, x)
}

/// Gradient of [`shekel_10`].
pub fn shekel_10_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    shekel_gradient("shekel_10", 10, x)
}

/// Catalog record for [`shekel_10`].
pub fn shekel_10_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shekel_10,
        shekel_10_gradient,
        shekel_metadata(
            "shekel_10",
            PROPERTIES,
            &[
                4.00074653709582,
                4.000592928752531,
                3.999663399095439,
                3.999509798318927,
            ],
            -10.536409816692041,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_shekel_known_properties() {
        assert_minimum(&shekel_5_function(), 4);
        assert_minimum(&shekel_7_function(), 4);
        assert_minimum(&shekel_10_function(), 4);
        // more wells only ever deepen the landscape
        let x = Array1::<f64>::from(vec![4.0, 4.0, 4.0, 4.0]);
        let (f5, f7, f10) = (
            shekel_5(&x).unwrap(),
            shekel_7(&x).unwrap(),
            shekel_10(&x).unwrap(),
        );
        assert!(f10 < f7 && f7 < f5);
    }

    #[test]
    fn test_shekel_errors_name_the_member() {
        let err = shekel_7(&Array1::<f64>::from(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(err.function(), "shekel_7");
    }

    #[test]
    fn test_shekel_gradient() {
        let p = [2.0, 6.5, 3.3, 7.1];
        assert_gradient_matches(shekel_5, shekel_5_gradient, &p);
        assert_gradient_matches(shekel_7, shekel_7_gradient, &p);
        assert_gradient_matches(shekel_10, shekel_10_gradient, &p);
    }
}
