//! Holder table test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "holder_table";
const DIM: Dimension = Dimension::Fixed(2);

/// Holder table function - 2D multimodal, four symmetric global minima
/// Global minimum: f(x) = -19.208502567886747 at x = (±8.05502347, ±9.66459001)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: NaN, the oscillation has no limit.
pub fn holder_table<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    Ok(-inner(x[0], x[1]).abs())
}

fn radius_term<T: Scalar>(x1: T, x2: T) -> T {
    T::one() - (x1 * x1 + x2 * x2).sqrt() / T::lit(PI)
}

fn inner<T: Scalar>(x1: T, x2: T) -> T {
    x1.sin() * x2.cos() * radius_term(x1, x2).abs().exp()
}

/// Gradient of [`holder_table`].
pub fn holder_table_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let (x1, x2) = (x[0], x[1]);
    let rho = (x1 * x1 + x2 * x2).sqrt();
    let w = radius_term(x1, x2);
    let e = w.abs().exp();
    let g = x1.sin() * x2.cos() * e;
    // dw/dx_i = -x_i / (pi rho); zero at the origin where g vanishes anyway
    let (dw1, dw2) = if rho > T::zero() {
        let k = -sign(w) / (T::lit(PI) * rho);
        (k * x1, k * x2)
    } else {
        (T::zero(), T::zero())
    };
    let dg1 = x1.cos() * x2.cos() * e + g * dw1;
    let dg2 = -x1.sin() * x2.sin() * e + g * dw2;
    let s = -sign(g);
    Ok(Array1::from(vec![s * dg1, s * dg2]))
}

/// Catalog record for [`holder_table`].
pub fn holder_table_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        holder_table,
        holder_table_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Table-like surface with four deep legs near the corners.",
            math: r"f(\mathbf{x}) = -\left|\sin x_1 \cos x_2 \exp\left(\left|1 - \frac{\sqrt{x_1^2 + x_2^2}}{\pi}\right|\right)\right|",
            source: "Mishra (2006), Some new test functions for global optimization and performance of repulsive particle swarm method",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 1.0]),
            min_position: VectorSpec::Fixed(&[8.055023467838264, 9.6645900120526]),
            min_value: ValueSpec::Fixed(-19.208502567886747),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}
