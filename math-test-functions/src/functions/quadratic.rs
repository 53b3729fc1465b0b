//! Quadratic test function with caller-chosen parameters

use crate::error::{Result, TestFunctionError};
use crate::metadata::{Dimension, Property};
use crate::record::Objective;
use crate::scalar::Scalar;
use crate::validate::{check_input, filled, has_inf, has_nan, nan_vector};
use ndarray::{Array1, Array2};
use rand::Rng;

const NAME: &str = "quadratic";

const PROPERTIES: &[Property] = &[
    Property::Unimodal,
    Property::Convex,
    Property::NonSeparable,
    Property::Differentiable,
    Property::Continuous,
    Property::Bounded,
];

/// Parameters of `f(x) = xᵀAx + bᵀx + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticParams {
    /// Symmetric positive definite matrix
    pub a: Array2<f64>,
    /// Linear term
    pub b: Array1<f64>,
    /// Constant offset
    pub c: f64,
}

impl QuadraticParams {
    /// Random well-conditioned parameters of dimension `n`.
    ///
    /// `A = MᵀM / n + I` with `M` uniform on `[-1, 1)`, so every eigenvalue
    /// is at least one. `b` and `c` are uniform on `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(TestFunctionError::EmptyInput { function: NAME });
        }
        let m = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
        let mut a = m.t().dot(&m) / n as f64;
        for i in 0..n {
            a[[i, i]] += 1.0;
        }
        let b = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));
        let c = rng.random_range(-1.0..1.0);
        log::debug!("{NAME}: drew random parameters for n = {n}");
        Ok(Self { a, b, c })
    }
}

/// Cholesky factor `L` with `A = LLᵀ`; fails unless `A` is positive definite.
fn cholesky(a: &Array2<f64>) -> Result<Array2<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));
    for j in 0..n {
        let mut d = a[[j, j]];
        for k in 0..j {
            d -= l[[j, k]] * l[[j, k]];
        }
        if d <= 0.0 || !d.is_finite() {
            return Err(TestFunctionError::InvalidParameter {
                function: NAME,
                reason: format!("matrix A is not positive definite (pivot {j} = {d})"),
            });
        }
        let ljj = d.sqrt();
        l[[j, j]] = ljj;
        for i in (j + 1)..n {
            let mut s = a[[i, j]];
            for k in 0..j {
                s -= l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = s / ljj;
        }
    }
    Ok(l)
}

/// Solve `LLᵀy = b` by forward then backward substitution.
fn cholesky_solve(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let n = b.len();
    let mut z = b.clone();
    for i in 0..n {
        for k in 0..i {
            z[i] -= l[[i, k]] * z[k];
        }
        z[i] /= l[[i, i]];
    }
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            z[i] -= l[[k, i]] * z[k];
        }
        z[i] /= l[[i, i]];
    }
    z
}

/// Convex quadratic with parameters fixed at construction.
///
/// The parameters are owned by the objective and never change, so two
/// test runs only share a landscape when they share the `Quadratic`.
/// Global minimum: f(x*) = c - bᵀA⁻¹b / 4 at x* = -A⁻¹b / 2
#[derive(Debug, Clone)]
pub struct Quadratic {
    params: QuadraticParams,
    minimizer: Array1<f64>,
    minimum: f64,
    half_width: f64,
}

impl Quadratic {
    /// Validate `params` and precompute the minimizer.
    pub fn new(params: QuadraticParams) -> Result<Self> {
        let n = params.a.nrows();
        if n == 0 {
            return Err(TestFunctionError::EmptyInput { function: NAME });
        }
        if params.a.ncols() != n {
            return Err(TestFunctionError::InvalidParameter {
                function: NAME,
                reason: format!("A must be square, got {}x{}", n, params.a.ncols()),
            });
        }
        if params.b.len() != n {
            return Err(TestFunctionError::DimensionMismatch {
                function: NAME,
                expected: n,
                got: params.b.len(),
            });
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let (aij, aji) = (params.a[[i, j]], params.a[[j, i]]);
                if (aij - aji).abs() > 1e-12 * aij.abs().max(1.0) {
                    return Err(TestFunctionError::InvalidParameter {
                        function: NAME,
                        reason: format!("A is not symmetric at ({i}, {j})"),
                    });
                }
            }
        }

        let l = cholesky(&params.a)?;
        let y = cholesky_solve(&l, &params.b);
        let minimizer = y.mapv(|yi| -0.5 * yi);
        let minimum = params.c - 0.25 * params.b.dot(&y);
        let half_width = 10.0 + minimizer.iter().fold(0.0_f64, |m, v| m.max(v.abs())).ceil();

        Ok(Self {
            params,
            minimizer,
            minimum,
            half_width,
        })
    }

    /// Shortcut for [`QuadraticParams::random`] followed by [`Quadratic::new`].
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        Self::new(QuadraticParams::random(n, rng)?)
    }

    /// The parameters this objective was built with.
    pub fn params(&self) -> &QuadraticParams {
        &self.params
    }

    /// Dimension fixed by the parameters.
    pub fn n(&self) -> usize {
        self.minimizer.len()
    }

    fn check_n(&self, n: usize) -> Result<()> {
        Dimension::Fixed(self.n()).check(NAME, n)
    }
}

impl<T: Scalar> Objective<T> for Quadratic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dimension(&self) -> Dimension {
        Dimension::Fixed(self.n())
    }

    fn properties(&self) -> &[Property] {
        PROPERTIES
    }

    /// Infinite input: +∞ (positive definite quadratic form).
    fn value(&self, x: &Array1<T>) -> Result<T> {
        let n = check_input(NAME, Dimension::Fixed(self.n()), x)?;
        if has_nan(x) {
            return Ok(T::nan());
        }
        if has_inf(x) {
            return Ok(T::infinity());
        }
        let mut sum = T::lit(self.params.c);
        for i in 0..n {
            let mut ax_i = T::zero();
            for j in 0..n {
                ax_i += T::lit(self.params.a[[i, j]]) * x[j];
            }
            sum += x[i] * ax_i + T::lit(self.params.b[i]) * x[i];
        }
        Ok(sum)
    }

    fn gradient(&self, x: &Array1<T>) -> Result<Array1<T>> {
        let n = check_input(NAME, Dimension::Fixed(self.n()), x)?;
        if has_nan(x) {
            return Ok(nan_vector(n));
        }
        if has_inf(x) {
            return Ok(filled(n, T::infinity()));
        }
        Ok(Array1::from_shape_fn(n, |i| {
            let mut g = T::lit(self.params.b[i]);
            for j in 0..n {
                g += T::lit(2.0 * self.params.a[[i, j]]) * x[j];
            }
            g
        }))
    }

    fn start(&self, n: usize) -> Result<Array1<f64>> {
        self.check_n(n)?;
        Ok(self.minimizer.mapv(|v| v + 1.0))
    }

    fn min_position(&self, n: usize) -> Result<Array1<f64>> {
        self.check_n(n)?;
        Ok(self.minimizer.clone())
    }

    fn min_value(&self, n: usize) -> Result<f64> {
        self.check_n(n)?;
        Ok(self.minimum)
    }

    fn lb(&self, n: usize) -> Result<Array1<f64>> {
        self.check_n(n)?;
        Ok(Array1::from_elem(n, -self.half_width))
    }

    fn ub(&self, n: usize) -> Result<Array1<f64>> {
        self.check_n(n)?;
        Ok(Array1::from_elem(n, self.half_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::dual_gradient;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn diagonal() -> Quadratic {
        Quadratic::new(QuadraticParams {
            a: array![[2.0, 0.0], [0.0, 1.0]],
            b: array![-4.0, 2.0],
            c: 3.0,
        })
        .expect("valid parameters")
    }

    #[test]
    fn test_quadratic_known_minimum() {
        // 2x² + y² - 4x + 2y + 3 is minimized at (1, -1) with value 0
        let q = diagonal();
        let x_star = Objective::<f64>::min_position(&q, 2).expect("n = 2");
        assert_relative_eq!(x_star[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x_star[1], -1.0, epsilon = 1e-12);
        assert_relative_eq!(Objective::<f64>::min_value(&q, 2).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.value(&x_star).unwrap(), 0.0, epsilon = 1e-12);

        let g: Array1<f64> = q.gradient(&x_star).unwrap();
        assert_relative_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(g[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_rejects_bad_parameters() {
        let not_pd = QuadraticParams {
            a: array![[1.0, 2.0], [2.0, 1.0]],
            b: array![0.0, 0.0],
            c: 0.0,
        };
        assert!(Quadratic::new(not_pd).is_err());

        let not_symmetric = QuadraticParams {
            a: array![[1.0, 0.5], [0.0, 1.0]],
            b: array![0.0, 0.0],
            c: 0.0,
        };
        assert!(Quadratic::new(not_symmetric).is_err());

        let wrong_b = QuadraticParams {
            a: array![[1.0, 0.0], [0.0, 1.0]],
            b: array![0.0],
            c: 0.0,
        };
        assert!(Quadratic::new(wrong_b).is_err());
    }

    #[test]
    fn test_random_parameters_are_reproducible_and_consistent() {
        let q1 = Quadratic::random(5, &mut StdRng::seed_from_u64(11)).expect("spd");
        let q2 = Quadratic::random(5, &mut StdRng::seed_from_u64(11)).expect("spd");
        assert_eq!(q1.params(), q2.params());

        let x_star = Objective::<f64>::min_position(&q1, 5).unwrap();
        let f_star = Objective::<f64>::min_value(&q1, 5).unwrap();
        assert_relative_eq!(q1.value(&x_star).unwrap(), f_star, epsilon = 1e-10);

        let start = Objective::<f64>::start(&q1, 5).unwrap();
        assert!(q1.value(&start).unwrap() > f_star);

        let x = Array1::<f64>::from(vec![0.3, -0.2, 1.1, 0.0, -0.7]);
        let hand: Array1<f64> = q1.gradient(&x).unwrap();
        let ad = dual_gradient(|xd| q1.value(xd), &x).unwrap();
        for i in 0..5 {
            assert_relative_eq!(hand[i], ad[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_quadratic_edge_cases() {
        let q = diagonal();
        let wrong: Array1<f64> = array![1.0, 2.0, 3.0];
        assert!(q.value(&wrong).unwrap_err().is_dimension_error());
        let nan: Array1<f64> = array![f64::NAN, 0.0];
        assert!(q.value(&nan).unwrap().is_nan());
        assert!(q.gradient(&nan).unwrap().iter().all(|v: &f64| v.is_nan()));
        let inf: Array1<f64> = array![f64::INFINITY, 0.0];
        assert_eq!(q.value(&inf).unwrap(), f64::INFINITY);
    }
}
