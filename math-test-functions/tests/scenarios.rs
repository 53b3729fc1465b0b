//! Concrete scenarios on individual functions, the configured quadratic and
//! the noise models.

use approx::assert_relative_eq;
use math_optim_test_functions::{
    Dual, FunctionCatalog, NoiseModel, Objective, Property, Quadratic, QuadraticParams,
    TestFunctionError, booth, booth_function, dual_gradient, easom, matyas, matyas_gradient,
    rosenbrock, rosenbrock_gradient, schaffer_n2, sphere,
};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_rosenbrock_scenario() {
    let ones = Array1::<f64>::from(vec![1.0, 1.0]);
    assert_eq!(rosenbrock(&ones).unwrap(), 0.0);
    assert_eq!(rosenbrock_gradient(&ones).unwrap(), Array1::<f64>::from(vec![0.0, 0.0]));
    assert_eq!(rosenbrock(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 1.0);
}

#[test]
fn test_booth_scenario() {
    let f = booth_function::<f64>();
    assert_eq!(f.meta.min_position(2).unwrap(), Array1::<f64>::from(vec![1.0, 3.0]));
    assert_eq!(booth(&Array1::<f64>::from(vec![1.0, 3.0])).unwrap(), 0.0);
    assert_eq!(booth(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 74.0);
}

#[test]
fn test_matyas_scenario() {
    let origin = Array1::<f64>::from(vec![0.0, 0.0]);
    assert_eq!(matyas(&origin).unwrap(), 0.0);
    assert_eq!(matyas_gradient(&origin).unwrap(), Array1::<f64>::from(vec![0.0, 0.0]));
}

#[test]
fn test_sums_of_squares_vanish_at_origin() {
    let catalog = FunctionCatalog::<f64>::new();
    for name in [
        "sphere",
        "sum_squares",
        "rotated_hyper_ellipsoid",
        "bent_cigar",
        "discus",
        "sum_of_different_powers",
    ] {
        let f = catalog.get(name).unwrap();
        for n in [1, 2, 10] {
            if f.meta.dimension.check(name, n).is_err() {
                continue;
            }
            assert_eq!(f.value(&Array1::<f64>::zeros(n)).unwrap(), 0.0, "{} (n = {})", name, n);
        }
    }
    assert_eq!(sphere(&Array1::<f64>::zeros(10)).unwrap(), 0.0);
}

#[test]
fn test_finite_limits_at_infinity() {
    let far = Array1::<f64>::from(vec![f64::INFINITY, 1.0]);
    assert_eq!(easom(&far).unwrap(), 0.0);
    assert_eq!(schaffer_n2(&far).unwrap(), 0.5);
    assert_eq!(booth(&far).unwrap(), f64::INFINITY);

    let catalog = FunctionCatalog::<f64>::new();
    let de_jong_f5 = catalog.get("de_jong_f5").unwrap();
    assert_eq!(de_jong_f5.value(&far).unwrap(), 500.0);
    assert!(catalog.get("eggholder").unwrap().value(&far).unwrap().is_nan());
}

#[test]
fn test_controversial_records_are_flagged() {
    let catalog = FunctionCatalog::<f64>::new();
    let langermann = catalog.get("langermann").unwrap();
    assert!(langermann.meta.has_property(Property::Controversial));
    let x = langermann.meta.min_position(2).unwrap();
    assert_relative_eq!(
        langermann.value(&x).unwrap(),
        langermann.meta.min_value(2).unwrap(),
        epsilon = 1e-8
    );
}

#[test]
fn test_noise_models_draw_from_caller_rng() {
    let mut a = StdRng::seed_from_u64(2024);
    let mut b = StdRng::seed_from_u64(2024);
    let uniform: Vec<f64> = (0..16)
        .map(|_| NoiseModel::UNIT_UNIFORM.sample("de_jong_f4", &mut a).unwrap())
        .collect();
    let replay: Vec<f64> = (0..16)
        .map(|_| NoiseModel::UNIT_UNIFORM.sample("de_jong_f4", &mut b).unwrap())
        .collect();
    assert_eq!(uniform, replay);
    assert!(uniform.iter().all(|v| (0.0..1.0).contains(v)));
    assert_eq!(NoiseModel::UNIT_UNIFORM.lower_bound(), 0.0);
}

#[test]
fn test_noisy_catalog_entries_keep_a_clean_gradient() {
    let catalog = FunctionCatalog::<f64>::new();
    let f = catalog.get("de_jong_f4").unwrap();
    let x = Array1::<f64>::from(vec![0.5, -0.25]);
    let mut rng = StdRng::seed_from_u64(9);
    let noisy = f.value_noisy(&x, &mut rng).unwrap();
    let clean = f.value(&x).unwrap();
    assert!(noisy >= clean && noisy < clean + 1.0);
    assert_relative_eq!(f.gradient(&x).unwrap()[0], 0.5, epsilon = 1e-15);
}

#[test]
fn test_quadratic_objective() {
    let mut rng = StdRng::seed_from_u64(5);
    let q = Quadratic::random(5, &mut rng).unwrap();
    let x_star = Objective::<f64>::min_position(&q, 5).unwrap();
    let f_star = Objective::<f64>::min_value(&q, 5).unwrap();
    assert_relative_eq!(
        Objective::<f64>::value(&q, &x_star).unwrap(),
        f_star,
        epsilon = 1e-10
    );
    for g in Objective::<f64>::gradient(&q, &x_star).unwrap() {
        assert!(g.abs() < 1e-10);
    }

    let x = Objective::<f64>::start(&q, 5).unwrap();
    let hand = Objective::<f64>::gradient(&q, &x).unwrap();
    let ad = dual_gradient(|xd: &Array1<Dual>| Objective::<Dual>::value(&q, xd), &x).unwrap();
    for (h, a) in hand.iter().zip(ad.iter()) {
        assert_relative_eq!(*h, *a, epsilon = 1e-9, max_relative = 1e-9);
    }

    let err = Objective::<f64>::value(&q, &Array1::<f64>::zeros(4)).unwrap_err();
    assert!(matches!(err, TestFunctionError::DimensionMismatch { expected: 5, got: 4, .. }));
}

#[test]
fn test_quadratic_rejects_indefinite_matrix() {
    let params = QuadraticParams {
        a: Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 2.0, 1.0]).unwrap(),
        b: Array1::<f64>::zeros(2),
        c: 0.0,
    };
    let err = Quadratic::new(params).unwrap_err();
    assert!(matches!(err, TestFunctionError::InvalidParameter { .. }));
}
