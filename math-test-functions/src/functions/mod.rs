//! One module per test function.
//!
//! Each module exposes the generic value function `<name>`, its analytic
//! gradient `<name>_gradient`, and `<name>_function` which bundles both
//! with metadata into a [`TestFunction`](crate::TestFunction).

mod prelude {
    pub(crate) use crate::error::{Result, TestFunctionError};
    pub(crate) use crate::metadata::{
        Dimension, FunctionMetadata, Property, ValueSpec, VectorSpec,
    };
    pub(crate) use crate::noise::NoiseModel;
    pub(crate) use crate::record::{TestFunction, make_test_function};
    pub(crate) use crate::scalar::Scalar;
    pub(crate) use crate::validate::{
        check_input, filled, has_inf, has_nan, nan_vector, require_non_negative, sign,
    };
    pub(crate) use ndarray::Array1;
    pub(crate) use rand::RngCore;
}

pub mod ackley;
pub mod alpine_n1;
pub mod alpine_n2;
pub mod beale;
pub mod bent_cigar;
pub mod bird;
pub mod bohachevsky1;
pub mod booth;
pub mod branin;
pub mod brown;
pub mod bukin_n6;
pub mod colville;
pub mod cosine_mixture;
pub mod cross_in_tray;
pub mod de_jong_f4;
pub mod de_jong_f5;
pub mod discus;
pub mod dixon_price;
pub mod drop_wave;
pub mod easom;
pub mod eggholder;
pub mod elliptic;
pub mod exponential;
pub mod forrester_2008;
pub mod freudenstein_roth;
pub mod goldstein_price;
pub mod gramacy_lee_2012;
pub mod griewank;
pub mod happy_cat;
pub mod hartmann_3;
pub mod hartmann_6;
pub mod himmelblau;
pub mod holder_table;
pub mod langermann;
pub mod levy;
pub mod levy_n13;
pub mod matyas;
pub mod mccormick;
pub mod michalewicz;
pub mod powell;
pub mod qing;
pub mod quadratic;
pub mod rastrigin;
pub mod rosenbrock;
pub mod rotated_hyper_ellipsoid;
pub mod salomon;
pub mod schaffer_n2;
pub mod schwefel;
pub mod schwefel_2_21;
pub mod schwefel_2_22;
pub mod shekel;
pub mod shubert;
pub mod shubert_noisy;
pub mod shubert_rastrigin;
pub mod six_hump_camel;
pub mod sphere;
pub mod step;
pub mod styblinski_tang;
pub mod sum_of_different_powers;
pub mod sum_squares;
pub mod three_hump_camel;
pub mod trid;
pub mod xin_she_yang_n1;
pub mod xin_she_yang_n2;
pub mod zakharov;

pub use ackley::*;
pub use alpine_n1::*;
pub use alpine_n2::*;
pub use beale::*;
pub use bent_cigar::*;
pub use bird::*;
pub use bohachevsky1::*;
pub use booth::*;
pub use branin::*;
pub use brown::*;
pub use bukin_n6::*;
pub use colville::*;
pub use cosine_mixture::*;
pub use cross_in_tray::*;
pub use de_jong_f4::*;
pub use de_jong_f5::*;
pub use discus::*;
pub use dixon_price::*;
pub use drop_wave::*;
pub use easom::*;
pub use eggholder::*;
pub use elliptic::*;
pub use exponential::*;
pub use forrester_2008::*;
pub use freudenstein_roth::*;
pub use goldstein_price::*;
pub use gramacy_lee_2012::*;
pub use griewank::*;
pub use happy_cat::*;
pub use hartmann_3::*;
pub use hartmann_6::*;
pub use himmelblau::*;
pub use holder_table::*;
pub use langermann::*;
pub use levy::*;
pub use levy_n13::*;
pub use matyas::*;
pub use mccormick::*;
pub use michalewicz::*;
pub use powell::*;
pub use qing::*;
pub use quadratic::*;
pub use rastrigin::*;
pub use rosenbrock::*;
pub use rotated_hyper_ellipsoid::*;
pub use salomon::*;
pub use schaffer_n2::*;
pub use schwefel::*;
pub use schwefel_2_21::*;
pub use schwefel_2_22::*;
pub use shekel::*;
pub use shubert::*;
pub use shubert_noisy::*;
pub use shubert_rastrigin::*;
pub use six_hump_camel::*;
pub use sphere::*;
pub use step::*;
pub use styblinski_tang::*;
pub use sum_of_different_powers::*;
pub use sum_squares::*;
pub use three_hump_camel::*;
pub use trid::*;
pub use xin_she_yang_n1::*;
pub use xin_she_yang_n2::*;
pub use zakharov::*;
