//! Name-keyed registry over every test function in the crate.

use crate::functions::*;
use crate::metadata::Property;
use crate::record::TestFunction;
use crate::scalar::Scalar;
use std::collections::BTreeMap;

/// Every catalog record, in definition order.
pub fn all_functions<T: Scalar>() -> Vec<TestFunction<T>> {
    vec![
        // fixed 1-D
        gramacy_lee_2012_function(),
        forrester_2008_function(),
        // fixed 2-D
        beale_function(),
        booth_function(),
        matyas_function(),
        himmelblau_function(),
        three_hump_camel_function(),
        six_hump_camel_function(),
        branin_function(),
        goldstein_price_function(),
        easom_function(),
        drop_wave_function(),
        eggholder_function(),
        holder_table_function(),
        cross_in_tray_function(),
        schaffer_n2_function(),
        bukin_n6_function(),
        levy_n13_function(),
        mccormick_function(),
        bohachevsky1_function(),
        freudenstein_roth_function(),
        bird_function(),
        shubert_function(),
        shubert_noisy_function(),
        shubert_rastrigin_function(),
        langermann_function(),
        de_jong_f5_function(),
        michalewicz_function(),
        // fixed 3, 4 and 6-D
        hartmann_3_function(),
        colville_function(),
        shekel_5_function(),
        shekel_7_function(),
        shekel_10_function(),
        hartmann_6_function(),
        // scalable
        sphere_function(),
        rosenbrock_function(),
        sum_squares_function(),
        rotated_hyper_ellipsoid_function(),
        zakharov_function(),
        dixon_price_function(),
        trid_function(),
        elliptic_function(),
        bent_cigar_function(),
        discus_function(),
        sum_of_different_powers_function(),
        brown_function(),
        exponential_function(),
        schwefel_2_22_function(),
        schwefel_2_21_function(),
        rastrigin_function(),
        schwefel_function(),
        styblinski_tang_function(),
        alpine_n1_function(),
        alpine_n2_function(),
        step_function(),
        qing_function(),
        xin_she_yang_n2_function(),
        cosine_mixture_function(),
        ackley_function(),
        griewank_function(),
        levy_function(),
        powell_function(),
        happy_cat_function(),
        salomon_function(),
        de_jong_f4_function(),
        xin_she_yang_n1_function(),
    ]
}

/// Test functions looked up by registered name.
#[derive(Debug, Clone)]
pub struct FunctionCatalog<T: Scalar> {
    functions: BTreeMap<&'static str, TestFunction<T>>,
}

impl<T: Scalar> FunctionCatalog<T> {
    /// Build the catalog from [`all_functions`].
    ///
    /// Records whose metadata fails [`TestFunction::check_consistency`] are
    /// still registered; the problem is reported through `log::warn!`.
    pub fn new() -> Self {
        let mut functions = BTreeMap::new();
        for record in all_functions::<T>() {
            if let Err(problem) = record.check_consistency() {
                log::warn!("inconsistent metadata: {}", problem);
            }
            if let Some(previous) = functions.insert(record.name(), record) {
                log::warn!("duplicate test function name: {}", previous.name());
            }
        }
        log::debug!("registered {} test functions", functions.len());
        Self { functions }
    }

    /// Record registered under `name`.
    pub fn get(&self, name: &str) -> Option<&TestFunction<T>> {
        self.functions.get(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Records in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = &TestFunction<T>> {
        self.functions.values()
    }

    /// Records tagged with `property`.
    pub fn with_property(&self, property: Property) -> impl Iterator<Item = &TestFunction<T>> {
        self.iter().filter(move |f| f.meta.has_property(property))
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bounds of `name` as `(lower, upper)` pairs at its default dimension.
    pub fn bounds(&self, name: &str) -> Option<Vec<(f64, f64)>> {
        let record = self.get(name)?;
        record.meta.bounds(record.meta.default_n()).ok()
    }
}

impl<T: Scalar> Default for FunctionCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique_and_sorted() {
        let catalog = FunctionCatalog::<f64>::new();
        assert_eq!(catalog.len(), all_functions::<f64>().len());
        let names: Vec<_> = catalog.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(catalog.get("rosenbrock").is_some());
        assert!(catalog.get("no_such_function").is_none());
    }

    #[test]
    fn test_catalog_property_queries() {
        let catalog = FunctionCatalog::<f64>::new();
        let noisy: Vec<_> = catalog
            .with_property(Property::HasNoise)
            .map(|f| f.name())
            .collect();
        assert_eq!(noisy, vec!["de_jong_f4", "shubert_noisy", "xin_she_yang_n1"]);

        let controversial: Vec<_> = catalog
            .with_property(Property::Controversial)
            .map(|f| f.name())
            .collect();
        assert!(controversial.contains(&"langermann"));
        assert!(controversial.contains(&"shekel_7"));
    }

    #[test]
    fn test_catalog_bounds_lookup() {
        let catalog = FunctionCatalog::<f64>::default();
        assert_eq!(catalog.bounds("booth"), Some(vec![(-10.0, 10.0); 2]));
        assert_eq!(catalog.bounds("unknown"), None);
    }
}
