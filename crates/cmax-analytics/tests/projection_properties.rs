//! Property-based tests for projection and simulation invariants.

use cmax_analytics::{
    annualized_return, compound_growth, expected_value, simple_growth, simulate, ScenarioSet,
};
use cmax_config::DashboardConfig;
use proptest::prelude::*;

fn principal_strategy() -> impl Strategy<Value = f64> {
    100.0..1_000_000.0f64
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    0.0..15.0f64
}

/// Whole-percent weights summing to 100.
fn weights_strategy() -> impl Strategy<Value = [u32; 3]> {
    (0u32..=100).prop_flat_map(|a| (Just(a), 0u32..=(100 - a)).prop_map(|(a, b)| [a, b, 100 - a - b]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Reinvesting never loses to paying out for horizons of a year or more.
    #[test]
    fn compound_dominates_simple(
        principal in principal_strategy(),
        rate in rate_strategy(),
        years in 1u32..40,
    ) {
        let years = f64::from(years);
        let compound = compound_growth(principal, rate, years);
        let simple = simple_growth(principal, rate, years);
        prop_assert!(compound + 1e-6 >= simple, "compound {} < simple {}", compound, simple);
    }

    /// The annualized return of a compounded projection is its rate.
    #[test]
    fn annualized_recovers_rate(
        principal in principal_strategy(),
        rate in rate_strategy(),
        years in 1u32..40,
    ) {
        let years = f64::from(years);
        let final_value = compound_growth(principal, rate, years);
        let recovered = annualized_return(principal, final_value, years).unwrap();
        prop_assert!((recovered - rate).abs() < 1e-6);
    }

    /// Expected value lies between the worst and best finals.
    #[test]
    fn expected_value_is_bounded(
        principal in principal_strategy(),
        rates in prop::array::uniform3(rate_strategy()),
        weights in weights_strategy(),
        years in 1u32..30,
    ) {
        let set = ScenarioSet::from_percentages(rates, weights);
        let years = f64::from(years);
        let result = simulate(&set, principal, years, &DashboardConfig::default()).unwrap();

        let tol = 1e-6 * result.best_final;
        prop_assert!(result.expected_value <= result.best_final + tol);
        prop_assert!(result.expected_value >= result.worst_final - tol);
        prop_assert!(result.spread >= 0.0);

        let direct = expected_value(set.scenarios(), principal, years);
        prop_assert!((direct - result.expected_value).abs() < 1e-9 * direct.max(1.0));
    }

    /// Weights more than one point off 100% are always rejected.
    #[test]
    fn off_total_weights_rejected(
        a in 0u32..=100,
        b in 0u32..=100,
        c in 0u32..=100,
    ) {
        prop_assume!((a + b + c).abs_diff(100) > 1);
        let set = ScenarioSet::from_percentages([5.5, 4.5, 3.5], [a, b, c]);
        prop_assert!(simulate(&set, 10_000.0, 5.0, &DashboardConfig::default()).is_err());
    }
}
