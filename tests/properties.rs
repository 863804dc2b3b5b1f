//! Property tests over small random instances.
//!
//! `small_instance` uses small integers so every sum is exact in `f64`.
//! `fractional_instance` uses one-decimal weights and capacities, whose sums
//! round; values stay integral so spreads remain exact.

use mule_balance::exact::ExactRunner;
use mule_balance::greedy::GreedyRunner;
use mule_balance::local::{HillClimbingConfig, HillClimbingRunner};
use mule_balance::model::Instance;
use mule_balance::objective::spread;
use mule_balance::solution::SolveResult;
use proptest::prelude::*;

fn small_instance() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec((0u32..12, 0u32..20), 0..=6),
        prop::collection::vec(0u32..35, 1..=3),
    )
        .prop_map(|(items, caps)| {
            let items: Vec<(f64, f64)> = items
                .into_iter()
                .map(|(w, v)| (f64::from(w), f64::from(v)))
                .collect();
            let caps: Vec<f64> = caps.into_iter().map(f64::from).collect();
            Instance::from_pairs(&items, &caps).unwrap()
        })
}

fn fractional_instance() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec((0u32..60, 0u32..20), 0..=6),
        prop::collection::vec(0u32..120, 2..=3),
    )
        .prop_map(|(items, caps)| {
            let items: Vec<(f64, f64)> = items
                .into_iter()
                .map(|(w, v)| (f64::from(w) / 10.0, f64::from(v)))
                .collect();
            let caps: Vec<f64> = caps.into_iter().map(|c| f64::from(c) / 10.0).collect();
            Instance::from_pairs(&items, &caps).unwrap()
        })
}

/// Checks that hold whatever the rounding of weight sums.
fn check_consistent(result: &SolveResult) -> Result<(), TestCaseError> {
    let Some(containers) = &result.containers else {
        prop_assert!(result.spread.is_infinite());
        return Ok(());
    };
    for c in containers {
        prop_assert!(c.current_weight() <= c.capacity());
    }
    prop_assert_eq!(result.spread, spread(containers));
    Ok(())
}

fn check_assignment(instance: &Instance, result: &SolveResult) -> Result<(), TestCaseError> {
    let Some(containers) = &result.containers else {
        prop_assert!(result.spread.is_infinite());
        return Ok(());
    };

    prop_assert_eq!(containers.len(), instance.num_containers());
    for c in containers {
        prop_assert!(c.current_weight() <= c.capacity());
        let w: f64 = c.items().iter().map(|it| it.weight).sum();
        let v: f64 = c.items().iter().map(|it| it.value).sum();
        prop_assert_eq!(w, c.current_weight());
        prop_assert_eq!(v, c.current_value());
    }

    let mut placed: Vec<usize> = result.assignment().into_iter().map(|(id, _)| id).collect();
    placed.sort_unstable();
    let expected: Vec<usize> = (0..instance.num_items()).collect();
    prop_assert_eq!(placed, expected);

    prop_assert_eq!(result.total_value(), Some(instance.total_value()));
    prop_assert_eq!(result.spread, spread(containers));
    prop_assert!(result.spread >= 0.0);
    Ok(())
}

proptest! {
    #[test]
    fn results_are_valid_assignments(instance in small_instance()) {
        check_assignment(&instance, &ExactRunner::run(&instance))?;
        check_assignment(&instance, &GreedyRunner::run(&instance))?;
        check_assignment(
            &instance,
            &HillClimbingRunner::run(&instance, &HillClimbingConfig::default()).unwrap(),
        )?;
    }

    #[test]
    fn exact_is_a_lower_bound(instance in small_instance()) {
        let exact = ExactRunner::run(&instance);
        let greedy = GreedyRunner::run(&instance);
        let hill = HillClimbingRunner::run(&instance, &HillClimbingConfig::default()).unwrap();

        prop_assert!(exact.spread <= greedy.spread);
        prop_assert!(exact.spread <= hill.spread);
        if greedy.is_feasible() {
            prop_assert!(exact.is_feasible());
        }
    }

    #[test]
    fn hill_climbing_never_worsens_greedy(instance in small_instance()) {
        let greedy = GreedyRunner::run(&instance);
        let hill = HillClimbingRunner::run(&instance, &HillClimbingConfig::default()).unwrap();

        prop_assert_eq!(greedy.is_feasible(), hill.is_feasible());
        prop_assert!(hill.spread <= greedy.spread);
        prop_assert!(hill.iterations <= 1000);
    }

    #[test]
    fn fractional_weights_keep_reported_spread(instance in fractional_instance()) {
        let exact = ExactRunner::run(&instance);
        let greedy = GreedyRunner::run(&instance);
        let hill = HillClimbingRunner::run(&instance, &HillClimbingConfig::default()).unwrap();

        check_consistent(&exact)?;
        check_consistent(&greedy)?;
        check_consistent(&hill)?;
        prop_assert_eq!(greedy.is_feasible(), hill.is_feasible());
        prop_assert!(hill.spread <= greedy.spread);
        prop_assert_eq!(hill.total_value(), greedy.total_value());
    }

    #[test]
    fn deterministic_reruns(instance in small_instance()) {
        let g1 = GreedyRunner::run(&instance);
        let g2 = GreedyRunner::run(&instance);
        prop_assert_eq!(g1.containers, g2.containers);

        let e1 = ExactRunner::run(&instance);
        let e2 = ExactRunner::run(&instance);
        prop_assert_eq!(e1.spread, e2.spread);
        prop_assert_eq!(e1.containers, e2.containers);

        let config = HillClimbingConfig::default();
        let h1 = HillClimbingRunner::run(&instance, &config).unwrap();
        let h2 = HillClimbingRunner::run(&instance, &config).unwrap();
        prop_assert_eq!(h1.containers, h2.containers);
    }

    #[test]
    fn spread_zero_for_equal_values(value in 0u32..50, n in 1usize..6) {
        let items = vec![(1.0, f64::from(value)); n];
        let instance = Instance::from_pairs(&items, &vec![10.0; n]).unwrap();
        let exact = ExactRunner::run(&instance);
        prop_assert_eq!(exact.spread, 0.0);
    }
}
