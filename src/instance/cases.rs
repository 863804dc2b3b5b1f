//! Fixed illustrative scenarios.
//!
//! Each scenario exercises one property of the problem: balanced and
//! infeasible packings, extreme values, partition-like structure, unequal
//! capacities and degenerate sizes.

use crate::model::{ContainerTemplate, Instance, Item};

/// A fixed scenario with a short key and a human-readable description.
#[derive(Debug, Clone)]
pub struct NamedInstance {
    /// Lookup key: `"1"` to `"11"`, then `"12a"`, `"12b"`, `"12c"`.
    pub key: &'static str,
    pub description: &'static str,
    pub instance: Instance,
}

/// Looks up a scenario by key.
pub fn case(key: &str) -> Option<NamedInstance> {
    all_cases()
        .into_iter()
        .find(|c| c.key.eq_ignore_ascii_case(key))
}

/// Every scenario, in key order.
pub fn all_cases() -> Vec<NamedInstance> {
    vec![
        named(
            "1",
            "simple feasible: 2 containers of 30, 4 mixed items",
            &[(10, 5), (15, 8), (12, 6), (8, 4)],
            &[30, 30],
        ),
        named(
            "2",
            "infeasible by capacity: total weight 150 over total capacity 120",
            &[(50, 30), (50, 30), (50, 30)],
            &[60, 60],
        ),
        named(
            "3",
            "extreme values: one light precious item, one heavy cheap item",
            &[(1, 1000), (100, 1), (50, 500), (50, 500)],
            &[100, 100],
        ),
        named(
            "4",
            "partition-like: weight equals value, total exactly fills both containers",
            &[(30, 30), (20, 20), (20, 20), (15, 15), (15, 15)],
            &[50, 50],
        ),
        named(
            "5",
            "identical capacities: 3 containers of 100, total value divisible by 3",
            &[(10, 80), (10, 90), (10, 100), (10, 110), (10, 120), (10, 100)],
            &[100, 100, 100],
        ),
        named(
            "6",
            "very unequal capacities: 30, 50 and 100",
            &[(10, 20), (15, 25), (20, 30), (25, 35), (30, 40), (35, 45)],
            &[30, 50, 100],
        ),
        named(
            "7",
            "one dominant item: 48 of 50 capacity with value 100",
            &[(48, 100), (10, 20), (10, 20)],
            &[50, 50],
        ),
        named(
            "8",
            "many optimal solutions: 4 identical items",
            &[(10, 10); 4],
            &[20, 20],
        ),
        named(
            "9",
            "many containers: 7 containers, 21 identical items",
            &[(10, 10); 21],
            &[50; 7],
        ),
        named(
            "10",
            "inverse weight/value relation",
            &[(5, 100), (10, 80), (15, 60), (20, 40)],
            &[50, 50],
        ),
        named(
            "11",
            "report example: weight equals value, 5 small items",
            &[(5, 5), (5, 5), (4, 4), (4, 4), (4, 4)],
            &[20, 20],
        ),
        named("12a", "no items, 2 containers", &[], &[50, 50]),
        named(
            "12b",
            "single container, 3 items",
            &[(10, 20), (15, 25), (20, 30)],
            &[100],
        ),
        named("12c", "3 containers, single item", &[(10, 20)], &[50, 50, 50]),
    ]
}

fn named(
    key: &'static str,
    description: &'static str,
    items: &[(u32, u32)],
    capacities: &[u32],
) -> NamedInstance {
    let items = items
        .iter()
        .enumerate()
        .map(|(id, &(w, v))| Item::new(id, f64::from(w), f64::from(v)))
        .collect();
    let templates = capacities
        .iter()
        .enumerate()
        .map(|(id, &c)| ContainerTemplate::new(id, f64::from(c)))
        .collect();
    NamedInstance {
        key,
        description,
        instance: Instance::new_unchecked(items, templates),
    }
}
