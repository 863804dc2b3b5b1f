//! Validated solver input.

use super::container::{Container, ContainerTemplate};
use super::item::Item;
use crate::error::InstanceError;
use std::collections::HashSet;

/// An ordered list of items and an ordered list of container templates.
///
/// Construction through [`Instance::new`] rejects negative or non-finite
/// weights and values, negative or NaN capacities, and duplicate ids, so
/// every solver receives well-formed input. An infinite capacity is an
/// unbounded container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instance {
    items: Vec<Item>,
    templates: Vec<ContainerTemplate>,
}

impl Instance {
    pub fn new(
        items: Vec<Item>,
        templates: Vec<ContainerTemplate>,
    ) -> Result<Self, InstanceError> {
        let mut item_ids = HashSet::with_capacity(items.len());
        for item in &items {
            if !is_finite_amount(item.weight) {
                return Err(InstanceError::NegativeWeight {
                    id: item.id,
                    weight: item.weight,
                });
            }
            if !is_finite_amount(item.value) {
                return Err(InstanceError::NegativeValue {
                    id: item.id,
                    value: item.value,
                });
            }
            if !item_ids.insert(item.id) {
                return Err(InstanceError::DuplicateItemId(item.id));
            }
        }

        let mut container_ids = HashSet::with_capacity(templates.len());
        for t in &templates {
            if t.capacity.is_nan() || t.capacity < 0.0 {
                return Err(InstanceError::NegativeCapacity {
                    id: t.id,
                    capacity: t.capacity,
                });
            }
            if !container_ids.insert(t.id) {
                return Err(InstanceError::DuplicateContainerId(t.id));
            }
        }

        Ok(Self { items, templates })
    }

    /// Builds an instance from data already known to be well formed.
    pub(crate) fn new_unchecked(items: Vec<Item>, templates: Vec<ContainerTemplate>) -> Self {
        debug_assert!(Self::new(items.clone(), templates.clone()).is_ok());
        Self { items, templates }
    }

    /// Shorthand for `(weight, value)` items with ids `0..n` and
    /// containers with ids `0..m`.
    pub fn from_pairs(items: &[(f64, f64)], capacities: &[f64]) -> Result<Self, InstanceError> {
        Self::new(
            items
                .iter()
                .enumerate()
                .map(|(id, &(w, v))| Item::new(id, w, v))
                .collect(),
            capacities
                .iter()
                .enumerate()
                .map(|(id, &c)| ContainerTemplate::new(id, c))
                .collect(),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn templates(&self) -> &[ContainerTemplate] {
        &self.templates
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn num_containers(&self) -> usize {
        self.templates.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|it| it.weight).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|it| it.value).sum()
    }

    pub fn total_capacity(&self) -> f64 {
        self.templates.iter().map(|t| t.capacity).sum()
    }

    /// Fresh, empty containers in template order.
    pub fn working_set(&self) -> Vec<Container> {
        self.templates.iter().map(ContainerTemplate::instantiate).collect()
    }
}

fn is_finite_amount(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_instance() {
        let inst = Instance::from_pairs(&[(10.0, 5.0), (15.0, 8.0)], &[30.0, 30.0]).unwrap();
        assert_eq!(inst.num_items(), 2);
        assert_eq!(inst.num_containers(), 2);
        assert!((inst.total_weight() - 25.0).abs() < 1e-12);
        assert!((inst.total_value() - 13.0).abs() < 1e-12);
        assert!((inst.total_capacity() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = Instance::from_pairs(&[(-1.0, 5.0)], &[30.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeWeight { id: 0, .. }));
    }

    #[test]
    fn test_rejects_nan_value() {
        let err = Instance::from_pairs(&[(1.0, f64::NAN)], &[30.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeValue { id: 0, .. }));
    }

    #[test]
    fn test_rejects_infinite_amounts() {
        let err = Instance::from_pairs(&[(1.0, 1.0), (f64::INFINITY, 1.0)], &[30.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeWeight { id: 1, .. }));

        let err = Instance::from_pairs(&[(1.0, f64::INFINITY)], &[30.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeValue { id: 0, .. }));

        let err = Instance::from_pairs(&[(1.0, f64::NEG_INFINITY)], &[30.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeValue { id: 0, .. }));
    }

    #[test]
    fn test_unbounded_capacity() {
        let inst = Instance::from_pairs(&[(1e300, 1.0)], &[f64::INFINITY]).unwrap();
        assert!(inst.working_set()[0].fits(&inst.items()[0]));

        let err = Instance::from_pairs(&[(1.0, 1.0)], &[f64::NAN]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeCapacity { id: 0, .. }));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let err = Instance::from_pairs(&[(1.0, 1.0)], &[10.0, -3.0]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeCapacity { id: 1, .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let items = vec![Item::new(4, 1.0, 1.0), Item::new(4, 2.0, 2.0)];
        let err = Instance::new(items, vec![ContainerTemplate::new(0, 10.0)]).unwrap_err();
        assert_eq!(err, InstanceError::DuplicateItemId(4));

        let templates = vec![ContainerTemplate::new(1, 10.0), ContainerTemplate::new(1, 5.0)];
        let err = Instance::new(vec![], templates).unwrap_err();
        assert_eq!(err, InstanceError::DuplicateContainerId(1));
    }

    #[test]
    fn test_non_contiguous_ids() {
        let items = vec![Item::new(10, 1.0, 1.0), Item::new(3, 2.0, 2.0)];
        assert!(Instance::new(items, vec![ContainerTemplate::new(9, 10.0)]).is_ok());
    }

    #[test]
    fn test_working_set_is_fresh() {
        let inst = Instance::from_pairs(&[(1.0, 1.0)], &[5.0, 6.0]).unwrap();
        let mut a = inst.working_set();
        a[0].add_item(inst.items()[0]).unwrap();

        let b = inst.working_set();
        assert!(b.iter().all(|c| c.is_empty()));
        assert_eq!(b[1].id(), 1);
        assert!((b[1].capacity() - 6.0).abs() < 1e-12);
    }
}
