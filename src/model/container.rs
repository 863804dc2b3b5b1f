//! Capacity-bounded containers ("mules").

use super::item::{Item, ItemId};
use crate::error::ContainerError;

/// Container identifier, unique within an [`Instance`](super::Instance).
pub type ContainerId = usize;

/// Read-only description of a container: id and capacity.
///
/// Templates are never mutated by a solve; they are turned into fresh
/// [`Container`]s with [`instantiate`](ContainerTemplate::instantiate).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerTemplate {
    pub id: ContainerId,
    pub capacity: f64,
}

impl ContainerTemplate {
    pub fn new(id: ContainerId, capacity: f64) -> Self {
        Self { id, capacity }
    }

    /// Builds an empty working container from this template.
    pub fn instantiate(&self) -> Container {
        Container::new(self.id, self.capacity)
    }
}

/// A container holding an ordered list of assigned items.
///
/// `current_weight` and `current_value` are maintained incrementally by
/// [`add_item`](Container::add_item) and [`remove_item`](Container::remove_item),
/// and `current_weight <= capacity` holds after every successful call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    id: ContainerId,
    capacity: f64,
    items: Vec<Item>,
    current_weight: f64,
    current_value: f64,
}

impl Container {
    /// Creates an empty container.
    pub fn new(id: ContainerId, capacity: f64) -> Self {
        Self {
            id,
            capacity,
            items: Vec::new(),
            current_weight: 0.0,
            current_value: 0.0,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Items in assignment order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Capacity still available.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.current_weight
    }

    /// Whether `item` would fit on top of the current load.
    pub fn fits(&self, item: &Item) -> bool {
        self.current_weight + item.weight <= self.capacity
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|it| it.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` if it fits within the remaining capacity.
    pub fn add_item(&mut self, item: Item) -> Result<(), ContainerError> {
        if !self.fits(&item) {
            return Err(ContainerError::CapacityExceeded {
                container: self.id,
                item: item.id,
                load: self.current_weight,
                weight: item.weight,
                capacity: self.capacity,
            });
        }
        self.current_weight += item.weight;
        self.current_value += item.value;
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with the given id and returns it.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item, ContainerError> {
        let pos = self
            .items
            .iter()
            .position(|it| it.id == id)
            .ok_or(ContainerError::ItemNotFound {
                container: self.id,
                item: id,
            })?;
        let item = self.items.remove(pos);
        self.current_weight -= item.weight;
        self.current_value -= item.value;
        Ok(item)
    }

    /// Empties the container. Id and capacity are kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.current_weight = 0.0;
        self.current_value = 0.0;
    }

    /// Moves the item with the given id to the back of the assignment
    /// order. Totals are untouched.
    pub(crate) fn move_to_back(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|it| it.id == id) else {
            return false;
        };
        let item = self.items.remove(pos);
        self.items.push(item);
        true
    }
}
