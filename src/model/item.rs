//! Indivisible units to be assigned.

/// Caller-assigned item identifier, unique within an [`Instance`](super::Instance).
pub type ItemId = usize;

/// An indivisible unit with a weight and a value.
///
/// Items are compared by [`id`](Item::id) wherever membership matters: two
/// items with equal weight and value are still distinct units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(id: ItemId, weight: f64, value: f64) -> Self {
        Self { id, weight, value }
    }
}
