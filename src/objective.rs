//! Objective shared by every solver.

use crate::model::Container;

/// Spread of total value across containers: `max - min` of
/// [`current_value`](Container::current_value).
///
/// Returns `0.0` for an empty slice.
pub fn spread(containers: &[Container]) -> f64 {
    let mut values = containers.iter().map(Container::current_value);
    let Some(first) = values.next() else {
        return 0.0;
    };
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}
