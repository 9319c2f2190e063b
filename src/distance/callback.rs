//! Transit callbacks: the cost of travelling between two nodes.

use super::DistanceMatrix;

/// Returns the transit value (distance, time, load, ...) between two nodes.
///
/// Callbacks are registered on a [`RoutingModel`](crate::routing::RoutingModel)
/// and referenced by index from arc costs and dimensions. A distance matrix is
/// a callback on its own; closures work too.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::{DistanceMatrix, TransitCallback};
///
/// let dm = DistanceMatrix::from_data(2, vec![0, 7, 7, 0]).unwrap();
/// assert_eq!(dm.transit(0, 1), 7);
///
/// let unit = |from: usize, to: usize| i64::from(from != to);
/// assert_eq!(unit.transit(3, 3), 0);
/// assert_eq!(unit.transit(3, 4), 1);
/// ```
pub trait TransitCallback: Send + Sync {
    /// Transit value from node `from` to node `to`.
    fn transit(&self, from: usize, to: usize) -> i64;

    /// Number of nodes the callback is defined on, if bounded.
    fn size(&self) -> Option<usize> {
        None
    }
}

impl TransitCallback for DistanceMatrix {
    fn transit(&self, from: usize, to: usize) -> i64 {
        self.get(from, to)
    }

    fn size(&self) -> Option<usize> {
        Some(DistanceMatrix::size(self))
    }
}

impl<F> TransitCallback for F
where
    F: Fn(usize, usize) -> i64 + Send + Sync,
{
    fn transit(&self, from: usize, to: usize) -> i64 {
        self(from, to)
    }
}
