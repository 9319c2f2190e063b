//! Route and visit types.

use serde::{Deserialize, Serialize};

/// A single stop within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Node being visited.
    pub node: usize,
    /// Arc cost accumulated on arrival at this node.
    pub cumul: i64,
}

/// An ordered sequence of visits assigned to a single vehicle.
///
/// A route starts and ends at the vehicle's depot (not stored in `visits`).
/// An unused vehicle has an empty route whose path is `[depot, depot]`.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::{Route, Visit};
///
/// let mut route = Route::new(0, 0);
/// route.push_visit(Visit { node: 7, cumul: 194 });
/// route.set_cost(388);
/// assert_eq!(route.path(), vec![0, 7, 0]);
/// assert_eq!(route.cost(), 388);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    depot: usize,
    visits: Vec<Visit>,
    cost: i64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize, depot: usize) -> Self {
        Self {
            vehicle_id,
            depot,
            visits: Vec::new(),
            cost: 0,
        }
    }

    /// Appends a visit to the end of this route.
    pub fn push_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Depot at both ends of the route.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Returns the ordered sequence of visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the number of visits (excluding depot).
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if the vehicle is unused.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Returns the visited nodes in order, without the depot.
    pub fn nodes(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.node).collect()
    }

    /// Returns the full node path, depot at both ends.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.visits.len() + 2);
        path.push(self.depot);
        path.extend(self.visits.iter().map(|v| v.node));
        path.push(self.depot);
        path
    }

    /// Consecutive `(from, to)` arcs of the path.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        self.path().windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Sum of the arc costs along the path (set by the evaluator).
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Sets the route cost.
    pub fn set_cost(&mut self, cost: i64) {
        self.cost = cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(3, 0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.vehicle_id(), 3);
        assert_eq!(r.cost(), 0);
        assert_eq!(r.path(), vec![0, 0]);
        assert_eq!(r.arcs(), vec![(0, 0)]);
    }

    #[test]
    fn test_route_push_visit() {
        let mut r = Route::new(1, 0);
        r.push_visit(Visit { node: 5, cumul: 10 });
        r.push_visit(Visit { node: 3, cumul: 25 });
        assert_eq!(r.len(), 2);
        assert_eq!(r.nodes(), vec![5, 3]);
        assert_eq!(r.path(), vec![0, 5, 3, 0]);
        assert_eq!(r.arcs(), vec![(0, 5), (5, 3), (3, 0)]);
    }

    #[test]
    fn test_route_non_zero_depot() {
        let mut r = Route::new(0, 2);
        r.push_visit(Visit { node: 1, cumul: 4 });
        assert_eq!(r.path(), vec![2, 1, 2]);
    }
}
