//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of constraint violation in a route or solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// A dimension cumul went above its capacity.
    CapacityExceeded {
        /// Dimension name.
        dimension: String,
        /// Vehicle whose route breaks the bound.
        vehicle_id: usize,
        /// Offending cumul value.
        cumul: i64,
        /// Dimension capacity.
        capacity: i64,
    },
    /// A node is not on any route.
    Unvisited {
        /// Missing node.
        node: usize,
    },
    /// A node appears more than once across all routes.
    VisitedTwice {
        /// Duplicated node.
        node: usize,
    },
    /// The depot appears as an intermediate stop.
    DepotVisited {
        /// Vehicle whose route contains the depot.
        vehicle_id: usize,
    },
    /// More routes than vehicles.
    FleetExceeded {
        /// Number of routes given.
        routes: usize,
        /// Fleet size.
        vehicles: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete solution: one route per vehicle, in vehicle order.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(0, 0));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.max_route_cost(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    objective: i64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            objective: 0,
        }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (including unused vehicles).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of vehicles that leave the depot.
    pub fn num_used_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Objective value: arc costs plus dimension span costs.
    pub fn objective(&self) -> i64 {
        self.objective
    }

    /// Sets the objective value.
    pub fn set_objective(&mut self, objective: i64) {
        self.objective = objective;
    }

    /// Sum of route costs.
    pub fn total_cost(&self) -> i64 {
        self.routes.iter().map(|r| r.cost()).sum()
    }

    /// Cost of the longest route, zero for an empty solution.
    pub fn max_route_cost(&self) -> i64 {
        self.routes.iter().map(|r| r.cost()).max().unwrap_or(0)
    }

    /// Total number of nodes served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visit;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.objective(), 0);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.max_route_cost(), 0);
    }

    #[test]
    fn test_solution_with_routes() {
        let mut sol = Solution::new();

        let mut r1 = Route::new(0, 0);
        r1.push_visit(Visit { node: 1, cumul: 25 });
        r1.set_cost(50);

        let mut r2 = Route::new(1, 0);
        r2.push_visit(Visit { node: 2, cumul: 10 });
        r2.push_visit(Visit { node: 3, cumul: 40 });
        r2.set_cost(80);

        sol.add_route(r1);
        sol.add_route(r2);
        sol.add_route(Route::new(2, 0));
        sol.set_objective(8130);

        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.num_used_vehicles(), 2);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.total_cost(), 130);
        assert_eq!(sol.max_route_cost(), 80);
        assert_eq!(sol.objective(), 8130);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            dimension: "Distance".into(),
            vehicle_id: 0,
            cumul: 3100,
            capacity: 3000,
        });
        assert!(matches!(
            v.kind,
            ViolationType::CapacityExceeded { cumul: 3100, .. }
        ));
    }

    #[test]
    fn test_solution_json() {
        let mut sol = Solution::new();
        let mut r = Route::new(0, 0);
        r.push_visit(Visit { node: 4, cumul: 7 });
        r.set_cost(14);
        sol.add_route(r);
        sol.set_objective(14);

        let json = serde_json::to_string(&sol).expect("serializable");
        let back: Solution = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, sol);
    }
}
