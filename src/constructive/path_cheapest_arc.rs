//! Path-cheapest-arc constructive heuristic.
//!
//! Builds routes one vehicle at a time: starting from the depot, always
//! extend the route along the cheapest arc to an unvisited node whose
//! addition keeps every dimension feasible, return to the depot included.
//! When no node fits, the route is closed and the next vehicle starts.
//!
//! # Complexity
//!
//! O(n² × L) where n = number of nodes and L = route length (feasibility is
//! re-checked on the extended route).

use tracing::debug;

use crate::error::RoutingError;
use crate::evaluation::{RouteEvaluator, SolutionEvaluator};
use crate::models::Solution;
use crate::routing::RoutingModel;

/// Constructs a solution using the path-cheapest-arc heuristic.
///
/// Ties between equally cheap arcs go to the lowest node index. Fails with
/// [`RoutingError::NoSolution`] when the fleet runs out before every node
/// is placed.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::routing::RoutingModel;
/// use vrp_plot::constructive::path_cheapest_arc;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 1, 2, 3],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let mut model = RoutingModel::new(4, 1, 0).unwrap();
/// let distance = model.register_transit_callback(dm);
/// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
///
/// let solution = path_cheapest_arc(&model).unwrap();
/// assert_eq!(solution.routes()[0].nodes(), vec![1, 2, 3]);
/// ```
pub fn path_cheapest_arc(model: &RoutingModel) -> Result<Solution, RoutingError> {
    let n = model.num_nodes();
    let mut visited = vec![false; n];
    visited[model.depot()] = true;
    let mut remaining = n - 1;
    let mut routes: Vec<Vec<usize>> = Vec::with_capacity(model.num_vehicles());

    for vehicle in model.vehicles() {
        let evaluator = RouteEvaluator::new(model, &vehicle);
        let mut route: Vec<usize> = Vec::new();
        let mut current = vehicle.depot();

        while remaining > 0 {
            let mut best: Option<(usize, i64)> = None;
            for next in 0..n {
                if visited[next] {
                    continue;
                }
                let cost = model.arc_cost_for_vehicle(current, next, vehicle.id());
                if best.is_some_and(|(_, b)| cost >= b) {
                    continue;
                }
                route.push(next);
                let feasible = evaluator.metrics(&route).is_some();
                route.pop();
                if feasible {
                    best = Some((next, cost));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    remaining -= 1;
                    route.push(next);
                    current = next;
                }
                None => break,
            }
        }

        debug!(vehicle = vehicle.id(), stops = route.len(), "path cheapest arc closed route");
        routes.push(route);
    }

    if remaining > 0 {
        return Err(RoutingError::NoSolution);
    }

    let (solution, _) = SolutionEvaluator::new(model).evaluate(&routes);
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn line_model(vehicles: usize, capacity: Option<i64>) -> RoutingModel {
        // Nodes on a line at positions 0, 1, 2, 3, 4.
        let rows: Vec<Vec<i64>> = (0..5)
            .map(|i: i64| (0..5).map(|j: i64| (i - j).abs()).collect())
            .collect();
        let dm = DistanceMatrix::from_rows(&rows).expect("valid");
        let mut model = RoutingModel::new(5, vehicles, 0).expect("valid");
        let distance = model.register_transit_callback(dm);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        if let Some(cap) = capacity {
            model
                .add_dimension(distance, 0, cap, true, "Distance")
                .expect("added");
        }
        model
    }

    #[test]
    fn test_single_vehicle_follows_line() {
        let model = line_model(1, None);
        let solution = path_cheapest_arc(&model).expect("solvable");
        assert_eq!(solution.routes()[0].nodes(), vec![1, 2, 3, 4]);
        assert_eq!(solution.routes()[0].cost(), 8);
    }

    #[test]
    fn test_fills_vehicles_in_order() {
        let model = line_model(3, None);
        let solution = path_cheapest_arc(&model).expect("solvable");
        assert_eq!(solution.num_routes(), 3);
        assert_eq!(solution.routes()[0].len(), 4);
        assert!(solution.routes()[1].is_empty());
        assert!(solution.routes()[2].is_empty());
    }

    #[test]
    fn test_capacity_splits_routes() {
        // Positions 0, -1, 1, -2, 2: one side per vehicle under capacity 4.
        let pos: [i64; 5] = [0, -1, 1, -2, 2];
        let rows: Vec<Vec<i64>> = pos
            .iter()
            .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let dm = DistanceMatrix::from_rows(&rows).expect("valid");
        let mut model = RoutingModel::new(5, 2, 0).expect("valid");
        let distance = model.register_transit_callback(dm);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        model
            .add_dimension(distance, 0, 4, true, "Distance")
            .expect("added");

        let solution = path_cheapest_arc(&model).expect("solvable");
        assert_eq!(solution.routes()[0].nodes(), vec![1, 3]);
        assert_eq!(solution.routes()[1].nodes(), vec![2, 4]);
        assert_eq!(solution.max_route_cost(), 4);
    }

    #[test]
    fn test_not_enough_vehicles() {
        // Node 4 alone needs 8 > 6.
        let model = line_model(4, Some(6));
        assert!(matches!(
            path_cheapest_arc(&model),
            Err(RoutingError::NoSolution)
        ));
    }

    #[test]
    fn test_single_node_model() {
        let mut model = RoutingModel::new(1, 2, 0).expect("valid");
        let distance = model.register_transit_callback(|_: usize, _: usize| 0_i64);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        let solution = path_cheapest_arc(&model).expect("trivial");
        assert_eq!(solution.num_served(), 0);
        assert_eq!(solution.num_routes(), 2);
    }
}
