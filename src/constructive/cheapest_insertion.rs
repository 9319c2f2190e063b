//! Parallel cheapest insertion.
//!
//! All vehicles start empty. At every step, the unassigned node with the
//! cheapest feasible insertion (over all routes and positions) is inserted
//! there. Routes therefore grow in parallel rather than one after another.
//!
//! # Complexity
//!
//! O(n³ × L) in the worst case, with L the route length re-checked for
//! feasibility.

use crate::error::RoutingError;
use crate::evaluation::{RouteEvaluator, SolutionEvaluator};
use crate::models::Solution;
use crate::routing::RoutingModel;

/// Arc cost increase of inserting `node` at `pos` in `route`.
pub(crate) fn insertion_delta(
    model: &RoutingModel,
    route: &[usize],
    pos: usize,
    node: usize,
) -> i64 {
    let depot = model.depot();
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() { depot } else { route[pos] };
    model.arc_cost(prev, node) + model.arc_cost(node, next) - model.arc_cost(prev, next)
}

/// Constructs a solution by parallel cheapest insertion.
///
/// Fails with [`RoutingError::NoSolution`] when a node has no feasible
/// insertion left.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::routing::RoutingModel;
/// use vrp_plot::constructive::parallel_cheapest_insertion;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 2, 2],
///     vec![2, 0, 4],
///     vec![2, 4, 0],
/// ]).unwrap();
/// let mut model = RoutingModel::new(3, 2, 0).unwrap();
/// let distance = model.register_transit_callback(dm);
/// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
///
/// let solution = parallel_cheapest_insertion(&model).unwrap();
/// assert_eq!(solution.num_served(), 2);
/// assert_eq!(solution.total_cost(), 8);
/// ```
pub fn parallel_cheapest_insertion(model: &RoutingModel) -> Result<Solution, RoutingError> {
    let vehicles = model.vehicles();
    let mut routes: Vec<Vec<usize>> = vec![Vec::new(); vehicles.len()];
    let mut unassigned: Vec<usize> = model.customers().collect();

    while !unassigned.is_empty() {
        // (index in unassigned, vehicle, position, delta)
        let mut best: Option<(usize, usize, usize, i64)> = None;

        for (ui, &node) in unassigned.iter().enumerate() {
            let mut node_insertable = false;
            for vehicle in &vehicles {
                let evaluator = RouteEvaluator::new(model, vehicle);
                let route = &routes[vehicle.id()];
                for pos in 0..=route.len() {
                    let delta = insertion_delta(model, route, pos, node);
                    let mut candidate = route.clone();
                    candidate.insert(pos, node);
                    if evaluator.metrics(&candidate).is_none() {
                        continue;
                    }
                    node_insertable = true;
                    if best.is_none_or(|b| delta < b.3) {
                        best = Some((ui, vehicle.id(), pos, delta));
                    }
                }
            }
            if !node_insertable {
                return Err(RoutingError::NoSolution);
            }
        }

        let Some((ui, vehicle, pos, _)) = best else {
            return Err(RoutingError::NoSolution);
        };
        let node = unassigned.remove(ui);
        routes[vehicle].insert(pos, node);
    }

    let (solution, _) = SolutionEvaluator::new(model).evaluate(&routes);
    Ok(solution)
}
