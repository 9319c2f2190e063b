//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot). It then merges routes by
//! computing the "savings" of combining the end of one route with the start
//! of another:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Routes are merged in decreasing order of savings, as long as the merged
//! route keeps every dimension within capacity.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::debug;

use crate::error::RoutingError;
use crate::evaluation::{RouteEvaluator, SolutionEvaluator};
use crate::models::Solution;
use crate::routing::RoutingModel;

/// A savings value for merging two customers' routes.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: i64,
}

/// Constructs a solution using the Clarke-Wright savings algorithm.
///
/// Fails with [`RoutingError::NoSolution`] if a customer cannot be served
/// even on its own, or if more routes remain than vehicles.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::routing::RoutingModel;
/// use vrp_plot::constructive::savings;
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
/// let solution = savings(&model).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(solution.routes()[0].cost(), 6);
/// ```
pub fn savings(model: &RoutingModel) -> Result<Solution, RoutingError> {
    let n = model.num_nodes();
    let depot = model.depot();
    let customers: Vec<usize> = model.customers().collect();
    let vehicles = model.vehicles();
    let evaluator = RouteEvaluator::new(model, &vehicles[0]);

    let mut savings = Vec::with_capacity(customers.len() * customers.len() / 2);
    for (a, &i) in customers.iter().enumerate() {
        for &j in &customers[a + 1..] {
            let s = model.arc_cost(depot, i) + model.arc_cost(depot, j) - model.arc_cost(i, j);
            if s > 0 {
                savings.push(Saving { i, j, value: s });
            }
        }
    }

    // Stable sort keeps (i, j) order among equal savings
    savings.sort_by(|a, b| b.value.cmp(&a.value));

    // route_of[customer] = route index, route_members[r] = customers in order
    let mut route_of = vec![usize::MAX; n];
    let mut route_members: Vec<Vec<usize>> = vec![Vec::new(); n];

    for &c in &customers {
        if evaluator.metrics(&[c]).is_none() {
            debug!(node = c, "customer cannot be served alone");
            return Err(RoutingError::NoSolution);
        }
        route_of[c] = c;
        route_members[c].push(c);
    }

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];

        if ri == rj {
            continue;
        }

        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        // Arrange the merged sequence so that i and j become adjacent
        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (rj, ri, false, false)
        } else if j_at_end && i_at_start {
            (ri, rj, false, false)
        } else if i_at_end && j_at_end {
            (rj, ri, true, false)
        } else if i_at_start && j_at_start {
            (rj, ri, false, true)
        } else {
            continue;
        };

        let mut merged = route_members[merge_into].clone();
        if reverse_into {
            merged.reverse();
        }
        let mut from_members = route_members[merge_from].clone();
        if reverse_from {
            from_members.reverse();
        }
        merged.extend(from_members);

        if evaluator.metrics(&merged).is_none() {
            continue;
        }

        route_members[merge_from].clear();
        for &c in &merged {
            route_of[c] = merge_into;
        }
        route_members[merge_into] = merged;
    }

    let routes: Vec<Vec<usize>> = route_members.into_iter().filter(|r| !r.is_empty()).collect();
    if routes.len() > model.num_vehicles() {
        debug!(
            routes = routes.len(),
            vehicles = model.num_vehicles(),
            "savings left more routes than vehicles"
        );
        return Err(RoutingError::NoSolution);
    }

    let (solution, _) = SolutionEvaluator::new(model).evaluate(&routes);
    Ok(solution)
}
