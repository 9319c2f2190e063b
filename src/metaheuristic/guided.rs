//! Guided local search.
//!
//! # Algorithm
//!
//! 1. Descend to a local optimum of the objective.
//! 2. Penalize the arcs of the current plan with maximum utility
//!    `cost(i, j) / (1 + penalty(i, j))`.
//! 3. Descend on the augmented cost `objective + λ Σ penalty(arc)`, where
//!    `λ = coefficient × objective / arcs` of the first local optimum.
//! 4. Repeat from 2 until the search limit is reached.
//!
//! Every plan visited is checked against the best real objective.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//! application to the traveling salesman problem", *European Journal of
//! Operational Research* 113(2), 469-499.

use tracing::debug;

use crate::local_search::{ArcPenalties, LocalSearch, RoutePlan, Scorer, SearchLimit};
use crate::routing::{RoutingModel, SearchParameters};

use super::report_improvement;

/// Runs guided local search from `plan` and returns the best plan found.
///
/// Without limits in `params` the search stops after
/// [`DEFAULT_METAHEURISTIC_ITERATIONS`](crate::routing::DEFAULT_METAHEURISTIC_ITERATIONS).
pub fn guided_local_search(
    model: &RoutingModel,
    plan: RoutePlan,
    params: &SearchParameters,
) -> RoutePlan {
    let ls = LocalSearch::default();
    let mut limit = SearchLimit::new(params.time_limit, params.iteration_budget());

    let mut current = plan;
    ls.descend(&mut current, &Scorer::new(model), &mut limit);
    let mut best = current.clone();
    let mut best_objective = best.objective(model);
    report_improvement(params, "guided-local-search", best_objective);

    let num_arcs = arcs(model, &current).len() as i64;
    if num_arcs == 0 {
        return best;
    }
    let lambda = ((params.guided_local_search_lambda_coefficient * best_objective as f64
        / num_arcs as f64)
        .round() as i64)
        .max(1);
    debug!(lambda, num_arcs, "guided local search started");

    let mut penalties = ArcPenalties::new(model.num_nodes());
    while !limit.reached() {
        if !penalize(model, &current, &mut penalties) {
            break;
        }
        limit.tick();

        let scorer = Scorer::with_penalties(model, &penalties, lambda);
        ls.descend_with(&mut current, &scorer, &mut limit, |p| {
            let objective = p.objective(model);
            if objective < best_objective {
                best_objective = objective;
                best = p.clone();
                report_improvement(params, "guided-local-search", objective);
            }
        });
    }

    debug!(
        iterations = limit.iterations(),
        objective = best_objective,
        "guided local search finished"
    );
    best
}

/// Arcs of every non-empty route, depot legs included.
fn arcs(model: &RoutingModel, plan: &RoutePlan) -> Vec<(usize, usize)> {
    let depot = model.depot();
    let mut arcs = Vec::new();
    for route in plan.routes().iter().filter(|r| !r.is_empty()) {
        let mut prev = depot;
        for &node in route.iter().chain(std::iter::once(&depot)) {
            arcs.push((prev, node));
            prev = node;
        }
    }
    arcs
}

/// Raises the penalty of the maximum-utility arcs. Returns `false` if the
/// plan has no arcs.
fn penalize(model: &RoutingModel, plan: &RoutePlan, penalties: &mut ArcPenalties) -> bool {
    let arcs = arcs(model, plan);
    // utility = cost / (1 + penalty), compared as fractions
    let utility = |&(i, j): &(usize, usize)| (model.arc_cost(i, j), 1 + penalties.get(i, j));
    let Some(max) = arcs
        .iter()
        .map(utility)
        .max_by(|a, b| (a.0 * b.1).cmp(&(b.0 * a.1)))
    else {
        return false;
    };
    let selected: Vec<(usize, usize)> = arcs
        .iter()
        .filter(|arc| {
            let u = utility(*arc);
            u.0 * max.1 == max.0 * u.1
        })
        .copied()
        .collect();
    for (i, j) in selected {
        penalties.increment(i, j);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::greedy_descent;
    use crate::metaheuristic::test_support::*;

    #[test]
    fn test_penalize_picks_longest_arc() {
        let model = grid_model();
        let plan = RoutePlan::from_routes(&model, vec![vec![4]]).expect("feasible");
        let mut penalties = ArcPenalties::new(model.num_nodes());
        // 0→4 and 4→0 both cost 18
        assert!(penalize(&model, &plan, &mut penalties));
        assert_eq!(penalties.get(0, 4), 1);
        assert_eq!(penalties.get(4, 0), 1);
    }

    #[test]
    fn test_penalize_utility_decreases() {
        let model = grid_model();
        // 0→3 = 10, 3→9 = 3, 9→0 = 11
        let plan = RoutePlan::from_routes(&model, vec![vec![3, 9]]).expect("feasible");
        let mut penalties = ArcPenalties::new(model.num_nodes());
        penalize(&model, &plan, &mut penalties);
        assert_eq!(penalties.get(9, 0), 1);
        // 9→0 now has utility 5.5 < 10
        penalize(&model, &plan, &mut penalties);
        assert_eq!(penalties.get(0, 3), 1);
        assert_eq!(penalties.get(9, 0), 1);
    }

    #[test]
    fn test_penalize_empty_plan() {
        let model = grid_model();
        let plan = RoutePlan::from_routes(&model, vec![]).expect("feasible");
        let mut penalties = ArcPenalties::new(model.num_nodes());
        assert!(!penalize(&model, &plan, &mut penalties));
    }

    #[test]
    fn test_gls_not_worse_than_descent() {
        let model = grid_model();
        let params = SearchParameters::default().with_iteration_limit(300);
        let descent = greedy_descent(&model, single_route_plan(&model), &params);
        let gls = guided_local_search(&model, single_route_plan(&model), &params);
        assert!(gls.objective(&model) <= descent.objective(&model));
        assert_eq!(served(&gls), (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_gls_respects_capacity() {
        let model = grid_model();
        let params = SearchParameters::default().with_iteration_limit(100);
        let gls = guided_local_search(&model, single_route_plan(&model), &params);
        assert!(gls.metrics().iter().all(|m| m.ends[0] <= 200));
    }
}
