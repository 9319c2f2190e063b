//! Metaheuristics run after the first solution.
//!
//! - [`greedy_descent`] — Local search to the first local optimum
//! - [`guided_local_search`] — Escapes local optima by penalizing arcs
//! - [`simulated_annealing`] — Random moves accepted with a cooling probability
//!
//! All three keep the best feasible plan seen and return it.

mod annealing;
mod guided;

pub use annealing::simulated_annealing;
pub use guided::guided_local_search;

use tracing::{debug, info};

use crate::local_search::{LocalSearch, RoutePlan, Scorer, SearchLimit};
use crate::routing::{LocalSearchMetaheuristic, RoutingModel, SearchParameters};

/// Improves `plan` with the metaheuristic selected in `params`.
pub fn improve(model: &RoutingModel, plan: RoutePlan, params: &SearchParameters) -> RoutePlan {
    match params.local_search_metaheuristic {
        LocalSearchMetaheuristic::GreedyDescent => greedy_descent(model, plan, params),
        LocalSearchMetaheuristic::GuidedLocalSearch => guided_local_search(model, plan, params),
        LocalSearchMetaheuristic::SimulatedAnnealing => simulated_annealing(model, plan, params),
    }
}

/// Best-improvement descent to a local optimum, within the search limits.
pub fn greedy_descent(model: &RoutingModel, mut plan: RoutePlan, params: &SearchParameters) -> RoutePlan {
    let mut limit = SearchLimit::new(params.time_limit, params.iteration_budget());
    let applied = LocalSearch::default().descend_with(
        &mut plan,
        &Scorer::new(model),
        &mut limit,
        |p| report_improvement(params, "greedy-descent", p.objective(model)),
    );
    debug!(moves = applied, "greedy descent finished");
    plan
}

fn report_improvement(params: &SearchParameters, source: &'static str, objective: i64) {
    if params.log_search {
        info!(source, objective, "improved solution");
    } else {
        debug!(source, objective, "improved solution");
    }
}
