//! Simulated annealing.
//!
//! # Algorithm
//!
//! After a descent to a local optimum, each iteration picks a random
//! operator and one of its moves at random. Improving moves are always
//! accepted; a move worsening the objective by Δ is accepted with
//! probability `exp(-Δ / T)`. The temperature starts at a fraction of the
//! objective and cools geometrically.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::local_search::{LocalSearch, RoutePlan, Scorer, SearchLimit};
use crate::routing::{RoutingModel, SearchParameters};

use super::report_improvement;

/// Initial temperature as a fraction of the starting objective.
const INITIAL_TEMPERATURE_RATIO: f64 = 0.05;
/// Geometric cooling factor per iteration.
const COOLING_RATE: f64 = 0.995;
const MIN_TEMPERATURE: f64 = 1e-3;

/// Runs simulated annealing from `plan` and returns the best plan found.
///
/// Deterministic for a given `params.seed`.
pub fn simulated_annealing(
    model: &RoutingModel,
    plan: RoutePlan,
    params: &SearchParameters,
) -> RoutePlan {
    let ls = LocalSearch::default();
    let scorer = Scorer::new(model);
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut limit = SearchLimit::new(params.time_limit, params.iteration_budget());

    let mut current = plan;
    ls.descend(&mut current, &scorer, &mut limit);
    let mut current_objective = current.objective(model);
    let mut best = current.clone();
    let mut best_objective = current_objective;
    report_improvement(params, "simulated-annealing", best_objective);

    let mut temperature = (current_objective as f64 * INITIAL_TEMPERATURE_RATIO).max(1.0);
    let mut accepted = 0usize;

    while !limit.reached() {
        limit.tick();
        let operator = &ls.operators()[rng.random_range(0..ls.operators().len())];
        let mut moves = operator.moves(current.routes());
        if moves.is_empty() {
            continue;
        }
        let mv = moves.swap_remove(rng.random_range(0..moves.len()));

        if let Some((score, metrics)) = scorer.score_move(&current, &mv) {
            let delta = score - current_objective;
            let accept =
                delta <= 0 || rng.random::<f64>() < (-(delta as f64) / temperature).exp();
            if accept {
                current.apply(mv, metrics);
                current_objective = score;
                accepted += 1;
                if score < best_objective {
                    best_objective = score;
                    best = current.clone();
                    report_improvement(params, "simulated-annealing", score);
                }
            }
        }
        temperature = (temperature * COOLING_RATE).max(MIN_TEMPERATURE);
    }

    debug!(
        iterations = limit.iterations(),
        accepted,
        objective = best_objective,
        "simulated annealing finished"
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::greedy_descent;
    use crate::metaheuristic::test_support::*;

    #[test]
    fn test_annealing_deterministic() {
        let model = grid_model();
        let params = SearchParameters::default().with_iteration_limit(400).with_seed(7);
        let a = simulated_annealing(&model, single_route_plan(&model), &params);
        let b = simulated_annealing(&model, single_route_plan(&model), &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_annealing_keeps_best() {
        let model = grid_model();
        let params = SearchParameters::default().with_iteration_limit(400);
        let descent = greedy_descent(&model, single_route_plan(&model), &params);
        let sa = simulated_annealing(&model, single_route_plan(&model), &params);
        assert!(sa.objective(&model) <= descent.objective(&model));
        assert_eq!(served(&sa), (1..10).collect::<Vec<_>>());
    }
}
