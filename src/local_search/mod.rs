//! Local search over route plans.
//!
//! Neighborhood operators propose [`Move`]s, a [`Scorer`] rates them, and
//! [`LocalSearch::descend`] applies the best improving move until none is
//! left or the [`SearchLimit`] is reached.
//!
//! - [`Relocate`] — Move one node within or across routes
//! - [`Exchange`] — Swap two nodes of different routes
//! - [`CrossExchange`] — Swap route tails (2-opt*)
//! - [`ReverseCrossExchange`] — Swap a route head for another's reversed head
//! - [`TwoOpt`] — Reverse a segment inside a route
//! - [`OrOpt`] — Move a segment of up to three nodes inside a route

mod cross_exchange;
mod exchange;
mod limit;
mod or_opt;
mod plan;
mod relocate;
mod reverse_cross_exchange;
mod scorer;
mod two_opt;

pub use cross_exchange::CrossExchange;
pub use exchange::Exchange;
pub use limit::SearchLimit;
pub use or_opt::{OrOpt, MAX_SEGMENT_LEN};
pub use plan::{Move, RoutePlan};
pub use relocate::Relocate;
pub use reverse_cross_exchange::ReverseCrossExchange;
pub use scorer::{ArcPenalties, Scorer};
pub use two_opt::TwoOpt;

use tracing::trace;

use crate::evaluation::RouteMetrics;

/// A neighborhood: every move reachable from the current routes.
pub trait Operator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Candidate moves for the given routes (one per vehicle).
    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move>;
}

/// Best-improvement descent over a set of operators.
pub struct LocalSearch {
    operators: Vec<Box<dyn Operator>>,
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self::new(vec![
            Box::new(Relocate),
            Box::new(Exchange),
            Box::new(CrossExchange),
            Box::new(ReverseCrossExchange),
            Box::new(TwoOpt),
            Box::new(OrOpt),
        ])
    }
}

impl LocalSearch {
    /// Creates a descent over the given operators.
    pub fn new(operators: Vec<Box<dyn Operator>>) -> Self {
        Self { operators }
    }

    /// Operators in evaluation order.
    pub fn operators(&self) -> &[Box<dyn Operator>] {
        &self.operators
    }

    /// Best feasible move strictly improving on `current`.
    ///
    /// Ties keep the first move found, in operator order.
    pub fn best_move(
        &self,
        plan: &RoutePlan,
        scorer: &Scorer<'_>,
        current: i64,
    ) -> Option<(Move, i64, Vec<RouteMetrics>)> {
        let mut best: Option<(Move, i64, Vec<RouteMetrics>)> = None;
        for op in &self.operators {
            for mv in op.moves(plan.routes()) {
                let Some((score, metrics)) = scorer.score_move(plan, &mv) else {
                    continue;
                };
                let threshold = best.as_ref().map_or(current, |b| b.1);
                if score < threshold {
                    best = Some((mv, score, metrics));
                }
            }
        }
        best
    }

    /// Descends to a local optimum of the scorer.
    ///
    /// Each applied move counts one iteration of `limit`. `on_move` sees the
    /// plan after every applied move. Returns the number of moves applied.
    pub fn descend_with<F>(
        &self,
        plan: &mut RoutePlan,
        scorer: &Scorer<'_>,
        limit: &mut SearchLimit,
        mut on_move: F,
    ) -> usize
    where
        F: FnMut(&RoutePlan),
    {
        let mut applied = 0;
        let mut current = scorer.score(plan);
        while !limit.reached() {
            let Some((mv, score, metrics)) = self.best_move(plan, scorer, current) else {
                break;
            };
            trace!(operator = mv.operator, score, "move applied");
            plan.apply(mv, metrics);
            current = score;
            applied += 1;
            limit.tick();
            on_move(plan);
        }
        applied
    }

    /// [`descend_with`](Self::descend_with) without an observer.
    pub fn descend(
        &self,
        plan: &mut RoutePlan,
        scorer: &Scorer<'_>,
        limit: &mut SearchLimit,
    ) -> usize {
        self.descend_with(plan, scorer, limit, |_| {})
    }
}
