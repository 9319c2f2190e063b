//! Move scoring: objective plus an optional arc penalty term.

use crate::evaluation::{objective, RouteMetrics};
use crate::routing::RoutingModel;

use super::plan::{Move, RoutePlan};

/// Penalty counters on arcs, raised by guided local search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcPenalties {
    size: usize,
    data: Vec<i64>,
}

impl ArcPenalties {
    /// All-zero penalties for `size` nodes.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Penalty of arc `from → to`.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Raises the penalty of arc `from → to` by one.
    pub fn increment(&mut self, from: usize, to: usize) {
        self.data[from * self.size + to] += 1;
    }

    /// Sum of penalties along a route (depot at both ends).
    pub fn route_penalty(&self, depot: usize, nodes: &[usize]) -> i64 {
        if nodes.is_empty() {
            return 0;
        }
        let mut total = 0;
        let mut prev = depot;
        for &node in nodes.iter().chain(std::iter::once(&depot)) {
            total += self.get(prev, node);
            prev = node;
        }
        total
    }
}

/// Scores plans and candidate moves.
///
/// Without penalties the score is the objective. With penalties it is the
/// augmented cost `objective + lambda * Σ penalty(arc)` of guided local
/// search.
pub struct Scorer<'a> {
    model: &'a RoutingModel,
    penalties: Option<(&'a ArcPenalties, i64)>,
}

impl<'a> Scorer<'a> {
    /// Scores by the plain objective.
    pub fn new(model: &'a RoutingModel) -> Self {
        Self {
            model,
            penalties: None,
        }
    }

    /// Scores by the augmented cost.
    pub fn with_penalties(model: &'a RoutingModel, penalties: &'a ArcPenalties, lambda: i64) -> Self {
        Self {
            model,
            penalties: Some((penalties, lambda)),
        }
    }

    /// Routing model being scored.
    pub fn model(&self) -> &'a RoutingModel {
        self.model
    }

    fn penalty_term<'r, I>(&self, routes: I) -> i64
    where
        I: IntoIterator<Item = &'r [usize]>,
    {
        match self.penalties {
            Some((penalties, lambda)) => {
                let depot = self.model.depot();
                lambda
                    * routes
                        .into_iter()
                        .map(|r| penalties.route_penalty(depot, r))
                        .sum::<i64>()
            }
            None => 0,
        }
    }

    /// Score of the plan as it stands.
    pub fn score(&self, plan: &RoutePlan) -> i64 {
        plan.objective(self.model) + self.penalty_term(plan.routes().iter().map(Vec::as_slice))
    }

    /// Score of the plan after `mv`, with the metrics of the changed routes.
    ///
    /// Returns `None` if a changed route breaks a dimension capacity.
    pub fn score_move(&self, plan: &RoutePlan, mv: &Move) -> Option<(i64, Vec<RouteMetrics>)> {
        let changed = mv
            .changes
            .iter()
            .map(|(vehicle, route)| RoutePlan::route_metrics(self.model, *vehicle, route))
            .collect::<Option<Vec<_>>>()?;

        let mut metrics = plan.metrics().to_vec();
        for ((vehicle, _), m) in mv.changes.iter().zip(&changed) {
            metrics[*vehicle] = m.clone();
        }
        let mut score = objective(self.model, &metrics);

        if self.penalties.is_some() {
            let routes = plan.routes().iter().enumerate().map(|(v, r)| {
                mv.changes
                    .iter()
                    .find(|(cv, _)| *cv == v)
                    .map_or(r.as_slice(), |(_, nr)| nr.as_slice())
            });
            score += self.penalty_term(routes);
        }
        Some((score, changed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn model() -> RoutingModel {
        let dm = DistanceMatrix::from_rows(&[vec![0, 4, 6], vec![4, 0, 3], vec![6, 3, 0]])
            .expect("valid");
        let mut model = RoutingModel::new(3, 2, 0).expect("valid");
        let distance = model.register_transit_callback(dm);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        model
            .add_dimension(distance, 0, 12, true, "Distance")
            .expect("added");
        model
    }

    #[test]
    fn test_route_penalty() {
        let mut p = ArcPenalties::new(3);
        p.increment(0, 1);
        p.increment(0, 1);
        p.increment(2, 0);
        assert_eq!(p.get(0, 1), 2);
        assert_eq!(p.route_penalty(0, &[1, 2]), 3);
        assert_eq!(p.route_penalty(0, &[2, 1]), 0);
        assert_eq!(p.route_penalty(0, &[]), 0);
    }

    #[test]
    fn test_score_plain() {
        let m = model();
        let plan = RoutePlan::from_routes(&m, vec![vec![1], vec![2]]).expect("feasible");
        assert_eq!(Scorer::new(&m).score(&plan), 8 + 12);
    }

    #[test]
    fn test_score_move() {
        let m = model();
        let plan = RoutePlan::from_routes(&m, vec![vec![1], vec![2]]).expect("feasible");
        let scorer = Scorer::new(&m);

        // 0→1→2→0 = 13 > 12
        let infeasible = Move {
            operator: "test",
            changes: vec![(0, vec![1, 2]), (1, vec![])],
        };
        assert!(scorer.score_move(&plan, &infeasible).is_none());

        let swap = Move {
            operator: "test",
            changes: vec![(0, vec![2]), (1, vec![1])],
        };
        let (score, metrics) = scorer.score_move(&plan, &swap).expect("feasible");
        assert_eq!(score, 20);
        assert_eq!(metrics.len(), 2);
    }

    #[test]
    fn test_score_with_penalties() {
        let m = model();
        let plan = RoutePlan::from_routes(&m, vec![vec![1], vec![2]]).expect("feasible");
        let mut penalties = ArcPenalties::new(3);
        penalties.increment(0, 1);
        let scorer = Scorer::with_penalties(&m, &penalties, 5);
        assert_eq!(scorer.score(&plan), 20 + 5);

        let mv = Move {
            operator: "test",
            changes: vec![(0, vec![])],
        };
        // vehicle 0 unused: arcs 12, no span change from vehicle 1, no penalty
        let (score, _) = scorer.score_move(&plan, &mv).expect("feasible");
        assert_eq!(score, 12);
    }
}
