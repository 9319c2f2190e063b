//! Working representation of a solution during search.
//!
//! Routes are stored as node sequences, one per vehicle, with cached
//! [`RouteMetrics`]. Moves replace whole routes, so only the touched routes
//! are re-evaluated.

use crate::evaluation::{objective, RouteEvaluator, RouteMetrics, SolutionEvaluator};
use crate::models::{Solution, Vehicle};
use crate::routing::RoutingModel;

/// A neighborhood move: new node sequences for some vehicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Operator that produced the move.
    pub operator: &'static str,
    /// `(vehicle, new route)` pairs.
    pub changes: Vec<(usize, Vec<usize>)>,
}

/// Solution under search: one node sequence per vehicle plus cached metrics.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::local_search::RoutePlan;
/// use vrp_plot::routing::RoutingModel;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 4, 6],
///     vec![4, 0, 3],
///     vec![6, 3, 0],
/// ]).unwrap();
/// let mut model = RoutingModel::new(3, 2, 0).unwrap();
/// let distance = model.register_transit_callback(dm);
/// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
///
/// let plan = RoutePlan::from_routes(&model, vec![vec![1, 2]]).unwrap();
/// assert_eq!(plan.routes().len(), 2);
/// assert_eq!(plan.objective(&model), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    routes: Vec<Vec<usize>>,
    metrics: Vec<RouteMetrics>,
}

impl RoutePlan {
    /// Builds a plan from node sequences, padding unused vehicles.
    ///
    /// Returns `None` if there are more sequences than vehicles or if a
    /// route breaks a dimension capacity.
    pub fn from_routes(model: &RoutingModel, mut routes: Vec<Vec<usize>>) -> Option<Self> {
        if routes.len() > model.num_vehicles() {
            return None;
        }
        routes.resize(model.num_vehicles(), Vec::new());
        let metrics = model
            .vehicles()
            .iter()
            .map(|v| RouteEvaluator::new(model, v).metrics(&routes[v.id()]))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { routes, metrics })
    }

    /// Builds a plan from a solution.
    pub fn from_solution(model: &RoutingModel, solution: &Solution) -> Option<Self> {
        let routes = solution.routes().iter().map(|r| r.nodes()).collect();
        Self::from_routes(model, routes)
    }

    /// Node sequences, one per vehicle.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Cached metrics, one per vehicle.
    pub fn metrics(&self) -> &[RouteMetrics] {
        &self.metrics
    }

    /// Objective of the plan (no penalties).
    pub fn objective(&self, model: &RoutingModel) -> i64 {
        objective(model, &self.metrics)
    }

    /// Metrics of a candidate route for `vehicle`, `None` when infeasible.
    pub fn route_metrics(
        model: &RoutingModel,
        vehicle: usize,
        nodes: &[usize],
    ) -> Option<RouteMetrics> {
        let vehicle = Vehicle::new(vehicle, model.depot());
        RouteEvaluator::new(model, &vehicle).metrics(nodes)
    }

    /// Applies a move whose routes have already been evaluated.
    pub fn apply(&mut self, mv: Move, metrics: Vec<RouteMetrics>) {
        for ((vehicle, route), m) in mv.changes.into_iter().zip(metrics) {
            self.routes[vehicle] = route;
            self.metrics[vehicle] = m;
        }
    }

    /// Converts the plan into an evaluated [`Solution`].
    pub fn to_solution(&self, model: &RoutingModel) -> Solution {
        let (solution, _) = SolutionEvaluator::new(model).evaluate(&self.routes);
        solution
    }
}
