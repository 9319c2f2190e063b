//! Route and solution evaluators: arc costs, dimension cumuls, feasibility.

use crate::models::{Route, Solution, Vehicle, Violation, ViolationType, Visit};
use crate::routing::RoutingModel;

/// Cost summary of one route, as used by incremental scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMetrics {
    /// Sum of arc costs along the route.
    pub cost: i64,
    /// End cumul of every dimension, in model order.
    pub ends: Vec<i64>,
}

impl RouteMetrics {
    /// Metrics of an unused vehicle.
    pub fn empty(num_dimensions: usize) -> Self {
        Self {
            cost: 0,
            ends: vec![0; num_dimensions],
        }
    }
}

/// Objective of a solution given the metrics of every route: arc costs plus
/// the span cost of each dimension.
pub fn objective(model: &RoutingModel, metrics: &[RouteMetrics]) -> i64 {
    let arc_cost: i64 = metrics.iter().map(|m| m.cost).sum();
    let span_cost: i64 = model
        .dimensions()
        .iter()
        .enumerate()
        .map(|(d, dim)| dim.span_cost(metrics.iter().map(|m| m.ends[d])))
        .sum();
    arc_cost.saturating_add(span_cost)
}

/// Evaluates the route of a single vehicle: visit cumuls, arc cost, and
/// dimension capacity checks.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::evaluation::RouteEvaluator;
/// use vrp_plot::routing::RoutingModel;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 4, 6],
///     vec![4, 0, 3],
///     vec![6, 3, 0],
/// ]).unwrap();
/// let mut model = RoutingModel::new(3, 1, 0).unwrap();
/// let distance = model.register_transit_callback(dm);
/// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
/// model.add_dimension(distance, 0, 20, true, "Distance").unwrap();
///
/// let vehicle = model.vehicles()[0];
/// let evaluator = RouteEvaluator::new(&model, &vehicle);
/// let (route, violations) = evaluator.build_route(&[1, 2]);
/// assert_eq!(route.cost(), 13);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    model: &'a RoutingModel,
    vehicle: &'a Vehicle,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for one vehicle of the model.
    pub fn new(model: &'a RoutingModel, vehicle: &'a Vehicle) -> Self {
        Self { model, vehicle }
    }

    fn path(&self, nodes: &[usize]) -> Vec<usize> {
        let depot = self.vehicle.depot();
        let mut path = Vec::with_capacity(nodes.len() + 2);
        path.push(depot);
        path.extend_from_slice(nodes);
        path.push(depot);
        path
    }

    /// Builds a route from a sequence of nodes, computing cumulative arc cost
    /// and checking every dimension.
    ///
    /// Returns the constructed route and any constraint violations found.
    pub fn build_route(&self, nodes: &[usize]) -> (Route, Vec<Violation>) {
        let depot = self.vehicle.depot();
        let mut route = Route::new(self.vehicle.id(), depot);
        let mut violations = Vec::new();

        let mut cumul = 0;
        let mut prev = depot;
        for &node in nodes {
            if node == depot {
                violations.push(Violation::new(ViolationType::DepotVisited {
                    vehicle_id: self.vehicle.id(),
                }));
            }
            cumul += self.model.arc_cost_for_vehicle(prev, node, self.vehicle.id());
            route.push_visit(Visit { node, cumul });
            prev = node;
        }
        if !nodes.is_empty() {
            cumul += self.model.arc_cost_for_vehicle(prev, depot, self.vehicle.id());
        }
        route.set_cost(cumul);

        if !nodes.is_empty() {
            let path = self.path(nodes);
            for dim in self.model.dimensions() {
                let transit = |from: usize, to: usize| self.model.transit(dim.transit(), from, to);
                if let Some(&bad) = dim
                    .cumuls(&transit, &path)
                    .iter()
                    .find(|&&c| !dim.admits(c))
                {
                    violations.push(Violation::new(ViolationType::CapacityExceeded {
                        dimension: dim.name().to_string(),
                        vehicle_id: self.vehicle.id(),
                        cumul: bad,
                        capacity: dim.capacity(),
                    }));
                }
            }
        }

        (route, violations)
    }

    /// Computes route metrics, or `None` if a dimension capacity is broken.
    ///
    /// This is the hot path of local search, so it walks the route once per
    /// dimension without allocating visits.
    pub fn metrics(&self, nodes: &[usize]) -> Option<RouteMetrics> {
        let dimensions = self.model.dimensions();
        if nodes.is_empty() {
            return Some(RouteMetrics::empty(dimensions.len()));
        }

        let depot = self.vehicle.depot();
        let mut cost = 0;
        let mut ends = vec![0; dimensions.len()];
        let mut prev = depot;
        for &node in nodes.iter().chain(std::iter::once(&depot)) {
            cost += self.model.arc_cost_for_vehicle(prev, node, self.vehicle.id());
            for (d, dim) in dimensions.iter().enumerate() {
                ends[d] += self.model.transit(dim.transit(), prev, node);
                if !dim.admits(ends[d]) {
                    return None;
                }
            }
            prev = node;
        }
        Some(RouteMetrics { cost, ends })
    }
}

/// Evaluates complete assignments: one node sequence per vehicle.
pub struct SolutionEvaluator<'a> {
    model: &'a RoutingModel,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates a new evaluator for the model.
    pub fn new(model: &'a RoutingModel) -> Self {
        Self { model }
    }

    /// Builds a [`Solution`] from node sequences and collects violations.
    ///
    /// Sequences are matched to vehicles by position; missing sequences are
    /// unused vehicles. Every non-depot node must appear exactly once.
    pub fn evaluate(&self, routes: &[Vec<usize>]) -> (Solution, Vec<Violation>) {
        let mut solution = Solution::new();
        let mut violations = Vec::new();
        let vehicles = self.model.vehicles();

        if routes.len() > vehicles.len() {
            violations.push(Violation::new(ViolationType::FleetExceeded {
                routes: routes.len(),
                vehicles: vehicles.len(),
            }));
        }

        let mut metrics = Vec::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            let nodes = routes.get(vehicle.id()).map(Vec::as_slice).unwrap_or(&[]);
            let evaluator = RouteEvaluator::new(self.model, vehicle);
            let (route, mut route_violations) = evaluator.build_route(nodes);
            metrics.push(self.raw_metrics(&route));
            violations.append(&mut route_violations);
            solution.add_route(route);
        }

        let mut seen = vec![0usize; self.model.num_nodes()];
        for &node in routes.iter().flatten() {
            if let Some(count) = seen.get_mut(node) {
                *count += 1;
            }
        }
        for node in self.model.customers() {
            match seen[node] {
                0 => violations.push(Violation::new(ViolationType::Unvisited { node })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::VisitedTwice { node })),
            }
        }

        solution.set_objective(objective(self.model, &metrics));
        (solution, violations)
    }

    /// Metrics of a built route, computed even when a capacity is broken.
    fn raw_metrics(&self, route: &Route) -> RouteMetrics {
        let dimensions = self.model.dimensions();
        if route.is_empty() {
            return RouteMetrics::empty(dimensions.len());
        }
        let path = route.path();
        let ends = dimensions
            .iter()
            .map(|dim| {
                path.windows(2)
                    .map(|w| self.model.transit(dim.transit(), w[0], w[1]))
                    .sum()
            })
            .collect();
        RouteMetrics {
            cost: route.cost(),
            ends,
        }
    }
}
