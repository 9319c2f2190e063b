//! Solve entry points on [`RoutingModel`].
//!
//! A solve runs the configured first-solution strategy, improves the result
//! with the configured metaheuristic, and re-evaluates the best plan into a
//! [`Solution`].

use std::time::Instant;

use tracing::info;

use crate::constructive::first_solution;
use crate::error::RoutingError;
use crate::evaluation::SolutionEvaluator;
use crate::local_search::RoutePlan;
use crate::metaheuristic::improve;
use crate::models::Solution;
use crate::routing::{RoutingModel, SearchParameters};

impl RoutingModel {
    /// Solves with [`SearchParameters::default`].
    pub fn solve(&self) -> Result<Solution, RoutingError> {
        self.solve_with_parameters(&SearchParameters::default())
    }

    /// Solves the model.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::MissingArcCost`] if no arc cost evaluator is set.
    /// - [`RoutingError::NoSolution`] if the first-solution strategy cannot
    ///   serve every node within the dimension capacities.
    ///
    /// # Examples
    ///
    /// ```
    /// use vrp_plot::distance::DistanceMatrix;
    /// use vrp_plot::routing::{LocalSearchMetaheuristic, RoutingModel, SearchParameters};
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0, 2, 2, 3],
    ///     vec![2, 0, 4, 1],
    ///     vec![2, 4, 0, 5],
    ///     vec![3, 1, 5, 0],
    /// ]).unwrap();
    /// let mut model = RoutingModel::new(4, 2, 0).unwrap();
    /// let distance = model.register_transit_callback(dm);
    /// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
    ///
    /// let params = SearchParameters::default()
    ///     .with_metaheuristic(LocalSearchMetaheuristic::GuidedLocalSearch)
    ///     .with_iteration_limit(50);
    /// let solution = model.solve_with_parameters(&params).unwrap();
    /// assert_eq!(solution.num_served(), 3);
    /// ```
    pub fn solve_with_parameters(&self, params: &SearchParameters) -> Result<Solution, RoutingError> {
        if !self.has_arc_cost() {
            return Err(RoutingError::MissingArcCost);
        }
        let started = Instant::now();
        info!(
            nodes = self.num_nodes(),
            vehicles = self.num_vehicles(),
            first_solution = %params.first_solution_strategy,
            metaheuristic = %params.local_search_metaheuristic,
            "solve started"
        );

        let first = first_solution(self, params.first_solution_strategy)?;
        info!(objective = first.objective(), "first solution found");

        let plan = RoutePlan::from_solution(self, &first).ok_or(RoutingError::NoSolution)?;
        let best = improve(self, plan, params);

        let (solution, violations) = SolutionEvaluator::new(self).evaluate(best.routes());
        if !violations.is_empty() {
            return Err(RoutingError::NoSolution);
        }
        info!(
            objective = solution.objective(),
            max_route = solution.max_route_cost(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "solve finished"
        );
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::distance::DistanceMatrix;
    use crate::error::RoutingError;
    use crate::routing::{
        FirstSolutionStrategy, LocalSearchMetaheuristic, RoutingModel, SearchParameters,
    };

    fn square_model(capacity: i64) -> RoutingModel {
        // depot in the middle, four corners at distance 2
        square_model_with(&[(0, 0), (1, 1), (-1, 1), (-1, -1), (1, -1)], 0, capacity, true)
    }

    fn square_model_with(
        pos: &[(i64, i64)],
        depot: usize,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
    ) -> RoutingModel {
        let rows: Vec<Vec<i64>> = pos
            .iter()
            .map(|a| {
                pos.iter()
                    .map(|b| (a.0 - b.0).abs() + (a.1 - b.1).abs())
                    .collect()
            })
            .collect();
        let dm = DistanceMatrix::from_rows(&rows).expect("valid");
        let mut model = RoutingModel::new(pos.len(), 2, depot).expect("valid");
        let distance = model.register_transit_callback(dm);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        model
            .add_dimension(distance, 0, capacity, fix_start_cumul_to_zero, "Distance")
            .expect("added");
        model
            .dimension_mut("Distance")
            .expect("exists")
            .set_global_span_cost_coefficient(100)
            .expect("non-negative");
        model
    }

    #[test]
    fn test_solve_requires_arc_cost() {
        let model = RoutingModel::new(3, 1, 0).expect("valid");
        assert!(matches!(model.solve(), Err(RoutingError::MissingArcCost)));
    }

    #[test]
    fn test_solve_balances_routes() {
        let model = square_model(100);
        let solution = model.solve().expect("solvable");
        assert_eq!(solution.num_served(), 4);
        // two routes over adjacent corners, 6 each
        assert_eq!(solution.num_used_vehicles(), 2);
        assert_eq!(solution.max_route_cost(), 6);
        assert_eq!(solution.objective(), 12 + 600);
    }

    #[test]
    fn test_solve_every_strategy() {
        let model = square_model(100);
        for &strategy in FirstSolutionStrategy::ALL {
            for &metaheuristic in LocalSearchMetaheuristic::ALL {
                let params = SearchParameters::default()
                    .with_first_solution_strategy(strategy)
                    .with_metaheuristic(metaheuristic)
                    .with_iteration_limit(100);
                let solution = model.solve_with_parameters(&params).expect("solvable");
                assert_eq!(solution.num_served(), 4, "{strategy} + {metaheuristic}");
                assert!(solution.max_route_cost() <= 100);
            }
        }
    }

    #[test]
    fn test_solve_infeasible() {
        // a corner alone needs 4
        let model = square_model(3);
        assert!(matches!(model.solve(), Err(RoutingError::NoSolution)));
    }

    #[test]
    fn test_solve_with_depot_elsewhere() {
        // the centre is node 3
        let pos = [(1, 1), (-1, 1), (-1, -1), (0, 0), (1, -1)];
        let model = square_model_with(&pos, 3, 100, true);
        let solution = model.solve().expect("solvable");
        assert_eq!(solution.num_served(), 4);
        assert_eq!(solution.objective(), 12 + 600);
        for route in solution.routes() {
            assert_eq!(route.depot(), 3);
            assert!(!route.nodes().contains(&3));
        }
        assert_eq!(solution.routes()[0].nodes(), vec![0, 1]);
        assert_eq!(solution.routes()[1].nodes(), vec![2, 4]);
    }

    #[test]
    fn test_free_start_cumul_solves_like_fixed() {
        let pos = [(0, 0), (1, 1), (-1, 1), (-1, -1), (1, -1)];
        let fixed = square_model_with(&pos, 0, 100, true).solve().expect("solvable");
        let free = square_model_with(&pos, 0, 100, false);
        assert!(!free.dimension("Distance").expect("exists").fix_start_cumul_to_zero());
        assert_eq!(free.solve().expect("solvable"), fixed);
    }

    #[test]
    fn test_solve_under_time_limit() {
        let model = square_model(100);
        for &metaheuristic in LocalSearchMetaheuristic::ALL {
            let params = SearchParameters::default()
                .with_metaheuristic(metaheuristic)
                .with_time_limit(Duration::from_millis(50));
            assert_eq!(params.iteration_budget(), None);
            let started = Instant::now();
            let solution = model.solve_with_parameters(&params).expect("solvable");
            assert!(started.elapsed() < Duration::from_secs(5), "{metaheuristic}");
            assert_eq!(solution.num_served(), 4);
            assert_eq!(solution.objective(), 12 + 600, "{metaheuristic}");
        }
    }
}
