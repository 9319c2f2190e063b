//! Plain-text solution summary.

use std::fmt;

use crate::models::Solution;

/// Display wrapper printing the objective, every vehicle's route with its
/// distance, and the longest route.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::{Route, Solution, Visit};
/// use vrp_plot::report::SolutionReport;
///
/// let mut route = Route::new(0, 0);
/// route.push_visit(Visit { node: 1, cumul: 5 });
/// route.set_cost(10);
/// let mut solution = Solution::new();
/// solution.add_route(route);
/// solution.set_objective(1010);
///
/// let text = SolutionReport(&solution).to_string();
/// assert!(text.starts_with("Objective: 1010\nRoute for vehicle 0:\n 0 ->  1 -> 0\n"));
/// assert!(text.ends_with("Maximum of the route distances: 10m\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolutionReport<'a>(pub &'a Solution);

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        writeln!(f, "Objective: {}", solution.objective())?;
        for route in solution.routes() {
            writeln!(f, "Route for vehicle {}:", route.vehicle_id())?;
            let path = route.path();
            if let Some((last, init)) = path.split_last() {
                for node in init {
                    write!(f, " {node} -> ")?;
                }
                writeln!(f, "{last}")?;
            }
            writeln!(f, "Distance of the route: {}m", route.cost())?;
            writeln!(f)?;
        }
        writeln!(f, "Maximum of the route distances: {}m", solution.max_route_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::SolutionEvaluator;
    use crate::routing::RoutingModel;

    #[test]
    fn test_report_layout() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 3, 4], vec![3, 0, 5], vec![4, 5, 0]])
            .expect("valid");
        let mut model = RoutingModel::new(3, 3, 0).expect("valid");
        let distance = model.register_transit_callback(dm);
        model
            .set_arc_cost_evaluator_of_all_vehicles(distance)
            .expect("registered");
        let (solution, _) = SolutionEvaluator::new(&model).evaluate(&[vec![1, 2], vec![]]);

        let expected = "Objective: 12\n\
Route for vehicle 0:\n 0 ->  1 ->  2 -> 0\n\
Distance of the route: 12m\n\n\
Route for vehicle 1:\n 0 -> 0\n\
Distance of the route: 0m\n\n\
Route for vehicle 2:\n 0 -> 0\n\
Distance of the route: 0m\n\n\
Maximum of the route distances: 12m\n";
        assert_eq!(SolutionReport(&solution).to_string(), expected);
    }
}
