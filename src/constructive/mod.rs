//! Constructive heuristics for building first solutions.
//!
//! - [`path_cheapest_arc`] — Extend routes along the cheapest feasible arc, one vehicle at a time
//! - [`savings`] — Clarke-Wright savings (1964)
//! - [`parallel_cheapest_insertion`] — Cheapest feasible insertion over all routes

mod cheapest_insertion;
mod path_cheapest_arc;
mod savings;

pub use cheapest_insertion::parallel_cheapest_insertion;
pub use path_cheapest_arc::path_cheapest_arc;
pub use savings::savings;

use crate::error::RoutingError;
use crate::models::Solution;
use crate::routing::{FirstSolutionStrategy, RoutingModel};

/// Builds a first solution with the given strategy.
pub fn first_solution(
    model: &RoutingModel,
    strategy: FirstSolutionStrategy,
) -> Result<Solution, RoutingError> {
    match strategy {
        FirstSolutionStrategy::PathCheapestArc => path_cheapest_arc(model),
        FirstSolutionStrategy::Savings => savings(model),
        FirstSolutionStrategy::ParallelCheapestInsertion => parallel_cheapest_insertion(model),
    }
}
