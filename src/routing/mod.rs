//! The routing model and its configuration.
//!
//! - [`RoutingModel`] — Nodes, fleet, transit callbacks, arc costs
//! - [`Dimension`] — Quantities accumulated along routes, with capacity and span cost
//! - [`SearchParameters`] — First-solution strategy, metaheuristic, limits

mod dimension;
mod model;
mod parameters;

pub use dimension::Dimension;
pub use model::{RoutingModel, TransitIndex};
pub use parameters::{
    FirstSolutionStrategy, LocalSearchMetaheuristic, SearchParameters,
    DEFAULT_METAHEURISTIC_ITERATIONS,
};
