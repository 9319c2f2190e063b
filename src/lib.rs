//! # vrp-plot
//!
//! Vehicle routing with a distance dimension and a global span cost, so the
//! solver minimizes total distance while balancing the longest route.
//! Problems and solutions can be plotted.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Vehicle, Route, Solution)
//! - [`distance`] — Distance matrix and transit callbacks
//! - [`routing`] — Routing model, dimensions, and search parameters
//! - [`evaluation`] — Route metrics, feasibility, and the objective
//! - [`constructive`] — First-solution heuristics (path cheapest arc, savings, cheapest insertion)
//! - [`local_search`] — Neighborhood operators and best-improvement descent
//! - [`metaheuristic`] — Greedy descent, guided local search, simulated annealing
//! - [`instance`] — Problem configuration and the built-in demo
//! - [`report`] — Text summary of a solution
//! - [`plot`] — Location and route plots
//!
//! ## Example
//!
//! ```
//! use vrp_plot::instance::ProblemConfig;
//! use vrp_plot::report::SolutionReport;
//!
//! let (model, _locations) = ProblemConfig::demo().build().unwrap();
//! let solution = model.solve().unwrap();
//! assert!(solution.max_route_cost() <= 3000);
//! println!("{}", SolutionReport(&solution));
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instance;
pub mod local_search;
pub mod metaheuristic;
pub mod models;
pub mod plot;
pub mod report;
pub mod routing;
mod solver;

pub use error::RoutingError;
