//! Route feasibility checking and objective evaluation.

mod evaluator;

pub use evaluator::{objective, RouteEvaluator, RouteMetrics, SolutionEvaluator};
