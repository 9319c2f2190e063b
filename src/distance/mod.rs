//! Distance matrices and transit callbacks.
//!
//! Provides a dense integer distance matrix for routing problems and the
//! callback trait through which the routing model reads arc costs.

mod callback;
mod matrix;

pub use callback::TransitCallback;
pub use matrix::{DistanceMatrix, Metric};
