//! Domain model types for vehicle routing problems.
//!
//! Provides locations in the plane, vehicles, routes as ordered sequences of
//! visits, and complete solutions with their constraint violations.

mod location;
mod route;
mod solution;
mod vehicle;

pub use location::Location;
pub use route::{Route, Visit};
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::Vehicle;
