//! Search termination: wall-clock deadline and iteration budget.

use std::time::{Duration, Instant};

/// Stops a search once a time limit or an iteration budget is spent.
///
/// With neither set the limit is never reached.
#[derive(Debug, Clone)]
pub struct SearchLimit {
    deadline: Option<Instant>,
    max_iterations: Option<usize>,
    iterations: usize,
}

impl SearchLimit {
    /// Creates a limit starting now.
    pub fn new(time_limit: Option<Duration>, max_iterations: Option<usize>) -> Self {
        Self {
            deadline: time_limit.map(|t| Instant::now() + t),
            max_iterations,
            iterations: 0,
        }
    }

    /// A limit that is never reached.
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// Counts one iteration.
    pub fn tick(&mut self) {
        self.iterations += 1;
    }

    /// Iterations counted so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the search must stop.
    pub fn reached(&self) -> bool {
        if self.max_iterations.is_some_and(|max| self.iterations >= max) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
