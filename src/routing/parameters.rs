//! Search parameters.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Iteration budget used by metaheuristics when no limit is configured.
pub const DEFAULT_METAHEURISTIC_ITERATIONS: usize = 1000;

/// Heuristic building the first feasible solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstSolutionStrategy {
    /// Extend each route from its last node along the cheapest feasible arc.
    #[default]
    PathCheapestArc,
    /// Clarke & Wright savings.
    Savings,
    /// Cheapest insertion over all routes at once.
    ParallelCheapestInsertion,
}

/// Strategy applied once a first solution exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalSearchMetaheuristic {
    /// Accept improving moves until a local optimum is reached.
    #[default]
    GreedyDescent,
    /// Penalize features of local optima to escape them.
    GuidedLocalSearch,
    /// Accept worsening moves with a decreasing probability.
    SimulatedAnnealing,
}

macro_rules! kebab_enum {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in declaration order.
            pub const ALL: &'static [$ty] = &[$(Self::$variant),+];

            /// Kebab-case name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let names: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("unknown value `{}`, expected one of: {}", s, names.join(", "))
                    })
            }
        }
    };
}

kebab_enum!(FirstSolutionStrategy {
    PathCheapestArc => "path-cheapest-arc",
    Savings => "savings",
    ParallelCheapestInsertion => "parallel-cheapest-insertion",
});

kebab_enum!(LocalSearchMetaheuristic {
    GreedyDescent => "greedy-descent",
    GuidedLocalSearch => "guided-local-search",
    SimulatedAnnealing => "simulated-annealing",
});

/// Parameters controlling a solve.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vrp_plot::routing::{FirstSolutionStrategy, LocalSearchMetaheuristic, SearchParameters};
///
/// let params = SearchParameters::default()
///     .with_first_solution_strategy(FirstSolutionStrategy::Savings)
///     .with_metaheuristic(LocalSearchMetaheuristic::GuidedLocalSearch)
///     .with_time_limit(Duration::from_secs(2));
/// assert_eq!(params.iteration_budget(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    pub first_solution_strategy: FirstSolutionStrategy,
    pub local_search_metaheuristic: LocalSearchMetaheuristic,
    pub time_limit: Option<Duration>,
    pub iteration_limit: Option<usize>,
    /// Scales the guided local search penalty weight relative to the
    /// average arc cost of the first local optimum.
    pub guided_local_search_lambda_coefficient: f64,
    pub seed: u64,
    /// Logs every improvement at INFO instead of DEBUG.
    pub log_search: bool,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::default(),
            local_search_metaheuristic: LocalSearchMetaheuristic::default(),
            time_limit: None,
            iteration_limit: None,
            guided_local_search_lambda_coefficient: 0.1,
            seed: 0,
            log_search: false,
        }
    }
}

impl SearchParameters {
    pub fn with_first_solution_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    pub fn with_metaheuristic(mut self, metaheuristic: LocalSearchMetaheuristic) -> Self {
        self.local_search_metaheuristic = metaheuristic;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn with_lambda_coefficient(mut self, coefficient: f64) -> Self {
        self.guided_local_search_lambda_coefficient = coefficient;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_search(mut self, log_search: bool) -> Self {
        self.log_search = log_search;
        self
    }

    /// Iteration budget actually applied to the search.
    ///
    /// Greedy descent stops on its own at a local optimum. The other
    /// metaheuristics never do, so they fall back to
    /// [`DEFAULT_METAHEURISTIC_ITERATIONS`] when neither limit is set.
    pub fn iteration_budget(&self) -> Option<usize> {
        match (self.iteration_limit, self.time_limit) {
            (Some(limit), _) => Some(limit),
            (None, Some(_)) => None,
            (None, None) => match self.local_search_metaheuristic {
                LocalSearchMetaheuristic::GreedyDescent => None,
                _ => Some(DEFAULT_METAHEURISTIC_ITERATIONS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = SearchParameters::default();
        assert_eq!(p.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
        assert_eq!(p.local_search_metaheuristic, LocalSearchMetaheuristic::GreedyDescent);
        assert_eq!(p.iteration_budget(), None);
        assert!((p.guided_local_search_lambda_coefficient - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_budget() {
        let gls = SearchParameters::default().with_metaheuristic(LocalSearchMetaheuristic::GuidedLocalSearch);
        assert_eq!(gls.iteration_budget(), Some(DEFAULT_METAHEURISTIC_ITERATIONS));
        assert_eq!(gls.clone().with_iteration_limit(5).iteration_budget(), Some(5));
        assert_eq!(
            gls.with_time_limit(Duration::from_millis(10)).iteration_budget(),
            None
        );
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "path-cheapest-arc".parse::<FirstSolutionStrategy>(),
            Ok(FirstSolutionStrategy::PathCheapestArc)
        );
        assert_eq!(
            "PARALLEL_CHEAPEST_INSERTION".parse::<FirstSolutionStrategy>(),
            Ok(FirstSolutionStrategy::ParallelCheapestInsertion)
        );
        let err = "christofides".parse::<FirstSolutionStrategy>().unwrap_err();
        assert!(err.contains("savings"));
    }

    #[test]
    fn test_parse_metaheuristic() {
        assert_eq!(
            "guided_local_search".parse::<LocalSearchMetaheuristic>(),
            Ok(LocalSearchMetaheuristic::GuidedLocalSearch)
        );
        assert_eq!(LocalSearchMetaheuristic::SimulatedAnnealing.to_string(), "simulated-annealing");
    }
}
