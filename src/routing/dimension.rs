//! Dimensions: quantities that accumulate along a route.

use crate::distance::TransitCallback;
use crate::error::RoutingError;

use super::TransitIndex;

/// A quantity accumulated along each route, such as travelled distance.
///
/// At every node of a route the dimension holds a *cumul* value:
///
/// ```text
/// cumul(next) = cumul(prev) + transit(prev, next) + slack,   0 <= slack <= slack_max
/// ```
///
/// and every cumul must lie in `[0, capacity]`. Transits are never negative
/// (the model rejects such callbacks), so cumuls cannot fall below zero and
/// slack, which only raises them, never helps; routes are evaluated with
/// zero slack. When the start cumul is not fixed to zero it may take any
/// value in `[0, capacity]`, and zero is again the cheapest choice.
///
/// A global span cost coefficient `c` adds
/// `c * (max end cumul - min start cumul)` over all vehicles to the
/// objective. With distance as the transit and start cumuls at zero this is
/// `c` times the longest route, which is how min-max routing is expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    transit: TransitIndex,
    slack_max: i64,
    capacity: i64,
    fix_start_cumul_to_zero: bool,
    global_span_cost_coefficient: i64,
}

impl Dimension {
    pub(crate) fn new(
        name: String,
        transit: TransitIndex,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
    ) -> Self {
        Self {
            name,
            transit,
            slack_max,
            capacity,
            fix_start_cumul_to_zero,
            global_span_cost_coefficient: 0,
        }
    }

    /// Dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Callback providing the transit values.
    pub fn transit(&self) -> TransitIndex {
        self.transit
    }

    /// Maximum slack allowed at each node.
    pub fn slack_max(&self) -> i64 {
        self.slack_max
    }

    /// Upper bound on every cumul.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Whether route start cumuls are fixed to zero.
    pub fn fix_start_cumul_to_zero(&self) -> bool {
        self.fix_start_cumul_to_zero
    }

    /// Coefficient of the global span cost.
    pub fn global_span_cost_coefficient(&self) -> i64 {
        self.global_span_cost_coefficient
    }

    /// Sets the coefficient of the global span cost.
    ///
    /// A negative coefficient would reward long routes and is rejected.
    pub fn set_global_span_cost_coefficient(&mut self, coefficient: i64) -> Result<(), RoutingError> {
        if coefficient < 0 {
            return Err(RoutingError::NegativeDimensionBound {
                name: self.name.clone(),
                field: "global_span_cost_coefficient",
                value: coefficient,
            });
        }
        self.global_span_cost_coefficient = coefficient;
        Ok(())
    }

    /// Cumul values along a full path (depot at both ends).
    pub fn cumuls(&self, callback: &dyn TransitCallback, path: &[usize]) -> Vec<i64> {
        let mut cumuls = Vec::with_capacity(path.len());
        let mut cumul = 0;
        for (i, &node) in path.iter().enumerate() {
            if i > 0 {
                cumul += callback.transit(path[i - 1], node);
            }
            cumuls.push(cumul);
        }
        cumuls
    }

    /// Returns `true` if a cumul value respects the capacity.
    pub fn admits(&self, cumul: i64) -> bool {
        (0..=self.capacity).contains(&cumul)
    }

    /// Span cost given the end cumul of every vehicle.
    ///
    /// Start cumuls are all zero, so the span is the largest end cumul.
    pub fn span_cost<I>(&self, end_cumuls: I) -> i64
    where
        I: IntoIterator<Item = i64>,
    {
        if self.global_span_cost_coefficient == 0 {
            return 0;
        }
        let span = end_cumuls.into_iter().max().unwrap_or(0).max(0);
        self.global_span_cost_coefficient.saturating_mul(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn distance_dimension() -> Dimension {
        Dimension::new("Distance".into(), TransitIndex(0), 0, 100, true)
    }

    #[test]
    fn test_cumuls() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 10, 20], vec![10, 0, 15], vec![20, 15, 0]])
            .expect("valid");
        let dim = distance_dimension();
        assert_eq!(dim.cumuls(&dm, &[0, 1, 2, 0]), vec![0, 10, 25, 45]);
        assert_eq!(dim.cumuls(&dm, &[0, 0]), vec![0, 0]);
    }

    #[test]
    fn test_admits() {
        let dim = distance_dimension();
        assert!(dim.admits(0));
        assert!(dim.admits(100));
        assert!(!dim.admits(101));
        assert!(!dim.admits(-1));
    }

    #[test]
    fn test_span_cost() {
        let mut dim = distance_dimension();
        assert_eq!(dim.span_cost([30, 50, 0]), 0);
        dim.set_global_span_cost_coefficient(100).expect("non-negative");
        assert_eq!(dim.global_span_cost_coefficient(), 100);
        assert_eq!(dim.span_cost([30, 50, 0]), 5000);
        assert_eq!(dim.span_cost(Vec::new()), 0);
    }

    #[test]
    fn test_negative_span_coefficient_rejected() {
        let mut dim = distance_dimension();
        dim.set_global_span_cost_coefficient(7).expect("non-negative");
        assert!(matches!(
            dim.set_global_span_cost_coefficient(-100),
            Err(RoutingError::NegativeDimensionBound {
                field: "global_span_cost_coefficient",
                value: -100,
                ..
            })
        ));
        assert_eq!(dim.global_span_cost_coefficient(), 7);
    }

    #[test]
    fn test_span_cost_saturates() {
        let mut dim = distance_dimension();
        dim.set_global_span_cost_coefficient(i64::MAX / 2).expect("non-negative");
        assert_eq!(dim.span_cost([3000]), i64::MAX);
    }
}
