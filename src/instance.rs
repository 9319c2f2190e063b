//! Problem data: locations, distances, fleet, and the distance limit.
//!
//! A [`ProblemConfig`] is read from JSON or taken from the built-in
//! [`ProblemConfig::demo`] and turned into a configured [`RoutingModel`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{DistanceMatrix, Metric};
use crate::error::RoutingError;
use crate::models::Location;
use crate::routing::RoutingModel;

/// Name of the dimension tracking distance travelled.
pub const DISTANCE_DIMENSION: &str = "Distance";

fn default_max_route_distance() -> i64 {
    3000
}

fn default_global_span_cost_coefficient() -> i64 {
    100
}

/// A min-max VRP instance with one distance dimension.
///
/// # Examples
///
/// ```
/// use vrp_plot::instance::ProblemConfig;
///
/// let config: ProblemConfig = serde_json::from_str(r#"{
///     "locations": [[0, 0], [10, 0], [0, 10]],
///     "num_vehicles": 2
/// }"#).unwrap();
/// assert_eq!(config.max_route_distance, 3000);
///
/// let (model, locations) = config.build().unwrap();
/// assert_eq!(locations.len(), 3);
/// assert_eq!(model.arc_cost(1, 2), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Node coordinates; index 0 is usually the depot.
    pub locations: Vec<(f64, f64)>,
    /// Precomputed distances. Computed from `locations` with `metric` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_matrix: Option<Vec<Vec<i64>>>,
    #[serde(default)]
    pub metric: Metric,
    pub num_vehicles: usize,
    #[serde(default)]
    pub depot: usize,
    /// Capacity of the distance dimension: the longest route allowed.
    #[serde(default = "default_max_route_distance")]
    pub max_route_distance: i64,
    #[serde(default)]
    pub slack_max: i64,
    #[serde(default = "default_global_span_cost_coefficient")]
    pub global_span_cost_coefficient: i64,
}

impl ProblemConfig {
    /// Built-in instance: 17 city blocks, 4 vehicles, depot 0.
    pub fn demo() -> Self {
        let locations = vec![
            (456.0, 320.0),
            (228.0, 0.0),
            (912.0, 0.0),
            (0.0, 80.0),
            (114.0, 80.0),
            (570.0, 160.0),
            (798.0, 160.0),
            (342.0, 240.0),
            (684.0, 240.0),
            (570.0, 400.0),
            (912.0, 400.0),
            (114.0, 480.0),
            (228.0, 480.0),
            (342.0, 560.0),
            (684.0, 560.0),
            (0.0, 640.0),
            (798.0, 640.0),
        ];
        #[rustfmt::skip]
        let distance_matrix = vec![
            vec![0, 548, 776, 696, 582, 274, 502, 194, 308, 194, 536, 502, 388, 354, 468, 776, 662],
            vec![548, 0, 684, 308, 194, 502, 730, 354, 696, 742, 1084, 594, 480, 674, 1016, 868, 1210],
            vec![776, 684, 0, 992, 878, 502, 274, 810, 468, 742, 400, 1278, 1164, 1130, 788, 1552, 754],
            vec![696, 308, 992, 0, 114, 650, 878, 502, 844, 890, 1232, 514, 628, 822, 1164, 560, 1358],
            vec![582, 194, 878, 114, 0, 536, 764, 388, 730, 776, 1118, 400, 514, 708, 1050, 674, 1244],
            vec![274, 502, 502, 650, 536, 0, 228, 308, 194, 240, 582, 776, 662, 628, 514, 1050, 708],
            vec![502, 730, 274, 878, 764, 228, 0, 536, 194, 468, 354, 1004, 890, 856, 514, 1278, 480],
            vec![194, 354, 810, 502, 388, 308, 536, 0, 342, 388, 730, 468, 354, 320, 662, 742, 856],
            vec![308, 696, 468, 844, 730, 194, 194, 342, 0, 274, 388, 810, 696, 662, 320, 1084, 514],
            vec![194, 742, 742, 890, 776, 240, 468, 388, 274, 0, 342, 536, 422, 388, 274, 810, 468],
            vec![536, 1084, 400, 1232, 1118, 582, 354, 730, 388, 342, 0, 878, 764, 730, 388, 1152, 354],
            vec![502, 594, 1278, 514, 400, 776, 1004, 468, 810, 536, 878, 0, 114, 308, 650, 274, 844],
            vec![388, 480, 1164, 628, 514, 662, 890, 354, 696, 422, 764, 114, 0, 194, 536, 388, 730],
            vec![354, 674, 1130, 822, 708, 628, 856, 320, 662, 388, 730, 308, 194, 0, 342, 422, 536],
            vec![468, 1016, 788, 1164, 1050, 514, 514, 662, 320, 274, 388, 650, 536, 342, 0, 764, 194],
            vec![776, 868, 1552, 560, 674, 1050, 1278, 742, 1084, 810, 1152, 274, 388, 422, 764, 0, 798],
            vec![662, 1210, 754, 1358, 1244, 708, 480, 856, 514, 468, 354, 844, 730, 536, 194, 798, 0],
        ];
        Self {
            locations,
            distance_matrix: Some(distance_matrix),
            metric: Metric::Manhattan,
            num_vehicles: 4,
            depot: 0,
            max_route_distance: default_max_route_distance(),
            slack_max: 0,
            global_span_cost_coefficient: default_global_span_cost_coefficient(),
        }
    }

    /// Reads a problem from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Locations with their node indices.
    pub fn locations(&self) -> Vec<Location> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Location::new(i, x, y))
            .collect()
    }

    /// Builds the routing model.
    ///
    /// The distance callback is the arc cost of every vehicle and the
    /// transit of the [`DISTANCE_DIMENSION`], whose start cumul is fixed to
    /// zero and whose span is charged `global_span_cost_coefficient`.
    pub fn build(&self) -> Result<(RoutingModel, Vec<Location>), RoutingError> {
        let locations = self.locations();
        let matrix = match &self.distance_matrix {
            Some(rows) => DistanceMatrix::from_rows(rows)?,
            None => DistanceMatrix::from_locations(&locations, self.metric),
        };
        if matrix.size() != locations.len() {
            return Err(RoutingError::LocationMismatch {
                locations: locations.len(),
                matrix: matrix.size(),
            });
        }

        let symmetric = matrix.is_symmetric();
        let mut model = RoutingModel::new(matrix.size(), self.num_vehicles, self.depot)?;
        let distance = model.register_transit_callback(matrix);
        model.set_arc_cost_evaluator_of_all_vehicles(distance)?;
        model.add_dimension(
            distance,
            self.slack_max,
            self.max_route_distance,
            true,
            DISTANCE_DIMENSION,
        )?;
        model
            .dimension_mut(DISTANCE_DIMENSION)?
            .set_global_span_cost_coefficient(self.global_span_cost_coefficient)?;

        debug!(
            nodes = model.num_nodes(),
            vehicles = model.num_vehicles(),
            max_route_distance = self.max_route_distance,
            symmetric,
            "model built"
        );
        Ok((model, locations))
    }
}
