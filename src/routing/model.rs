//! Routing model: nodes, fleet, callbacks, arc costs, and dimensions.

use crate::distance::TransitCallback;
use crate::error::RoutingError;
use crate::models::Vehicle;

use super::Dimension;

/// Handle to a transit callback registered on a [`RoutingModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitIndex(pub(crate) usize);

impl TransitIndex {
    /// Position of the callback in registration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A vehicle routing model over `num_nodes` nodes served by a homogeneous
/// fleet based at a single depot.
///
/// Arc costs and dimensions both read registered transit callbacks. Every
/// non-depot node must be visited exactly once.
///
/// # Examples
///
/// ```
/// use vrp_plot::distance::DistanceMatrix;
/// use vrp_plot::routing::RoutingModel;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 4, 6],
///     vec![4, 0, 3],
///     vec![6, 3, 0],
/// ]).unwrap();
///
/// let mut model = RoutingModel::new(3, 2, 0).unwrap();
/// let distance = model.register_transit_callback(dm);
/// model.set_arc_cost_evaluator_of_all_vehicles(distance).unwrap();
/// model.add_dimension(distance, 0, 20, true, "Distance").unwrap();
/// model.dimension_mut("Distance").unwrap().set_global_span_cost_coefficient(100).unwrap();
///
/// let solution = model.solve().unwrap();
/// assert_eq!(solution.num_served(), 2);
/// ```
pub struct RoutingModel {
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
    callbacks: Vec<Box<dyn TransitCallback>>,
    arc_cost: Option<TransitIndex>,
    dimensions: Vec<Dimension>,
}

impl RoutingModel {
    /// Creates a model with `num_nodes` nodes and `num_vehicles` vehicles
    /// starting and ending at `depot`.
    pub fn new(num_nodes: usize, num_vehicles: usize, depot: usize) -> Result<Self, RoutingError> {
        if num_nodes == 0 {
            return Err(RoutingError::NoNodes);
        }
        if num_vehicles == 0 {
            return Err(RoutingError::NoVehicles);
        }
        if depot >= num_nodes {
            return Err(RoutingError::NodeOutOfRange {
                node: depot,
                num_nodes,
            });
        }
        Ok(Self {
            num_nodes,
            num_vehicles,
            depot,
            callbacks: Vec::new(),
            arc_cost: None,
            dimensions: Vec::new(),
        })
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of vehicles in the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// The fleet, in vehicle order.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        (0..self.num_vehicles)
            .map(|id| Vehicle::new(id, self.depot))
            .collect()
    }

    /// Nodes that must be visited (every node except the depot).
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes).filter(move |&n| n != self.depot)
    }

    /// Registers a transit callback and returns its handle.
    pub fn register_transit_callback<C>(&mut self, callback: C) -> TransitIndex
    where
        C: TransitCallback + 'static,
    {
        self.callbacks.push(Box::new(callback));
        TransitIndex(self.callbacks.len() - 1)
    }

    /// Uses the given callback as the arc cost of every vehicle.
    pub fn set_arc_cost_evaluator_of_all_vehicles(
        &mut self,
        transit: TransitIndex,
    ) -> Result<(), RoutingError> {
        self.check_callback(transit)?;
        self.arc_cost = Some(transit);
        Ok(())
    }

    /// Returns `true` once an arc cost evaluator is set.
    pub fn has_arc_cost(&self) -> bool {
        self.arc_cost.is_some()
    }

    /// Arc cost from `from` to `to`, zero when no evaluator is set.
    pub fn arc_cost(&self, from: usize, to: usize) -> i64 {
        match self.arc_cost {
            Some(transit) => self.transit(transit, from, to),
            None => 0,
        }
    }

    /// Arc cost for a specific vehicle. The fleet is homogeneous, so this
    /// equals [`arc_cost`](Self::arc_cost).
    pub fn arc_cost_for_vehicle(&self, from: usize, to: usize, _vehicle: usize) -> i64 {
        self.arc_cost(from, to)
    }

    /// Evaluates a registered callback.
    ///
    /// # Panics
    ///
    /// Panics if `transit` was not issued by this model.
    pub fn transit(&self, transit: TransitIndex, from: usize, to: usize) -> i64 {
        self.callbacks[transit.0].transit(from, to)
    }

    /// Borrows a registered callback.
    pub fn callback(&self, transit: TransitIndex) -> Result<&dyn TransitCallback, RoutingError> {
        self.callbacks
            .get(transit.0)
            .map(|c| c.as_ref())
            .ok_or(RoutingError::UnknownCallback(transit.0))
    }

    /// Adds a dimension accumulating `transit` along every route.
    ///
    /// Cumuls are bounded by `[0, capacity]`; `slack_max` bounds the slack
    /// allowed at each node. Names must be unique, and the callback must not
    /// return a negative transit between any two nodes.
    pub fn add_dimension(
        &mut self,
        transit: TransitIndex,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
        name: impl Into<String>,
    ) -> Result<(), RoutingError> {
        let name = name.into();
        self.check_callback(transit)?;
        if self.dimensions.iter().any(|d| d.name() == name) {
            return Err(RoutingError::DuplicateDimension(name));
        }
        for (field, value) in [("slack", slack_max), ("capacity", capacity)] {
            if value < 0 {
                return Err(RoutingError::NegativeDimensionBound { name, field, value });
            }
        }
        for from in 0..self.num_nodes {
            for to in 0..self.num_nodes {
                let value = self.transit(transit, from, to);
                if value < 0 {
                    return Err(RoutingError::NegativeTransit {
                        name,
                        from,
                        to,
                        value,
                    });
                }
            }
        }
        self.dimensions.push(Dimension::new(
            name,
            transit,
            slack_max,
            capacity,
            fix_start_cumul_to_zero,
        ));
        Ok(())
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Result<&Dimension, RoutingError> {
        self.dimensions
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| RoutingError::UnknownDimension(name.to_string()))
    }

    /// Looks up a dimension by name for modification.
    pub fn dimension_mut(&mut self, name: &str) -> Result<&mut Dimension, RoutingError> {
        self.dimensions
            .iter_mut()
            .find(|d| d.name() == name)
            .ok_or_else(|| RoutingError::UnknownDimension(name.to_string()))
    }

    /// All dimensions, in creation order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Checks that `transit` exists and covers every node of the model.
    fn check_callback(&self, transit: TransitIndex) -> Result<(), RoutingError> {
        let callback = self.callback(transit)?;
        match callback.size() {
            Some(size) if size < self.num_nodes => Err(RoutingError::CallbackTooSmall {
                callback: transit.0,
                size,
                num_nodes: self.num_nodes,
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for RoutingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingModel")
            .field("num_nodes", &self.num_nodes)
            .field("num_vehicles", &self.num_vehicles)
            .field("depot", &self.depot)
            .field("callbacks", &self.callbacks.len())
            .field("arc_cost", &self.arc_cost)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}
