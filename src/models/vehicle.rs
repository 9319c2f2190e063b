//! Vehicle type.

/// A vehicle of the fleet.
///
/// Every vehicle starts and ends its route at the same depot node.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::Vehicle;
///
/// let v = Vehicle::new(2, 0);
/// assert_eq!(v.id(), 2);
/// assert_eq!(v.depot(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    id: usize,
    depot: usize,
}

impl Vehicle {
    /// Creates a vehicle based at `depot`.
    pub fn new(id: usize, depot: usize) -> Self {
        Self { id, depot }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Depot node (start and end of the route).
    pub fn depot(&self) -> usize {
        self.depot
    }
}
