//! Dense integer distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::models::Location;

/// How distances are derived from coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `|x1 - x2| + |y1 - y2|`, the natural choice for a city of rectangular blocks.
    #[default]
    Manhattan,
    /// Straight-line distance, rounded to the nearest integer.
    Euclidean,
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Costs are integers, matching the integral arc costs of the routing model.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::Location;
/// use vrp_plot::distance::{DistanceMatrix, Metric};
///
/// let locations = vec![
///     Location::new(0, 456.0, 320.0),
///     Location::new(1, 228.0, 0.0),
///     Location::new(2, 912.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, Metric::Manhattan);
/// assert_eq!(dm.get(0, 1), 548);
/// assert_eq!(dm.get(1, 2), 684);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes a distance matrix from location coordinates.
    pub fn from_locations(locations: &[Location], metric: Metric) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = match metric {
                    Metric::Manhattan => locations[i].manhattan_to(&locations[j]),
                    Metric::Euclidean => locations[i].euclidean_to(&locations[j]),
                };
                let d = d.round() as i64;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows, as found in problem files.
    ///
    /// Every row must have as many entries as there are rows, and no entry
    /// may be negative.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, RoutingError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(RoutingError::NonSquareMatrix {
                    row: from,
                    len: row.len(),
                    expected: size,
                });
            }
            if let Some((to, &value)) = row.iter().enumerate().find(|(_, v)| **v < 0) {
                return Err(RoutingError::NegativeDistance { from, to, value });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.data.chunks(self.size.max(1)).map(<[i64]>::to_vec).collect()
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(0, 0.0, 0.0),
            Location::new(1, 3.0, 4.0),
            Location::new(2, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_locations_manhattan() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Manhattan);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 7);
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(1, 2), 7);
        assert_eq!(dm.get(0, 0), 0);
    }

    #[test]
    fn test_from_locations_euclidean() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Euclidean);
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(1, 2), 5);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Manhattan);
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 3], vec![4, 0]]).expect("valid");
        assert_eq!(dm.get(0, 1), 3);
        assert_eq!(dm.get(1, 0), 4);
        assert_eq!(dm.rows(), vec![vec![0, 3], vec![4, 0]]);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(&[vec![0, 3], vec![4]]).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_from_rows_negative() {
        let err = DistanceMatrix::from_rows(&[vec![0, -3], vec![4, 0]]).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::NegativeDistance {
                from: 0,
                to: 1,
                value: -3
            }
        ));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42);
        assert_eq!(dm.get(0, 1), 42);
        assert_eq!(dm.get(1, 0), 0);
        assert!(!dm.is_symmetric());
    }
}
