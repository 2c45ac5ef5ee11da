//! Points and ordered point sets.
//!
//! - `Point`: a `d`-vector of minimisation objective values.
//! - `PointSet`: an ordered sequence of points sharing one dimension. Samplers build a
//!   fresh set per attempt; the enforcer never patches a set in place.

use crate::error::FrontError;
use nalgebra::DVector;

/// A single objective vector.
pub type Point = DVector<f64>;

/// Ordered points of a common dimension `dim`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    dim: usize,
    points: Vec<Point>,
}

impl PointSet {
    /// Empty set of the given dimension.
    pub fn with_capacity(dim: usize, capacity: usize) -> Self {
        Self {
            dim,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Build from row slices. Rejects zero-dimensional or ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, FrontError> {
        let dim = match rows.first() {
            Some(r) => r.as_ref().len(),
            None => return Ok(Self::with_capacity(0, 0)),
        };
        if dim == 0 {
            return Err(FrontError::ragged("points need at least one coordinate"));
        }
        let mut set = Self::with_capacity(dim, rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(FrontError::ragged(format!(
                    "row {i} has {} coordinates, expected {dim}",
                    row.len()
                )));
            }
            set.points.push(DVector::from_column_slice(row));
        }
        Ok(set)
    }

    /// Append a point. Panics in debug builds on a dimension mismatch.
    #[inline]
    pub(crate) fn push(&mut self, p: Point) {
        debug_assert_eq!(p.len(), self.dim);
        self.points.push(p);
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// New set holding the points at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            dim: self.dim,
            points: indices.iter().map(|&i| self.points[i].clone()).collect(),
        }
    }

    /// Every coordinate multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            dim: self.dim,
            points: self.points.iter().map(|p| p.map(|c| c * factor)).collect(),
        }
    }

    /// Coordinates as plain rows, one `Vec` per point.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.iter().copied().collect()).collect()
    }

    /// Coordinate `axis` of every point, in set order.
    pub fn column(&self, axis: usize) -> Vec<f64> {
        self.points.iter().map(|p| p[axis]).collect()
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point;
    #[inline]
    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
