//! # Point Set
//!
//! Ordered, id-less collection of points.
//!
//! Good for:
//! - Bulk point clouds that no shape refers to
//! - Generated test populations
//! - Exchange with tools that only understand `x,y[,z]`

use std::path::Path;

use crate::adapters::codec;
use crate::core::config::{Bounds, Encoding};
use crate::core::{Point, Scalar};
use crate::engine::Generator;
use crate::ports::{GeoResult, RecordContainer, RngSampler};

/// Ordered collection of points
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<T, const N: usize> {
    points: Vec<Point<T, N>>,
}

/// 2-dimensional point set
pub type PointSet2<T> = PointSet<T, 2>;

/// 3-dimensional point set
pub type PointSet3<T> = PointSet<T, 3>;

impl<T: Scalar, const N: usize> PointSet<T, N> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point<T, N>) {
        self.points.push(point);
    }

    pub fn get(&self, index: usize) -> Option<&Point<T, N>> {
        self.points.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Point<T, N>> {
        self.points.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T, N>> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point<T, N>] {
        &self.points
    }

    pub fn into_vec(self) -> Vec<Point<T, N>> {
        self.points
    }

    /// Write every point to `path`, in order
    pub fn write(&self, path: impl AsRef<Path>, encoding: Encoding) -> GeoResult<()> {
        codec::write(self, path, encoding)
    }

    /// Replace the contents with the points stored at `path`
    pub fn read(&mut self, path: impl AsRef<Path>, encoding: Encoding) -> GeoResult<()> {
        codec::read(self, path, encoding)
    }

    /// Generate `count` points inside `bounds`
    ///
    /// Uses the thread-local RNG and retries without limit, see
    /// [`Generator`] for a capped alternative.
    pub fn random_generate(
        count: usize,
        bounds: &Bounds<T, N>,
        accept: Option<&dyn Fn(&Point<T, N>) -> bool>,
    ) -> GeoResult<Self> {
        Generator::new(RngSampler::new(rand::thread_rng())).generate_points(count, bounds, accept)
    }
}

impl<T: Scalar, const N: usize> Default for PointSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const N: usize> From<Vec<Point<T, N>>> for PointSet<T, N> {
    fn from(points: Vec<Point<T, N>>) -> Self {
        Self { points }
    }
}

impl<T: Scalar, const N: usize> FromIterator<Point<T, N>> for PointSet<T, N> {
    fn from_iter<I: IntoIterator<Item = Point<T, N>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar, const N: usize> Extend<Point<T, N>> for PointSet<T, N> {
    fn extend<I: IntoIterator<Item = Point<T, N>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a PointSet<T, N> {
    type Item = &'a Point<T, N>;
    type IntoIter = std::slice::Iter<'a, Point<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T: Scalar, const N: usize> RecordContainer for PointSet<T, N> {
    type Record = Point<T, N>;

    fn records(&self) -> Vec<Self::Record> {
        self.points.clone()
    }

    fn clear_records(&mut self) {
        self.points.clear();
    }

    fn extend_records(&mut self, records: Vec<Self::Record>) {
        self.points.extend(records);
    }
}
