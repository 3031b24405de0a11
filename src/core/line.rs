//! # Line
//!
//! A segment that owns its two endpoints.
//!
//! This is what a registry-backed line materializes into once the registry
//! dependency is no longer wanted.

use std::fmt;

use super::geometry::{self, GeoType, Geometry};
use super::point::{Point, Scalar};

/// A line segment between two owned points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T, const N: usize> {
    p1: Point<T, N>,
    p2: Point<T, N>,
}

/// 2-dimensional line
pub type Line2<T> = Line<T, 2>;

/// 3-dimensional line
pub type Line3<T> = Line<T, 3>;

impl<T: Scalar, const N: usize> Line<T, N> {
    pub fn new(p1: Point<T, N>, p2: Point<T, N>) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> &Point<T, N> {
        &self.p1
    }

    pub fn p2(&self) -> &Point<T, N> {
        &self.p2
    }

    pub fn p1_mut(&mut self) -> &mut Point<T, N> {
        &mut self.p1
    }

    pub fn p2_mut(&mut self) -> &mut Point<T, N> {
        &mut self.p2
    }

    pub fn points(&self) -> [Point<T, N>; 2] {
        [self.p1, self.p2]
    }

    /// Swap head and tail in place
    pub fn reverse(&mut self) -> &mut Self {
        std::mem::swap(&mut self.p1, &mut self.p2);
        self
    }

    /// A copy with head and tail swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    pub fn length(&self) -> T {
        geometry::distance(&self.p1, &self.p2)
    }

    pub fn azimuth_rhr(&self) -> T {
        geometry::azimuth_rhr(&self.p1, &self.p2)
    }

    pub fn azimuth_lhr(&self) -> T {
        geometry::azimuth_lhr(&self.p1, &self.p2)
    }
}

impl<T: Scalar> Line<T, 3> {
    pub fn zenith_rhr(&self) -> T {
        geometry::zenith_rhr(&self.p1, &self.p2)
    }

    pub fn zenith_lhr(&self) -> T {
        geometry::zenith_lhr(&self.p1, &self.p2)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Line<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.p1, self.p2)
    }
}

impl<T: Scalar> Geometry for Line<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::Line2D
    }
}

impl<T: Scalar> Geometry for Line<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::Line3D
    }
}
