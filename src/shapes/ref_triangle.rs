//! # Reference Triangle
//!
//! Three point ids resolved against a registry on every call.

use super::path_length;
use crate::adapters::storage::{RefPointSet, RegistryHandle};
use crate::core::geometry::{self, GeoType, Geometry};
use crate::core::{Id, RefPoint, Scalar};
use crate::ports::GeoResult;

/// A triangle over three registered points
#[derive(Clone, Debug)]
pub struct RefTriangle<T, const N: usize> {
    pids: [Id; 3],
    registry: RegistryHandle<T, N>,
}

/// 2-dimensional reference triangle
pub type RefTriangle2<T> = RefTriangle<T, 2>;

/// 3-dimensional reference triangle
pub type RefTriangle3<T> = RefTriangle<T, 3>;

impl<T: Scalar, const N: usize> RefTriangle<T, N> {
    pub(crate) fn new(pids: [Id; 3], registry: RegistryHandle<T, N>) -> Self {
        Self { pids, registry }
    }

    pub fn point_ids(&self) -> [Id; 3] {
        self.pids
    }

    pub fn p1(&self) -> GeoResult<RefPoint<T, N>> {
        self.registry.resolve(self.pids[0])
    }

    pub fn p2(&self) -> GeoResult<RefPoint<T, N>> {
        self.registry.resolve(self.pids[1])
    }

    pub fn p3(&self) -> GeoResult<RefPoint<T, N>> {
        self.registry.resolve(self.pids[2])
    }

    pub fn ref_points(&self) -> GeoResult<[RefPoint<T, N>; 3]> {
        Ok([self.p1()?, self.p2()?, self.p3()?])
    }

    /// Flip the winding in place (`a, b, c` becomes `c, b, a`)
    pub fn reverse(&mut self) -> &mut Self {
        self.pids.reverse();
        self
    }

    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.pids;
        Self::new([c, b, a], self.registry.clone())
    }

    pub fn perimeter(&self) -> GeoResult<T> {
        Ok(path_length(&self.ref_points()?, true))
    }

    /// Area by Heron's formula, valid in any dimension
    pub fn area(&self) -> GeoResult<T> {
        let [a, b, c] = self.ref_points()?;
        let ab = geometry::distance(&a, &b);
        let bc = geometry::distance(&b, &c);
        let ca = geometry::distance(&c, &a);
        let two = T::one() + T::one();
        let s = (ab + bc + ca) / two;
        // Rounding can push a degenerate triangle slightly negative
        Ok((s * (s - ab) * (s - bc) * (s - ca)).max(T::zero()).sqrt())
    }

    pub fn is_bound(&self) -> bool {
        self.registry.is_alive()
    }

    pub fn is_bound_to(&self, registry: &RefPointSet<T, N>) -> bool {
        self.registry.points_to(registry)
    }
}

impl<T: Scalar> Geometry for RefTriangle<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefTriangle2D
    }
}

impl<T: Scalar> Geometry for RefTriangle<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefTriangle3D
    }
}
