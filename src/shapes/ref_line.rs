//! # Reference Line
//!
//! A segment stored as two point ids plus a link to the registry that
//! resolves them. Every accessor re-reads the registry, so edits to the
//! registry show up on the next call.

use crate::adapters::storage::{RefPointSet, RegistryHandle};
use crate::core::geometry::{self, GeoType, Geometry};
use crate::core::{Id, Line, RefPoint, Scalar};
use crate::ports::{GeoError, GeoResult};

/// A line between two registered points
///
/// Built only by [`RefPointSet::create_ref_line`].
#[derive(Clone, Debug)]
pub struct RefLine<T, const N: usize> {
    pids: [Id; 2],
    registry: RegistryHandle<T, N>,
}

/// 2-dimensional reference line
pub type RefLine2<T> = RefLine<T, 2>;

/// 3-dimensional reference line
pub type RefLine3<T> = RefLine<T, 3>;

impl<T: Scalar, const N: usize> RefLine<T, N> {
    pub(crate) fn new(pids: [Id; 2], registry: RegistryHandle<T, N>) -> Self {
        Self { pids, registry }
    }

    pub fn pid1(&self) -> Id {
        self.pids[0]
    }

    pub fn pid2(&self) -> Id {
        self.pids[1]
    }

    pub fn point_ids(&self) -> [Id; 2] {
        self.pids
    }

    /// Resolve the head point
    pub fn p1(&self) -> GeoResult<RefPoint<T, N>> {
        self.registry.resolve(self.pids[0])
    }

    /// Resolve the tail point
    pub fn p2(&self) -> GeoResult<RefPoint<T, N>> {
        self.registry.resolve(self.pids[1])
    }

    pub fn ref_points(&self) -> GeoResult<[RefPoint<T, N>; 2]> {
        Ok([self.p1()?, self.p2()?])
    }

    /// Swap head and tail ids in place
    pub fn reverse(&mut self) -> &mut Self {
        self.pids.swap(0, 1);
        self
    }

    /// A line over the same registry with head and tail swapped
    pub fn reversed(&self) -> Self {
        Self::new([self.pids[1], self.pids[0]], self.registry.clone())
    }

    pub fn length(&self) -> GeoResult<T> {
        let [p1, p2] = self.ref_points()?;
        Ok(geometry::distance(&p1, &p2))
    }

    pub fn azimuth_rhr(&self) -> GeoResult<T> {
        let [p1, p2] = self.ref_points()?;
        Ok(geometry::azimuth_rhr(&p1, &p2))
    }

    pub fn azimuth_lhr(&self) -> GeoResult<T> {
        let [p1, p2] = self.ref_points()?;
        Ok(geometry::azimuth_lhr(&p1, &p2))
    }

    /// Copy both endpoints out of the registry into an owning line
    pub fn to_line(&self) -> GeoResult<Line<T, N>> {
        let [p1, p2] = self.ref_points()?;
        Ok(Line::new(p1.into_point(), p2.into_point()))
    }

    /// Whether the registry this line was built from still exists
    pub fn is_bound(&self) -> bool {
        self.registry.is_alive()
    }

    /// Whether this line resolves against `registry`
    pub fn is_bound_to(&self, registry: &RefPointSet<T, N>) -> bool {
        self.registry.points_to(registry)
    }
}

impl<T: Scalar> RefLine<T, 3> {
    pub fn zenith_rhr(&self) -> GeoResult<T> {
        let [p1, p2] = self.ref_points()?;
        Ok(geometry::zenith_rhr(&p1, &p2))
    }

    pub fn zenith_lhr(&self) -> GeoResult<T> {
        let [p1, p2] = self.ref_points()?;
        Ok(geometry::zenith_lhr(&p1, &p2))
    }
}

impl<T: Scalar, const N: usize> TryFrom<&RefLine<T, N>> for Line<T, N> {
    type Error = GeoError;

    fn try_from(line: &RefLine<T, N>) -> Result<Self, Self::Error> {
        line.to_line()
    }
}

impl<T: Scalar> Geometry for RefLine<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefLine2D
    }
}

impl<T: Scalar> Geometry for RefLine<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefLine3D
    }
}
