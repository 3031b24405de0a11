//! # Reference Polygon
//!
//! Closed planar ring of point ids. The last vertex connects back to the
//! first implicitly, so callers must not repeat the first id at the end.

use super::path_length;
use crate::adapters::storage::{RefPointSet, RegistryHandle};
use crate::core::geometry::{GeoType, Geometry};
use crate::core::{Id, RefPoint, Scalar};
use crate::ports::GeoResult;

/// A closed polygon over registered points
#[derive(Clone, Debug)]
pub struct RefPolygon<T> {
    pids: Vec<Id>,
    registry: RegistryHandle<T, 2>,
}

impl<T: Scalar> RefPolygon<T> {
    pub(crate) fn new(pids: Vec<Id>, registry: RegistryHandle<T, 2>) -> Self {
        Self { pids, registry }
    }

    pub fn point_ids(&self) -> &[Id] {
        &self.pids
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    /// Resolve every vertex, failing on the first missing id
    pub fn ref_points(&self) -> GeoResult<Vec<RefPoint<T, 2>>> {
        self.registry.resolve_all(&self.pids)
    }

    pub fn perimeter(&self) -> GeoResult<T> {
        Ok(path_length(&self.ref_points()?, true))
    }

    /// Unsigned shoelace area; zero for fewer than three vertices
    pub fn area(&self) -> GeoResult<T> {
        let points = self.ref_points()?;
        if points.len() < 3 {
            return Ok(T::zero());
        }
        let twice = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .fold(T::zero(), |acc, (a, b)| acc + a.x() * b.y() - b.x() * a.y());
        Ok((twice / (T::one() + T::one())).abs())
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.pids.reverse();
        self
    }

    pub fn reversed(&self) -> Self {
        let mut pids = self.pids.clone();
        pids.reverse();
        Self::new(pids, self.registry.clone())
    }

    pub fn is_bound(&self) -> bool {
        self.registry.is_alive()
    }

    pub fn is_bound_to(&self, registry: &RefPointSet<T, 2>) -> bool {
        self.registry.points_to(registry)
    }
}

impl<T: Scalar> Geometry for RefPolygon<T> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefPolygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::RefPointSet2;
    use crate::ports::GeoError;

    fn create_unit_square() -> RefPointSet2<f64> {
        [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
            .into_iter()
            .enumerate()
            .map(|(i, c)| RefPoint::new(Id::new(i as u32), c))
            .collect()
    }

    #[test]
    fn test_ref_polygon_square() {
        let set = create_unit_square();
        let poly = set.create_ref_polygon((0..4).map(Id::new));

        assert_eq!(poly.len(), 4);
        assert_eq!(poly.perimeter().unwrap(), 4.0);
        assert_eq!(poly.area().unwrap(), 1.0);
        assert_eq!(poly.geo_type(), GeoType::RefPolygon);
    }

    #[test]
    fn test_ref_polygon_winding_does_not_change_area() {
        let set = create_unit_square();
        let mut poly = set.create_ref_polygon((0..4).map(Id::new));
        let reversed = poly.reversed();

        assert_eq!(reversed.point_ids(), &[Id::new(3), Id::new(2), Id::new(1), Id::new(0)]);
        assert_eq!(reversed.area().unwrap(), poly.area().unwrap());

        poly.reverse();
        assert_eq!(poly.point_ids(), reversed.point_ids());
    }

    #[test]
    fn test_ref_polygon_degenerate() {
        let set = create_unit_square();
        let empty = set.create_ref_polygon(std::iter::empty());
        let segment = set.create_ref_polygon([Id::new(0), Id::new(1)]);

        assert!(empty.is_empty());
        assert_eq!(empty.perimeter().unwrap(), 0.0);
        assert_eq!(segment.area().unwrap(), 0.0);
        assert_eq!(segment.perimeter().unwrap(), 2.0);
    }

    #[test]
    fn test_ref_polygon_missing_vertex() {
        let set = create_unit_square();
        let poly = set.create_ref_polygon([Id::new(0), Id::new(7), Id::new(2)]);

        assert!(matches!(poly.area(), Err(GeoError::KeyNotFound(id)) if id == Id::new(7)));
    }
}
