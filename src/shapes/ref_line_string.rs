//! # Reference Line String
//!
//! Open polyline through registered points, in any dimension.

use super::path_length;
use crate::adapters::storage::{RefPointSet, RegistryHandle};
use crate::core::geometry::{GeoType, Geometry};
use crate::core::{Id, RefPoint, Scalar};
use crate::ports::GeoResult;

/// An open polyline over registered points
#[derive(Clone, Debug)]
pub struct RefLineString<T, const N: usize> {
    pids: Vec<Id>,
    registry: RegistryHandle<T, N>,
}

/// 2-dimensional reference line string
pub type RefLineString2<T> = RefLineString<T, 2>;

/// 3-dimensional reference line string
pub type RefLineString3<T> = RefLineString<T, 3>;

impl<T: Scalar, const N: usize> RefLineString<T, N> {
    pub(crate) fn new(pids: Vec<Id>, registry: RegistryHandle<T, N>) -> Self {
        Self { pids, registry }
    }

    pub fn point_ids(&self) -> &[Id] {
        &self.pids
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn ref_points(&self) -> GeoResult<Vec<RefPoint<T, N>>> {
        self.registry.resolve_all(&self.pids)
    }

    /// Sum of segment lengths, without closing the path
    pub fn length(&self) -> GeoResult<T> {
        Ok(path_length(&self.ref_points()?, false))
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.pids.reverse();
        self
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.pids.iter().rev().copied().collect(), self.registry.clone())
    }

    pub fn is_bound(&self) -> bool {
        self.registry.is_alive()
    }

    pub fn is_bound_to(&self, registry: &RefPointSet<T, N>) -> bool {
        self.registry.points_to(registry)
    }
}

impl<T: Scalar> Geometry for RefLineString<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefLineString2D
    }
}

impl<T: Scalar> Geometry for RefLineString<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefLineString3D
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::RefPointSet3;
    use crate::ports::GeoError;

    fn create_test_registry() -> RefPointSet3<f64> {
        [
            RefPoint::new(Id::new(10), [0.0, 0.0, 0.0]),
            RefPoint::new(Id::new(11), [3.0, 4.0, 0.0]),
            RefPoint::new(Id::new(12), [3.0, 4.0, 2.0]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_ref_line_string_length_is_open() {
        let set = create_test_registry();
        let path = set.create_ref_line_string([Id::new(10), Id::new(11), Id::new(12)]);

        assert_eq!(path.length().unwrap(), 7.0);
        assert_eq!(path.reversed().length().unwrap(), 7.0);
        assert_eq!(path.geo_type(), GeoType::RefLineString3D);
    }

    #[test]
    fn test_ref_line_string_repeated_ids() {
        let set = create_test_registry();
        let path = set.create_ref_line_string([Id::new(10), Id::new(11), Id::new(10)]);

        assert_eq!(path.len(), 3);
        assert_eq!(path.length().unwrap(), 10.0);
    }

    #[test]
    fn test_ref_line_string_reverse() {
        let set = create_test_registry();
        let mut path = set.create_ref_line_string([Id::new(10), Id::new(12)]);
        path.reverse();

        assert_eq!(path.point_ids(), &[Id::new(12), Id::new(10)]);
        assert_eq!(path.ref_points().unwrap()[0].id(), Id::new(12));
    }

    #[test]
    fn test_ref_line_string_single_point() {
        let set = create_test_registry();
        let path = set.create_ref_line_string([Id::new(11)]);
        assert_eq!(path.length().unwrap(), 0.0);
    }

    #[test]
    fn test_ref_line_string_dropped_registry() {
        let set = create_test_registry();
        let path = set.create_ref_line_string([Id::new(10), Id::new(11)]);
        drop(set);

        assert!(!path.is_bound());
        assert!(matches!(path.length(), Err(GeoError::RegistryDropped)));
    }
}
