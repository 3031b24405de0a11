//! # Reference Rectangle
//!
//! Axis-aligned, planar only. The two stored ids are opposite corners;
//! nothing checks that the "top left" one really lies above and left.

use crate::adapters::storage::{RefPointSet, RegistryHandle};
use crate::core::geometry::{GeoType, Geometry};
use crate::core::{Id, RefPoint, Scalar};
use crate::ports::GeoResult;

/// An axis-aligned rectangle over two registered corners
#[derive(Clone, Debug)]
pub struct RefRectangle<T> {
    pids: [Id; 2],
    registry: RegistryHandle<T, 2>,
}

impl<T: Scalar> RefRectangle<T> {
    pub(crate) fn new(pids: [Id; 2], registry: RegistryHandle<T, 2>) -> Self {
        Self { pids, registry }
    }

    pub fn top_left_id(&self) -> Id {
        self.pids[0]
    }

    pub fn bottom_right_id(&self) -> Id {
        self.pids[1]
    }

    pub fn point_ids(&self) -> [Id; 2] {
        self.pids
    }

    pub fn top_left(&self) -> GeoResult<RefPoint<T, 2>> {
        self.registry.resolve(self.pids[0])
    }

    pub fn bottom_right(&self) -> GeoResult<RefPoint<T, 2>> {
        self.registry.resolve(self.pids[1])
    }

    pub fn ref_points(&self) -> GeoResult<[RefPoint<T, 2>; 2]> {
        Ok([self.top_left()?, self.bottom_right()?])
    }

    /// Extent along x, always non-negative
    pub fn width(&self) -> GeoResult<T> {
        let [tl, br] = self.ref_points()?;
        Ok((br.x() - tl.x()).abs())
    }

    /// Extent along y, always non-negative
    pub fn height(&self) -> GeoResult<T> {
        let [tl, br] = self.ref_points()?;
        Ok((br.y() - tl.y()).abs())
    }

    pub fn area(&self) -> GeoResult<T> {
        Ok(self.width()? * self.height()?)
    }

    pub fn perimeter(&self) -> GeoResult<T> {
        let two = T::one() + T::one();
        Ok(two * (self.width()? + self.height()?))
    }

    pub fn is_bound(&self) -> bool {
        self.registry.is_alive()
    }

    pub fn is_bound_to(&self, registry: &RefPointSet<T, 2>) -> bool {
        self.registry.points_to(registry)
    }
}

impl<T: Scalar> Geometry for RefRectangle<T> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefRectangle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::RefPointSet2;
    use crate::ports::GeoError;

    fn create_test_registry() -> RefPointSet2<f32> {
        [
            RefPoint::new(Id::new(0), [1.0, 5.0]),
            RefPoint::new(Id::new(1), [4.0, 1.0]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_ref_rectangle_extent() {
        let set = create_test_registry();
        let rect = set.create_ref_rectangle(Id::new(0), Id::new(1));

        assert_eq!(rect.width().unwrap(), 3.0);
        assert_eq!(rect.height().unwrap(), 4.0);
        assert_eq!(rect.area().unwrap(), 12.0);
        assert_eq!(rect.perimeter().unwrap(), 14.0);
        assert_eq!(rect.geo_type(), GeoType::RefRectangle);
    }

    #[test]
    fn test_ref_rectangle_swapped_corners() {
        let set = create_test_registry();
        let rect = set.create_ref_rectangle(Id::new(1), Id::new(0));

        assert_eq!(rect.top_left_id(), Id::new(1));
        assert_eq!(rect.width().unwrap(), 3.0);
        assert_eq!(rect.height().unwrap(), 4.0);
    }

    #[test]
    fn test_ref_rectangle_follows_corner_edit() {
        let mut set = create_test_registry();
        let rect = set.create_ref_rectangle(Id::new(0), Id::new(1));

        set.erase(Id::new(1));
        assert!(matches!(rect.width(), Err(GeoError::KeyNotFound(_))));

        set.insert(RefPoint::new(Id::new(1), [2.0, 3.0]));
        assert_eq!(rect.area().unwrap(), 2.0);
        assert_eq!(rect.bottom_right().unwrap().point().coords(), &[2.0, 3.0]);
    }
}
