//! # Point Registry
//!
//! Id-keyed owning store of reference points.
//!
//! The map lives behind `Rc<RefCell<_>>` so that shapes built by the
//! registry can hold a `Weak` link back to it:
//! - mutations of the registry are visible to every shape on its next call
//! - dropping the registry turns every shape's resolution into
//!   `GeoError::RegistryDropped` instead of a dangling read
//! - `Rc` keeps the whole family `!Send`, so cross-thread use does not compile
//!
//! There is no `get_mut`/`IndexMut`: handing out a mutable
//! entry would let a caller break `registry[id].id() == id`.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::rc::{Rc, Weak};

use crate::adapters::codec;
use crate::core::config::{Bounds, Encoding};
use crate::core::{Id, RefPoint, Scalar};
use crate::engine::Generator;
use crate::ports::{GeoError, GeoResult, RecordContainer, RngSampler};
use crate::shapes::{RefLine, RefLineString, RefPolygon, RefRectangle, RefTriangle};

type PointMap<T, const N: usize> = HashMap<Id, RefPoint<T, N>>;

/// Registry of reference points, keyed by their own id
pub struct RefPointSet<T, const N: usize> {
    points: Rc<RefCell<PointMap<T, N>>>,
}

/// 2-dimensional registry
pub type RefPointSet2<T> = RefPointSet<T, 2>;

/// 3-dimensional registry
pub type RefPointSet3<T> = RefPointSet<T, 3>;

impl<T: Scalar, const N: usize> RefPointSet<T, N> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            points: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Register a point under its own id
    ///
    /// Returns `false` and leaves the stored point untouched if the id is
    /// already taken.
    pub fn insert(&mut self, point: RefPoint<T, N>) -> bool {
        match self.points.borrow_mut().entry(point.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(point);
                true
            }
        }
    }

    /// Register a point, failing with `DuplicateKey` if the id is taken
    pub fn try_insert(&mut self, point: RefPoint<T, N>) -> GeoResult<()> {
        if self.insert(point) {
            Ok(())
        } else {
            Err(GeoError::DuplicateKey(point.id()))
        }
    }

    /// The point registered under `id`
    pub fn at(&self, id: Id) -> GeoResult<RefPoint<T, N>> {
        self.get(id).ok_or(GeoError::KeyNotFound(id))
    }

    /// The point registered under `id`, if any
    pub fn get(&self, id: Id) -> Option<RefPoint<T, N>> {
        self.points.borrow().get(&id).copied()
    }

    /// Remove and return the point registered under `id`
    pub fn erase(&mut self, id: Id) -> Option<RefPoint<T, N>> {
        self.points.borrow_mut().remove(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.points.borrow().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.points.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every point
    ///
    /// Shapes stay bound but every id they hold stops resolving.
    pub fn clear(&mut self) {
        self.points.borrow_mut().clear();
    }

    /// Registered ids, in no particular order
    pub fn ids(&self) -> Vec<Id> {
        self.points.borrow().keys().copied().collect()
    }

    /// Snapshot of every registered point, in no particular order
    pub fn points(&self) -> Vec<RefPoint<T, N>> {
        self.points.borrow().values().copied().collect()
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Write every point to `path`
    pub fn write(&self, path: impl AsRef<Path>, encoding: Encoding) -> GeoResult<()> {
        codec::write(self, path, encoding)
    }

    /// Replace the registry contents with the points stored at `path`
    ///
    /// Duplicate ids in the file keep their first occurrence.
    pub fn read(&mut self, path: impl AsRef<Path>, encoding: Encoding) -> GeoResult<()> {
        codec::read(self, path, encoding)
    }

    // ========================================================================
    // GENERATION
    // ========================================================================

    /// Generate `count` points inside `bounds` with ids `0..count`
    ///
    /// Uses the thread-local RNG and retries without limit: an `accept`
    /// that no point inside `bounds` satisfies never returns. Use
    /// [`Generator`] with a capped config to bound the work.
    pub fn random_generate(
        count: usize,
        bounds: &Bounds<T, N>,
        accept: Option<&dyn Fn(&RefPoint<T, N>) -> bool>,
    ) -> GeoResult<Self> {
        Generator::new(RngSampler::new(rand::thread_rng())).generate_ref_points(count, bounds, accept)
    }

    // ========================================================================
    // SHAPE FACTORIES
    // ========================================================================

    fn handle(&self) -> RegistryHandle<T, N> {
        RegistryHandle {
            points: Rc::downgrade(&self.points),
        }
    }

    /// A line between two registered points
    ///
    /// The ids are not checked here; they resolve on first use.
    pub fn create_ref_line(&self, pid1: Id, pid2: Id) -> RefLine<T, N> {
        RefLine::new([pid1, pid2], self.handle())
    }

    /// A triangle over three registered points
    pub fn create_ref_triangle(&self, pid1: Id, pid2: Id, pid3: Id) -> RefTriangle<T, N> {
        RefTriangle::new([pid1, pid2, pid3], self.handle())
    }

    /// An open polyline through registered points
    pub fn create_ref_line_string(&self, pids: impl IntoIterator<Item = Id>) -> RefLineString<T, N> {
        RefLineString::new(pids.into_iter().collect(), self.handle())
    }
}

impl<T: Scalar> RefPointSet<T, 2> {
    /// An axis-aligned rectangle given by two opposite corners
    pub fn create_ref_rectangle(&self, top_left: Id, bottom_right: Id) -> RefRectangle<T> {
        RefRectangle::new([top_left, bottom_right], self.handle())
    }

    /// A closed polygon through registered points
    pub fn create_ref_polygon(&self, pids: impl IntoIterator<Item = Id>) -> RefPolygon<T> {
        RefPolygon::new(pids.into_iter().collect(), self.handle())
    }
}

impl<T: Scalar, const N: usize> Default for RefPointSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies the points into a new, independent registry.
/// Shapes built from the original stay bound to the original.
impl<T: Scalar, const N: usize> Clone for RefPointSet<T, N> {
    fn clone(&self) -> Self {
        Self {
            points: Rc::new(RefCell::new(self.points.borrow().clone())),
        }
    }
}

/// Equal when both hold the same `(id, coordinates)` pairs
impl<T: Scalar, const N: usize> PartialEq for RefPointSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.points, &other.points) || *self.points.borrow() == *other.points.borrow()
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for RefPointSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.points.borrow().iter())
            .finish()
    }
}

impl<T: Scalar, const N: usize> FromIterator<RefPoint<T, N>> for RefPointSet<T, N> {
    fn from_iter<I: IntoIterator<Item = RefPoint<T, N>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Scalar, const N: usize> Extend<RefPoint<T, N>> for RefPointSet<T, N> {
    fn extend<I: IntoIterator<Item = RefPoint<T, N>>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<T: Scalar, const N: usize> RecordContainer for RefPointSet<T, N> {
    type Record = RefPoint<T, N>;

    fn records(&self) -> Vec<Self::Record> {
        self.points()
    }

    fn clear_records(&mut self) {
        self.clear();
    }

    fn extend_records(&mut self, records: Vec<Self::Record>) {
        self.extend(records);
    }
}

// ============================================================================
// REGISTRY HANDLE
// ============================================================================

/// Non-owning link from a shape back to the registry that built it
pub(crate) struct RegistryHandle<T, const N: usize> {
    points: Weak<RefCell<PointMap<T, N>>>,
}

impl<T: Scalar, const N: usize> RegistryHandle<T, N> {
    /// Look up `id` in the live registry
    pub(crate) fn resolve(&self, id: Id) -> GeoResult<RefPoint<T, N>> {
        let points = self.points.upgrade().ok_or(GeoError::RegistryDropped)?;
        let found = points.borrow().get(&id).copied();
        found.ok_or(GeoError::KeyNotFound(id))
    }

    /// Look up every id, failing on the first one missing
    pub(crate) fn resolve_all(&self, ids: &[Id]) -> GeoResult<Vec<RefPoint<T, N>>> {
        let points = self.points.upgrade().ok_or(GeoError::RegistryDropped)?;
        let points = points.borrow();
        ids.iter()
            .map(|id| points.get(id).copied().ok_or(GeoError::KeyNotFound(*id)))
            .collect()
    }

    /// Whether the registry still exists
    pub(crate) fn is_alive(&self) -> bool {
        self.points.strong_count() > 0
    }

    /// Whether this handle points at `set`
    pub(crate) fn points_to(&self, set: &RefPointSet<T, N>) -> bool {
        std::ptr::eq(self.points.as_ptr(), Rc::as_ptr(&set.points))
    }
}

impl<T, const N: usize> Clone for RegistryHandle<T, N> {
    fn clone(&self) -> Self {
        Self {
            points: Weak::clone(&self.points),
        }
    }
}

impl<T, const N: usize> fmt::Debug for RegistryHandle<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("alive", &(self.points.strong_count() > 0))
            .finish()
    }
}
