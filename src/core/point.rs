//! # Point
//!
//! Fixed-arity coordinate tuples and their registered (id-carrying) form.
//!
//! Arity is part of the type: `Point<T, 2>` and `Point<T, 3>` are distinct,
//! so mixing dimensionalities is a compile error rather than a runtime check.
//! Both structs are `repr(C)` because the binary codec writes their
//! in-memory layout verbatim.

use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Deref, DerefMut};

use num_traits::{Float, FloatConst};
use rand::distributions::uniform::SampleUniform;

use super::geometry::{GeoType, Geometry};
use super::id::Id;
use crate::ports::GeoError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Coordinate scalar: `f32` or `f64`
pub trait Scalar:
    Float + FloatConst + SampleUniform + fmt::Debug + fmt::Display + Default + 'static + sealed::Sealed
{
    /// Width in bytes
    const SIZE: usize;

    /// Write native-endian bytes into `out[..SIZE]`
    fn write_ne(self, out: &mut [u8]);

    /// Read native-endian bytes from `bytes[..SIZE]`
    fn read_ne(bytes: &[u8]) -> Self;

    /// Parse a decimal text field
    fn parse_field(s: &str) -> Result<Self, ParseFloatError>;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn write_ne(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
                }

                fn read_ne(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_ne_bytes(buf)
                }

                fn parse_field(s: &str) -> Result<Self, ParseFloatError> {
                    s.parse::<$ty>()
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);

// ============================================================================
// POINT
// ============================================================================

/// A point with `N` coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Point<T, const N: usize> {
    coords: [T; N],
}

/// 2-dimensional point
pub type Point2<T> = Point<T, 2>;

/// 3-dimensional point
pub type Point3<T> = Point<T, 3>;

impl<T: Scalar, const N: usize> Point<T, N> {
    /// Create a point from its coordinates
    ///
    /// # Example
    /// ```
    /// use refgeo::Point2;
    /// let p = Point2::new([1.0_f32, 2.0]);
    /// assert_eq!(p.x(), 1.0);
    /// ```
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// The point with every coordinate zero
    pub fn origin() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }

    /// Number of coordinates
    pub const fn dimensionality(&self) -> usize {
        N
    }

    /// Access the coordinates as a slice
    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    /// Mutable access to the coordinates
    pub fn coords_mut(&mut self) -> &mut [T; N] {
        &mut self.coords
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn from_xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self.coords[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self.coords[1]
    }

    /// Swap the X and Y coordinates in place
    pub fn transpose(&mut self) -> &mut Self {
        self.coords.swap(0, 1);
        self
    }

    /// A copy of this point with X and Y swapped
    pub fn transposed(&self) -> Self {
        Self::from_xy(self.y(), self.x())
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self.coords[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self.coords[1]
    }

    pub fn z_mut(&mut self) -> &mut T {
        &mut self.coords[2]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::new(coords)
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.coords
    }
}

/// Build a point from a raw buffer that must hold exactly `N` scalars
impl<T: Scalar, const N: usize> TryFrom<&[T]> for Point<T, N> {
    type Error = GeoError;

    fn try_from(raw: &[T]) -> Result<Self, Self::Error> {
        let coords: [T; N] = raw.try_into().map_err(|_| GeoError::Arity {
            expected: N,
            got: raw.len(),
        })?;
        Ok(Self::new(coords))
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> Geometry for Point<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::Point2D
    }
}

impl<T: Scalar> Geometry for Point<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::Point3D
    }
}

// ============================================================================
// REFERENCE POINT
// ============================================================================

/// A point carrying an immutable identifier
///
/// Coordinates are reachable (and mutable) through `Deref` to [`Point`];
/// the id has no setter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct RefPoint<T, const N: usize> {
    id: Id,
    point: Point<T, N>,
}

/// 2-dimensional reference point
pub type RefPoint2<T> = RefPoint<T, 2>;

/// 3-dimensional reference point
pub type RefPoint3<T> = RefPoint<T, 3>;

impl<T: Scalar, const N: usize> RefPoint<T, N> {
    /// Create a reference point from an id and coordinates
    pub fn new(id: Id, coords: [T; N]) -> Self {
        Self {
            id,
            point: Point::new(coords),
        }
    }

    /// Attach an id to an existing point
    pub fn from_point(id: Id, point: Point<T, N>) -> Self {
        Self { id, point }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// The underlying point value
    pub fn point(&self) -> &Point<T, N> {
        &self.point
    }

    /// Drop the id, keeping the point value
    pub fn into_point(self) -> Point<T, N> {
        self.point
    }
}

impl<T, const N: usize> Deref for RefPoint<T, N> {
    type Target = Point<T, N>;

    fn deref(&self) -> &Self::Target {
        &self.point
    }
}

impl<T, const N: usize> DerefMut for RefPoint<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.point
    }
}

impl<T: Scalar, const N: usize> From<RefPoint<T, N>> for Point<T, N> {
    fn from(refp: RefPoint<T, N>) -> Self {
        refp.point
    }
}

impl<T: Scalar, const N: usize> fmt::Display for RefPoint<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {}}}", self.id, self.point)
    }
}

impl<T: Scalar> Geometry for RefPoint<T, 2> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefPoint2D
    }
}

impl<T: Scalar> Geometry for RefPoint<T, 3> {
    fn geo_type(&self) -> GeoType {
        GeoType::RefPoint3D
    }
}
