//! # Geometry
//!
//! Pure arithmetic between two points, plus the shape-kind tag.
//!
//! Angles follow two conventions:
//! - **Right-hand rule (RHR)**: azimuth measured from +X towards +Y
//!   (counter-clockwise), the usual mathematical convention.
//! - **Left-hand rule (LHR)**: the same measurement in a frame with X and Y
//!   swapped, i.e. from +Y towards +X (clockwise, the surveying convention).
//!
//! All angles are radians. Azimuths lie in `[0, 2π)`, zeniths in `[0, π]`.
//! Coincident points have azimuth and zenith 0.

use std::fmt;

use super::point::{Point, Scalar};

/// The kind of a geometry value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoType {
    // Value-owning geometry
    Point2D,
    Point3D,
    Line2D,
    Line3D,
    // Registry-backed geometry
    RefPoint2D,
    RefPoint3D,
    RefLine2D,
    RefLine3D,
    RefLineString2D,
    RefLineString3D,
    RefPolygon,
    RefRectangle,
    RefTriangle2D,
    RefTriangle3D,
}

impl GeoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoType::Point2D => "POINT2D",
            GeoType::Point3D => "POINT3D",
            GeoType::Line2D => "LINE2D",
            GeoType::Line3D => "LINE3D",
            GeoType::RefPoint2D => "REFPOINT2D",
            GeoType::RefPoint3D => "REFPOINT3D",
            GeoType::RefLine2D => "REFLINE2D",
            GeoType::RefLine3D => "REFLINE3D",
            GeoType::RefLineString2D => "REFLINESTRING2D",
            GeoType::RefLineString3D => "REFLINESTRING3D",
            GeoType::RefPolygon => "REFPOLYGON",
            GeoType::RefRectangle => "REFRECTANGLE",
            GeoType::RefTriangle2D => "REFTRIANGLE2D",
            GeoType::RefTriangle3D => "REFTRIANGLE3D",
        }
    }

    /// Whether this geometry resolves its points through a registry
    pub fn is_referential(&self) -> bool {
        !matches!(
            self,
            GeoType::Point2D | GeoType::Point3D | GeoType::Line2D | GeoType::Line3D
        )
    }
}

impl fmt::Display for GeoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every point, line, and shape in the crate
pub trait Geometry {
    fn geo_type(&self) -> GeoType;
}

// ============================================================================
// ARITHMETIC
// ============================================================================

/// Euclidean distance over all axes
pub fn distance<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>) -> T {
    a.coords()
        .iter()
        .zip(b.coords().iter())
        .map(|(&p, &q)| (q - p) * (q - p))
        .fold(T::zero(), |acc, sq| acc + sq)
        .sqrt()
}

/// Wrap an `atan2` result from `(-π, π]` into `[0, 2π)`
fn wrap_angle<T: Scalar>(angle: T) -> T {
    if angle < T::zero() {
        angle + T::TAU()
    } else {
        angle
    }
}

/// Planar delta `(dx, dy)` from `a` to `b` on the first two axes
fn planar_delta<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>) -> (T, T) {
    (b.coords()[0] - a.coords()[0], b.coords()[1] - a.coords()[1])
}

/// Azimuth of `a -> b` under the right-hand rule
///
/// # Example
/// ```
/// use refgeo::{azimuth_rhr, Point2};
/// let a = Point2::from_xy(0.0_f64, 0.0);
/// let b = Point2::from_xy(0.0, 1.0);
/// assert!((azimuth_rhr(&a, &b) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn azimuth_rhr<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>) -> T {
    let (dx, dy) = planar_delta(a, b);
    if dx == T::zero() && dy == T::zero() {
        return T::zero();
    }
    wrap_angle(dy.atan2(dx))
}

/// Azimuth of `a -> b` under the left-hand rule
pub fn azimuth_lhr<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>) -> T {
    let (dx, dy) = planar_delta(a, b);
    if dx == T::zero() && dy == T::zero() {
        return T::zero();
    }
    wrap_angle(dx.atan2(dy))
}

/// Zenith of `a -> b` under the right-hand rule: the angle from +Z
pub fn zenith_rhr<T: Scalar>(a: &Point<T, 3>, b: &Point<T, 3>) -> T {
    let len = distance(a, b);
    if len == T::zero() {
        return T::zero();
    }
    let cos = (b.z() - a.z()) / len;
    cos.max(-T::one()).min(T::one()).acos()
}

/// Zenith of `a -> b` under the left-hand rule
///
/// The rules differ only by an X/Y swap, which leaves the angle to +Z
/// unchanged.
pub fn zenith_lhr<T: Scalar>(a: &Point<T, 3>, b: &Point<T, 3>) -> T {
    zenith_rhr(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::{Point2, Point3};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_distance_2d() {
        let a = Point2::from_xy(1.0_f64, 2.0);
        let b = Point2::from_xy(3.0, 4.0);
        assert!(approx(distance(&a, &b), 8.0_f64.sqrt()));
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_3d() {
        let a = Point3::from_xyz(0.0_f32, 0.0, 0.0);
        let b = Point3::from_xyz(2.0, 3.0, 6.0);
        assert!((distance(&a, &b) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_rhr_quadrants() {
        let o = Point2::from_xy(0.0_f64, 0.0);
        assert!(approx(azimuth_rhr(&o, &Point2::from_xy(1.0, 0.0)), 0.0));
        assert!(approx(azimuth_rhr(&o, &Point2::from_xy(1.0, 1.0)), FRAC_PI_4));
        assert!(approx(azimuth_rhr(&o, &Point2::from_xy(-1.0, 0.0)), PI));
        assert!(approx(azimuth_rhr(&o, &Point2::from_xy(0.0, -1.0)), 3.0 * FRAC_PI_2));
    }

    #[test]
    fn test_azimuth_lhr_is_clockwise_from_y() {
        let o = Point2::from_xy(0.0_f64, 0.0);
        assert!(approx(azimuth_lhr(&o, &Point2::from_xy(0.0, 1.0)), 0.0));
        assert!(approx(azimuth_lhr(&o, &Point2::from_xy(1.0, 0.0)), FRAC_PI_2));
        assert!(approx(azimuth_lhr(&o, &Point2::from_xy(-1.0, 0.0)), 3.0 * FRAC_PI_2));
    }

    #[test]
    fn test_azimuth_rules_mirror_each_other() {
        let a = Point2::from_xy(0.5_f64, -1.0);
        let b = Point2::from_xy(2.0, 3.0);
        let rhr = azimuth_rhr(&a, &b);
        let lhr = azimuth_lhr(&a.transposed(), &b.transposed());
        assert!(approx(rhr, lhr));
    }

    #[test]
    fn test_azimuth_coincident() {
        let p = Point2::from_xy(1.0_f64, 1.0);
        assert_eq!(azimuth_rhr(&p, &p), 0.0);
        assert_eq!(azimuth_lhr(&p, &p), 0.0);
    }

    #[test]
    fn test_zenith() {
        let o = Point3::from_xyz(0.0_f64, 0.0, 0.0);
        assert!(approx(zenith_rhr(&o, &Point3::from_xyz(0.0, 0.0, 5.0)), 0.0));
        assert!(approx(zenith_rhr(&o, &Point3::from_xyz(1.0, 0.0, 0.0)), FRAC_PI_2));
        assert!(approx(zenith_rhr(&o, &Point3::from_xyz(0.0, 0.0, -2.0)), PI));
        assert!(approx(zenith_lhr(&o, &Point3::from_xyz(1.0, 1.0, 0.0)), FRAC_PI_2));
        assert_eq!(zenith_rhr(&o, &o), 0.0);
    }

    #[test]
    fn test_geo_type_display() {
        assert_eq!(GeoType::RefLine2D.to_string(), "REFLINE2D");
        assert!(GeoType::RefPolygon.is_referential());
        assert!(!GeoType::Line3D.is_referential());
    }
}
