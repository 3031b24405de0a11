//! # Reference Shapes
//!
//! Shapes that hold point ids instead of coordinates. Each one keeps a weak
//! link to the `RefPointSet` that created it and resolves its vertices on
//! every call, so edits to the registry are visible immediately.
//!
//! - `RefLine` - two ids, 2D or 3D
//! - `RefTriangle` - three ids, 2D or 3D
//! - `RefLineString` - open polyline, 2D or 3D
//! - `RefRectangle` - two opposite corners, 2D only
//! - `RefPolygon` - closed ring, 2D only
//!
//! Resolution fails with `KeyNotFound` for an erased id and with
//! `RegistryDropped` once the registry is gone.

mod ref_line;
mod ref_line_string;
mod ref_polygon;
mod ref_rectangle;
mod ref_triangle;

pub use ref_line::{RefLine, RefLine2, RefLine3};
pub use ref_line_string::{RefLineString, RefLineString2, RefLineString3};
pub use ref_polygon::RefPolygon;
pub use ref_rectangle::RefRectangle;
pub use ref_triangle::{RefTriangle, RefTriangle2, RefTriangle3};

use crate::core::geometry::distance;
use crate::core::{RefPoint, Scalar};

/// Summed segment lengths along `points`, plus the closing edge if `closed`
fn path_length<T: Scalar, const N: usize>(points: &[RefPoint<T, N>], closed: bool) -> T {
    let open = points
        .windows(2)
        .fold(T::zero(), |acc, w| acc + distance(&w[0], &w[1]));
    match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 1 => open + distance(last, first),
        _ => open,
    }
}
