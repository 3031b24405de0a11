//! # Core Domain
//!
//! Pure values and arithmetic, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A fixed-arity coordinate tuple
//! - `RefPoint` - A point carrying an immutable `Id`
//! - `Line` - A segment owning both endpoints
//! - `geometry` - distance, azimuth, zenith, and the `GeoType` tag
//! - `config` - encoding, bounds, and generator settings
//!
//! Registries, codecs, and registry-backed shapes build on these.

mod id;
mod line;
mod point;
pub mod config;
pub mod geometry;

// Re-exports
pub use id::Id;
pub use line::{Line, Line2, Line3};
pub use point::{Point, Point2, Point3, RefPoint, RefPoint2, RefPoint3, Scalar};
