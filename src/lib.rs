//! # refgeo - Referential Geometry
//!
//! Points that live once in a registry, and shapes that refer to them by id.
//!
//! A `RefPointSet` owns id-keyed points. Lines, triangles, rectangles,
//! polygons and line strings created from it store only ids and resolve
//! coordinates on every call, so moving a point moves every shape that uses
//! it. Containers persist to disk in a native binary layout or in
//! comma-separated text, and can be filled with random populations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         refgeo                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure values, no I/O)                                 │
//! │    Point, RefPoint, Line, Id, geometry, config              │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Record, RecordContainer, UniformSampler, GeoError        │
//! │                                                              │
//! │  ADAPTERS (implementations)                                 │
//! │    Storage: PointSet, RefPointSet                           │
//! │    Codec: binary, text                                      │
//! │                                                              │
//! │  SHAPES (registry-backed views)                             │
//! │    RefLine, RefTriangle, RefRectangle, RefPolygon, ...      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Generator - random populations                           │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use refgeo::{distance, Id, Point2, RefPoint, RefPointSet2};
//!
//! let mut set = RefPointSet2::<f64>::new();
//! set.insert(RefPoint::new(Id::new(0), [1.0, 2.0]));
//! set.insert(RefPoint::new(Id::new(1), [3.0, 4.0]));
//!
//! let line = set.create_ref_line(Id::new(0), Id::new(1));
//! let expected = distance(&Point2::from_xy(1.0, 2.0), &Point2::from_xy(3.0, 4.0));
//! assert_eq!(line.length().unwrap(), expected);
//!
//! // Moving a point is visible through the line
//! set.erase(Id::new(1));
//! set.insert(RefPoint::new(Id::new(1), [1.0, 5.0]));
//! assert_eq!(line.length().unwrap(), 3.0);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure values, no I/O
/// Contains: Point, RefPoint, Line, Id, geometry functions, config
pub mod core;

/// Port definitions - trait contracts and errors
/// Contains: Record, RecordContainer, UniformSampler, GeoError
pub mod ports;

/// Adapter implementations
/// Contains: storage containers and file codecs
pub mod adapters;

/// Registry-backed shapes
/// Contains: RefLine, RefTriangle, RefRectangle, RefPolygon, RefLineString
pub mod shapes;

/// Engine - orchestration layer
/// Contains: Generator
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::config::{Bounds, Encoding, GeneratorConfig};
pub use crate::core::geometry::{
    azimuth_lhr, azimuth_rhr, distance, zenith_lhr, zenith_rhr, GeoType, Geometry,
};
pub use crate::core::{
    Id, Line, Line2, Line3, Point, Point2, Point3, RefPoint, RefPoint2, RefPoint3, Scalar,
};

// Ports
pub use crate::ports::{GeoError, GeoResult, Record, RecordContainer, RngSampler, UniformSampler};

// Containers
pub use crate::adapters::storage::{
    PointSet, PointSet2, PointSet3, RefPointSet, RefPointSet2, RefPointSet3,
};

// Shapes
pub use crate::shapes::{
    RefLine, RefLine2, RefLine3, RefLineString, RefLineString2, RefLineString3, RefPolygon,
    RefRectangle, RefTriangle, RefTriangle2, RefTriangle3,
};

// Engine
pub use crate::engine::Generator;
