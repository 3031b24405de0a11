//! # Storage Adapters
//!
//! In-memory containers that persist through the codec.
//!
//! Available containers:
//! - `PointSet` - ordered points without ids
//! - `RefPointSet` - id-keyed registry that shapes resolve against

mod point_set;
mod registry;

pub use point_set::{PointSet, PointSet2, PointSet3};
pub use registry::{RefPointSet, RefPointSet2, RefPointSet3};

pub(crate) use registry::RegistryHandle;
