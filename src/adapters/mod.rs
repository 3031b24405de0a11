//! # Adapters
//!
//! Concrete implementations of the port traits:
//! - Storage: `PointSet`, `RefPointSet`
//! - Codec: binary and text file encodings
//!
//! Containers implement `RecordContainer`; points implement `Record`.

pub mod codec;
pub mod storage;
