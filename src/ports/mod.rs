//! # Ports
//!
//! Trait definitions and the error contract. No implementations.
//!
//! - `Record` / `RecordContainer` - what the codec needs from containers
//! - `UniformSampler` - what the generator needs from a random source
//! - `GeoError` - every failure the crate reports
//!
//! Adapters implement these traits; the core does not know about them.

mod error;
mod record;
mod sampler;

pub use error::{GeoError, GeoResult};
pub use record::{Record, RecordContainer};
pub use sampler::{RngSampler, UniformSampler};
