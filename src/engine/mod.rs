//! # Engine
//!
//! Orchestration that sits on top of the containers.
//!
//! This is where:
//! - `GeneratorConfig` is applied
//! - A `UniformSampler` is wired to the storage containers
//! - Random populations are built for tests and benchmarks

mod generator;

pub use generator::Generator;
