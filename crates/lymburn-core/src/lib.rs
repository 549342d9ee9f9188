//! # Lymburn Core Library
//!
//! Pairwise Lymburn repulsion between particle types for particle simulations:
//! a logarithmic force law with optional smoothing at the cutoff, evaluated over
//! candidate pairs supplied by a host or enumerated here for small systems.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ParticleSystem`, `SimulationBox`,
//!   `TypeRegistry`), the pure per-pair evaluator with its cutoff modes and parameter tables,
//!   and file I/O.
//!
//! - **[`engine`]: The Logic Core.** Pair enumeration, force accumulation with Newton's third
//!   law, serial and parallel evaluation passes, and the potential configuration builder.
//!
//! - **[`workflows`]: The Public API.** Complete evaluations of a system in one call.

pub mod core;
pub mod engine;
pub mod workflows;
