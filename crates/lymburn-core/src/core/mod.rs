//! # Core Module
//!
//! Stateless building blocks of the Lymburn repulsion: the particle data the
//! potential reads, the potential kernel and the readers for its input files.
//!
//! - **Particle Representation** ([`models`]) - Type labels, periodic box, particle system
//! - **Potential** ([`forcefield`]) - Kernel, cutoff smoothing, pair parameters, evaluator
//! - **File I/O** ([`io`]) - Reading particle systems from TOML files

pub mod forcefield;
pub mod io;
pub mod models;
