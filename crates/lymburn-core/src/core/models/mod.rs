//! # Models Module
//!
//! Plain data structures describing what the pair evaluator operates on:
//! particle type labels, the periodic simulation box and the particle system.
//!
//! - [`ids`] - Dense type indices and canonical unordered type pairs
//! - [`types`] - Interning of type names into ids
//! - [`simulation_box`] - Orthorhombic box with the minimum-image wrap
//! - [`system`] - Positions and types of all particles in a box

pub mod ids;
pub mod simulation_box;
pub mod system;
pub mod types;
