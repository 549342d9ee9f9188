//! # Workflows Module
//!
//! One-call entry points that tie the [`engine`](crate::engine) and
//! [`core`](crate::core) layers together.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Builds the evaluator for a system, enumerates
//!   pairs within the largest cutoff and returns per-particle forces, energies and the virial.

pub mod evaluate;
