//! # Engine Module
//!
//! Drives the pairwise evaluator over whole particle systems.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Potential settings keyed by type name and their builder
//! - **Pair Enumeration** ([`pairs`]) - Candidate pair samples and a brute-force reference enumerator
//! - **Accumulation** ([`accumulator`]) - Per-particle forces, energies and the global virial
//! - **Tasks** ([`tasks`]) - Serial and parallel evaluation passes
//! - **Error Handling** ([`error`]) - Engine-level error types
//!
//! Passes never own the system. Hosts that keep their own neighbor list build
//! [`pairs::PairSample`] values directly and hand them to
//! [`tasks::force_pass::run`].

pub mod accumulator;
pub mod config;
pub mod error;
pub mod pairs;
pub mod tasks;
