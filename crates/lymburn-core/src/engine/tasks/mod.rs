//! Computational passes over a set of candidate pairs.
//!
//! A pass takes a configured evaluator, the per-particle type ids and a pair
//! list, and fills a [`ForceAccumulator`](crate::engine::accumulator::ForceAccumulator).

pub mod force_pass;
