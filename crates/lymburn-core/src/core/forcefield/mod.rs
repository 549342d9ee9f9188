//! # Force Field Module
//!
//! The Lymburn repulsion itself: kernel functions, cutoff handling, the
//! per-type-pair parameter table and the pair evaluator built from them.
//!
//! ## Overview
//!
//! The repulsion acts between every pair of particles closer than the cutoff
//! radius. Two functional forms are supported:
//!
//! - **Logarithmic** - `U(r) = -strength ln(r)`, force `strength r_vec / r^2`
//! - **Inverse-r** - `U(r) = strength / r`, force `strength r_vec / r^3`
//!
//! and three ways of treating the cutoff:
//!
//! - **none** - plain truncation at `r_cut`
//! - **shift** - energy offset so that `U(r_cut) = 0`
//! - **xplor** - quintic switch between `r_on` and `r_cut` applied to energy and force
//!
//! ## Key Components
//!
//! - [`cutoff`] - Cutoff radii, smoothing mode and their validation
//! - [`params`] - Pair parameter table and the TOML parameter file
//! - [`evaluator`] - [`evaluator::PairEvaluator`], the per-pair force and energy kernel
//! - [`term`] - Force/energy contribution of one pair
//!
//! ## Usage
//!
//! ```ignore
//! use lymburn::core::forcefield::evaluator::PairEvaluator;
//!
//! let evaluator = PairEvaluator::configure(cutoff, form, &table, &registry)?;
//! let contribution = evaluator.evaluate_pair(type_a, type_b, &r_vec, r_vec.norm())?;
//! ```

pub mod cutoff;
pub mod evaluator;
pub mod params;
pub(crate) mod potentials;
pub mod term;
