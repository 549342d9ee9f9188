//! # I/O Module
//!
//! Reading particle systems for standalone evaluation. Potential parameter
//! files are read by [`crate::core::forcefield::params::PotentialFile`].

pub mod system_file;
