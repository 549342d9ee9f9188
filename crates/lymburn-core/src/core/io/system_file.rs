use crate::core::models::simulation_box::{BoxError, SimulationBox};
use crate::core::models::system::ParticleSystem;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid simulation box: {0}")]
    Box(#[from] BoxError),

    #[error("Particle {index} has a non-finite position {position:?}")]
    NonFinitePosition { index: usize, position: [f64; 3] },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ParticleRecord {
    #[serde(rename = "type")]
    type_name: String,
    position: [f64; 3],
}

/// A particle system stored as TOML.
///
/// ```toml
/// box = [10.0, 10.0, 10.0]
///
/// [[particle]]
/// type = "A"
/// position = [-0.25, 0.0, 0.0]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SystemFile {
    #[serde(rename = "box")]
    box_lengths: [f64; 3],
    #[serde(default, rename = "particle")]
    particles: Vec<ParticleRecord>,
}

impl SystemFile {
    pub fn read_from(reader: &mut impl Read) -> Result<ParticleSystem, SystemFileError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let file: SystemFile = toml::from_str(&content)?;
        file.into_system()
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ParticleSystem, SystemFileError> {
        let mut file = std::fs::File::open(path)?;
        Self::read_from(&mut file)
    }

    fn into_system(self) -> Result<ParticleSystem, SystemFileError> {
        let sim_box = SimulationBox::new(Vector3::from(self.box_lengths))?;
        let mut system = ParticleSystem::new(sim_box);
        for (index, record) in self.particles.into_iter().enumerate() {
            if record.position.iter().any(|c| !c.is_finite()) {
                return Err(SystemFileError::NonFinitePosition {
                    index,
                    position: record.position,
                });
            }
            system.add_particle(&record.type_name, Point3::from(record.position));
        }
        Ok(system)
    }
}
