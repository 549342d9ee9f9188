use crate::cli::PotentialOverrides;
use crate::error::{CliError, Result};
use lymburn::core::forcefield::params::PotentialFile;
use lymburn::core::io::system_file::SystemFile;
use lymburn::core::models::system::ParticleSystem;
use lymburn::engine::config::{PotentialConfig, PotentialConfigBuilder};
use lymburn::engine::error::EngineError;
use std::path::Path;
use tracing::debug;

/// Loads a potential file and applies command-line overrides before validation.
pub fn load_potential(path: &Path, overrides: &PotentialOverrides) -> Result<PotentialConfig> {
    debug!("Loading potential from file: {:?}", path);
    let file = PotentialFile::load(path).map_err(EngineError::from)?;
    merge_with_cli(PotentialConfigBuilder::from(file), overrides)
}

pub fn merge_with_cli(
    mut builder: PotentialConfigBuilder,
    overrides: &PotentialOverrides,
) -> Result<PotentialConfig> {
    if let Some(mode) = overrides.mode {
        builder = builder.mode(mode);
    }
    if let Some(form) = overrides.form {
        builder = builder.form(form);
    }
    if let Some(r_cut) = overrides.r_cut {
        builder = builder.r_cut(r_cut);
    }
    if let Some(r_on) = overrides.r_on {
        builder = builder.r_on(r_on);
    }
    let config = builder.build()?;
    debug!("Final potential configuration: {:?}", config);
    Ok(config)
}

pub fn load_system(path: &Path) -> Result<ParticleSystem> {
    debug!("Loading system from file: {:?}", path);
    SystemFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
