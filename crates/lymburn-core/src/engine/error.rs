use crate::core::forcefield::evaluator::EvaluationError;
use crate::core::forcefield::params::{ConfigError, ParamLoadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parameter loading failed: {0}")]
    ParamLoad(#[from] ParamLoadError),

    #[error("Evaluation of pair ({i}, {j}) failed: {source}")]
    Evaluation {
        i: usize,
        j: usize,
        #[source]
        source: EvaluationError,
    },

    #[error("Pair ({i}, {j}) references a particle outside 0..{num_particles}")]
    ParticleIndex {
        i: usize,
        j: usize,
        num_particles: usize,
    },

    #[error("Pair ({i}, {i}) couples a particle with itself")]
    SelfPair { i: usize },

    #[error("Accumulator holds {actual} particles but the pass covers {expected}")]
    SystemMismatch { expected: usize, actual: usize },
}
