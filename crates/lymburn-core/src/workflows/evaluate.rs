use crate::core::models::system::ParticleSystem;
use crate::engine::config::PotentialConfig;
use crate::engine::error::EngineError;
use crate::engine::pairs;
use crate::engine::tasks::force_pass::{self, Execution};
use nalgebra::{Matrix3, Vector3};
use tracing::{debug, info, instrument};

/// Forces, energies and virial of one full evaluation of a system.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub forces: Vec<Vector3<f64>>,
    /// Per-particle energy, each pair split evenly between its two particles.
    pub energies: Vec<f64>,
    pub virial: Matrix3<f64>,
    /// Number of pairs within the largest cutoff.
    pub num_pairs: usize,
}

impl EvaluationReport {
    pub fn total_energy(&self) -> f64 {
        self.energies.iter().sum()
    }

    pub fn net_force(&self) -> Vector3<f64> {
        self.forces.iter().sum()
    }
}

#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    system: &ParticleSystem,
    config: &PotentialConfig,
    execution: Execution,
) -> Result<EvaluationReport, EngineError> {
    info!(
        "Evaluating {} particle(s) of {} type(s) ({} cutoff, {} form).",
        system.len(),
        system.registry().len(),
        config.cutoff.mode,
        config.form
    );

    let evaluator = config.build_evaluator(system.registry())?;
    let pairs = pairs::all_pairs(system, evaluator.max_r_cut());
    debug!(
        "{} pair(s) within r = {}.",
        pairs.len(),
        evaluator.max_r_cut()
    );

    let accumulator = force_pass::run(&evaluator, system.types(), &pairs, execution)?;
    let (forces, energies, virial) = accumulator.into_parts();
    let report = EvaluationReport {
        forces,
        energies,
        virial,
        num_pairs: pairs.len(),
    };

    info!(
        "Evaluation finished. Total energy: {:.6e}, |net force|: {:.3e}",
        report.total_energy(),
        report.net_force().norm()
    );
    Ok(report)
}
