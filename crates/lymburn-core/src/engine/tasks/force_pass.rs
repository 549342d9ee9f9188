use crate::core::forcefield::evaluator::PairEvaluator;
use crate::core::models::ids::TypeId;
use crate::engine::accumulator::ForceAccumulator;
use crate::engine::error::EngineError;
use crate::engine::pairs::PairSample;
use tracing::{instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the pairs of one pass are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Serial,
    /// Per-worker partial accumulators merged after the pass.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Execution {
    /// Parallel when the `parallel` feature is enabled, serial otherwise.
    pub fn preferred() -> Self {
        #[cfg(feature = "parallel")]
        {
            Execution::Parallel
        }
        #[cfg(not(feature = "parallel"))]
        {
            Execution::Serial
        }
    }
}

#[instrument(skip_all, name = "force_pass_task", fields(num_pairs = pairs.len()))]
pub fn run(
    evaluator: &PairEvaluator,
    types: &[TypeId],
    pairs: &[PairSample],
    execution: Execution,
) -> Result<ForceAccumulator, EngineError> {
    let mut accumulator = ForceAccumulator::new(types.len());
    run_into(evaluator, types, pairs, execution, &mut accumulator)?;
    Ok(accumulator)
}

/// Runs a pass into an existing accumulator, zeroing it first.
///
/// The accumulator must already be sized for `types.len()` particles. On
/// error its contents are unspecified and it must be reset before reuse.
pub fn run_into(
    evaluator: &PairEvaluator,
    types: &[TypeId],
    pairs: &[PairSample],
    execution: Execution,
    accumulator: &mut ForceAccumulator,
) -> Result<(), EngineError> {
    let num_particles = types.len();
    if accumulator.len() != num_particles {
        return Err(EngineError::SystemMismatch {
            expected: num_particles,
            actual: accumulator.len(),
        });
    }
    accumulator.reset();

    match execution {
        Execution::Serial => {
            for pair in pairs {
                accumulate_pair(evaluator, types, pair, accumulator)?;
            }
        }
        #[cfg(feature = "parallel")]
        Execution::Parallel => {
            let total = pairs
                .par_iter()
                .try_fold(
                    || ForceAccumulator::new(num_particles),
                    |mut partial, pair| {
                        accumulate_pair(evaluator, types, pair, &mut partial)?;
                        Ok::<_, EngineError>(partial)
                    },
                )
                .try_reduce(
                    || ForceAccumulator::new(num_particles),
                    |mut a, b| {
                        a.merge(&b);
                        Ok(a)
                    },
                )?;
            accumulator.merge(&total);
        }
    }

    trace!(
        "Pass finished: {} pair(s), total energy {:.6e}",
        pairs.len(),
        accumulator.total_energy()
    );
    Ok(())
}

#[inline]
fn accumulate_pair(
    evaluator: &PairEvaluator,
    types: &[TypeId],
    pair: &PairSample,
    accumulator: &mut ForceAccumulator,
) -> Result<(), EngineError> {
    let &PairSample { i, j, r_vec, r } = pair;
    if i == j {
        return Err(EngineError::SelfPair { i });
    }
    let (Some(&type_i), Some(&type_j)) = (types.get(i), types.get(j)) else {
        return Err(EngineError::ParticleIndex {
            i,
            j,
            num_particles: types.len(),
        });
    };
    let contribution = evaluator
        .evaluate_pair(type_i, type_j, &r_vec, r)
        .map_err(|source| EngineError::Evaluation { i, j, source })?;
    accumulator.accumulate(i, j, &r_vec, &contribution);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::cutoff::{CutoffConfig, CutoffMode};
    use crate::core::forcefield::evaluator::{EvaluationError, PotentialForm};
    use crate::core::forcefield::params::{PairParameterTable, PairParams};
    use crate::core::models::simulation_box::SimulationBox;
    use crate::core::models::system::ParticleSystem;
    use crate::core::models::types::TypeRegistry;
    use crate::engine::pairs;
    use nalgebra::{Point3, Vector3};

    fn lattice_system() -> ParticleSystem {
        let mut system = ParticleSystem::new(SimulationBox::cubic(6.0).unwrap());
        let mut k = 0;
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..3 {
                    let jitter = 0.05 * ((k * 37 % 11) as f64 - 5.0) / 5.0;
                    let name = if k % 3 == 0 { "B" } else { "A" };
                    system.add_particle(
                        name,
                        Point3::new(
                            x as f64 * 1.5 - 2.9 + jitter,
                            y as f64 * 1.5 - 2.9 - jitter,
                            z as f64 * 2.0 - 2.9 + 0.5 * jitter,
                        ),
                    );
                    k += 1;
                }
            }
        }
        system
    }

    fn evaluator_for(registry: &TypeRegistry, mode: CutoffMode) -> PairEvaluator {
        let (a, b) = (registry.get("A").unwrap(), registry.get("B").unwrap());
        let mut table = PairParameterTable::new();
        table.set(a, a, PairParams::new(2.0));
        table.set(b, b, PairParams::new(0.5));
        table.set(a, b, PairParams::new(1.0));
        PairEvaluator::configure(
            CutoffConfig::new(2.5, mode).with_r_on(1.5),
            PotentialForm::Logarithmic,
            &table,
            registry,
        )
        .unwrap()
    }

    #[test]
    fn many_body_net_force_vanishes() {
        let system = lattice_system();
        for mode in CutoffMode::ALL {
            let evaluator = evaluator_for(system.registry(), mode);
            let pairs = pairs::all_pairs(&system, evaluator.max_r_cut());
            assert!(!pairs.is_empty());
            let acc = run(&evaluator, system.types(), &pairs, Execution::Serial).unwrap();
            assert!(acc.net_force().norm() < 1e-9);
        }
    }

    #[test]
    fn total_energy_is_sum_of_pair_energies() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::Shift);
        let pairs = pairs::all_pairs(&system, evaluator.max_r_cut());
        let acc = run(&evaluator, system.types(), &pairs, Execution::Serial).unwrap();

        let expected: f64 = pairs
            .iter()
            .map(|p| {
                evaluator
                    .evaluate_pair(system.types()[p.i], system.types()[p.j], &p.r_vec, p.r)
                    .unwrap()
                    .energy
            })
            .sum();
        assert!((acc.total_energy() - expected).abs() < 1e-9);
    }

    #[test]
    fn run_into_reuses_and_rezeroes_accumulator() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let pairs = pairs::all_pairs(&system, evaluator.max_r_cut());
        let first = run(&evaluator, system.types(), &pairs, Execution::Serial).unwrap();

        let mut reused = first.clone();
        run_into(&evaluator, system.types(), &pairs, Execution::Serial, &mut reused).unwrap();
        assert_eq!(reused, first);
    }

    #[test]
    fn run_into_rejects_wrongly_sized_accumulator() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let mut acc = ForceAccumulator::new(1);
        let result = run_into(&evaluator, system.types(), &[], Execution::Serial, &mut acc);
        assert!(matches!(result, Err(EngineError::SystemMismatch { .. })));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let pair = PairSample::new(0, system.len(), Vector3::new(1.0, 0.0, 0.0));
        let result = run(&evaluator, system.types(), &[pair], Execution::Serial);
        assert!(matches!(result, Err(EngineError::ParticleIndex { .. })));
    }

    #[test]
    fn self_pair_is_reported() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let pair = PairSample::new(3, 3, Vector3::new(1.0, 0.0, 0.0));
        let result = run(&evaluator, system.types(), &[pair], Execution::Serial);
        assert!(matches!(result, Err(EngineError::SelfPair { i: 3 })));
    }

    #[test]
    fn degenerate_pair_aborts_the_pass() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let pair = PairSample::new(0, 1, Vector3::zeros());
        let result = run(&evaluator, system.types(), &[pair], Execution::Serial);
        assert!(matches!(
            result,
            Err(EngineError::Evaluation {
                i: 0,
                j: 1,
                source: EvaluationError::DegenerateGeometry { .. }
            })
        ));
    }

    #[test]
    fn empty_pair_list_gives_zero_accumulator() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let acc = run(&evaluator, system.types(), &[], Execution::preferred()).unwrap();
        assert_eq!(acc, ForceAccumulator::new(system.len()));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::Xplor);
        let pairs = pairs::all_pairs(&system, evaluator.max_r_cut());
        let serial = run(&evaluator, system.types(), &pairs, Execution::Serial).unwrap();
        let parallel = run(&evaluator, system.types(), &pairs, Execution::Parallel).unwrap();

        for (s, p) in serial.forces().iter().zip(parallel.forces()) {
            assert!((s - p).norm() < 1e-9);
        }
        for (s, p) in serial.energies().iter().zip(parallel.energies()) {
            assert!((s - p).abs() < 1e-9);
        }
        assert!((serial.virial() - parallel.virial()).norm() < 1e-9);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_pass_propagates_errors() {
        let system = lattice_system();
        let evaluator = evaluator_for(system.registry(), CutoffMode::None);
        let mut pairs = pairs::all_pairs(&system, evaluator.max_r_cut());
        pairs.push(PairSample::new(0, 1, Vector3::zeros()));
        let result = run(&evaluator, system.types(), &pairs, Execution::Parallel);
        assert!(matches!(result, Err(EngineError::Evaluation { .. })));
    }
}
