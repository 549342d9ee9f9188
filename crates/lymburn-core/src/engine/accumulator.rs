use crate::core::forcefield::term::PairContribution;
use nalgebra::{Matrix3, Vector3};

/// Per-particle forces and energies, plus the virial, of one evaluation pass.
///
/// Every pair adds its force to the first particle and subtracts it from the
/// second, so the reaction is never recomputed. The pair energy is split
/// evenly between both particles.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceAccumulator {
    forces: Vec<Vector3<f64>>,
    energies: Vec<f64>,
    virial: Matrix3<f64>,
}

impl ForceAccumulator {
    pub fn new(num_particles: usize) -> Self {
        Self {
            forces: vec![Vector3::zeros(); num_particles],
            energies: vec![0.0; num_particles],
            virial: Matrix3::zeros(),
        }
    }

    /// Zeroes all buffers, keeping their allocation.
    pub fn reset(&mut self) {
        self.forces.fill(Vector3::zeros());
        self.energies.fill(0.0);
        self.virial = Matrix3::zeros();
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Adds the contribution of pair `(i, j)` with displacement `r_vec = pos_i - pos_j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range; passes check indices beforehand.
    #[inline]
    pub fn accumulate(
        &mut self,
        i: usize,
        j: usize,
        r_vec: &Vector3<f64>,
        contribution: &PairContribution,
    ) {
        if contribution.is_zero() {
            return;
        }
        let half_energy = 0.5 * contribution.energy;
        self.forces[i] += contribution.force_on_a;
        self.forces[j] -= contribution.force_on_a;
        self.energies[i] += half_energy;
        self.energies[j] += half_energy;
        self.virial += contribution.virial(r_vec);
    }

    /// Adds another partial accumulator of the same size into this one.
    pub fn merge(&mut self, other: &ForceAccumulator) {
        debug_assert_eq!(self.len(), other.len());
        for (f, g) in self.forces.iter_mut().zip(&other.forces) {
            *f += g;
        }
        for (e, o) in self.energies.iter_mut().zip(&other.energies) {
            *e += o;
        }
        self.virial += other.virial;
    }

    pub fn forces(&self) -> &[Vector3<f64>] {
        &self.forces
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn force(&self, index: usize) -> Option<&Vector3<f64>> {
        self.forces.get(index)
    }

    pub fn energy(&self, index: usize) -> Option<f64> {
        self.energies.get(index).copied()
    }

    /// Global virial tensor `sum(r_vec ⊗ f)` over all pairs.
    pub fn virial(&self) -> &Matrix3<f64> {
        &self.virial
    }

    pub fn total_energy(&self) -> f64 {
        self.energies.iter().sum()
    }

    /// Sum of all forces; zero up to rounding for any set of pairs.
    pub fn net_force(&self) -> Vector3<f64> {
        self.forces.iter().sum()
    }

    pub fn into_parts(self) -> (Vec<Vector3<f64>>, Vec<f64>, Matrix3<f64>) {
        (self.forces, self.energies, self.virial)
    }
}
