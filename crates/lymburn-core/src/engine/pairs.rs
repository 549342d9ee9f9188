use crate::core::models::system::ParticleSystem;
use itertools::Itertools;
use nalgebra::Vector3;

/// One candidate pair handed to the evaluator.
///
/// `r_vec` is `pos_i - pos_j` after the minimum-image wrap and `r` is its
/// norm. Samples are produced once per pass and consumed by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSample {
    pub i: usize,
    pub j: usize,
    pub r_vec: Vector3<f64>,
    pub r: f64,
}

impl PairSample {
    pub fn new(i: usize, j: usize, r_vec: Vector3<f64>) -> Self {
        Self {
            i,
            j,
            r: r_vec.norm(),
            r_vec,
        }
    }

    /// Builds the sample for particles `i` and `j` of `system`, wrapping the displacement.
    pub fn between(system: &ParticleSystem, i: usize, j: usize) -> Option<Self> {
        let pos_i = system.position(i)?;
        let pos_j = system.position(j)?;
        Some(Self::new(i, j, system.sim_box().minimum_image(pos_i, pos_j)))
    }
}

/// Brute-force enumeration of every pair `i < j` within `max_cutoff`.
///
/// Costs O(N^2). Hosts normally supply pairs from their own neighbor list;
/// this serves small systems and reference checks.
pub fn all_pairs(system: &ParticleSystem, max_cutoff: f64) -> Vec<PairSample> {
    (0..system.len())
        .tuple_combinations()
        .filter_map(|(i, j)| PairSample::between(system, i, j))
        .filter(|sample| sample.r <= max_cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::simulation_box::SimulationBox;
    use nalgebra::Point3;

    fn line_system(box_length: f64, xs: &[f64]) -> ParticleSystem {
        let mut system = ParticleSystem::new(SimulationBox::cubic(box_length).unwrap());
        for &x in xs {
            system.add_particle("A", Point3::new(x, 0.0, 0.0));
        }
        system
    }

    #[test]
    fn new_computes_distance() {
        let sample = PairSample::new(0, 1, Vector3::new(3.0, 4.0, 0.0));
        assert!((sample.r - 5.0).abs() < 1e-12);
    }

    #[test]
    fn between_uses_minimum_image() {
        let system = line_system(10.0, &[4.5, -4.5]);
        let sample = PairSample::between(&system, 0, 1).unwrap();
        assert!((sample.r_vec.x + 1.0).abs() < 1e-12);
        assert!((sample.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn between_returns_none_for_missing_particle() {
        let system = line_system(10.0, &[0.0]);
        assert!(PairSample::between(&system, 0, 1).is_none());
    }

    #[test]
    fn all_pairs_lists_each_pair_once_with_i_less_than_j() {
        let system = line_system(100.0, &[0.0, 1.0, 2.0, 3.0]);
        let pairs = all_pairs(&system, 10.0);
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.i < p.j));
    }

    #[test]
    fn all_pairs_filters_by_cutoff_inclusively() {
        let system = line_system(100.0, &[0.0, 1.0, 2.5]);
        let pairs = all_pairs(&system, 1.5);
        let indices: Vec<(usize, usize)> = pairs.iter().map(|p| (p.i, p.j)).collect();
        assert_eq!(indices, vec![(0, 1), (1, 2)]);

        let exact = all_pairs(&line_system(100.0, &[0.0, 1.0]), 1.0);
        assert_eq!(exact.len(), 1);
    }
}
