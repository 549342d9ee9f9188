use nalgebra::{Matrix3, Vector3};

/// Force on the first particle of a pair and the full pair energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairContribution {
    pub force_on_a: Vector3<f64>,
    pub energy: f64,
}

impl PairContribution {
    pub fn new(force_on_a: Vector3<f64>, energy: f64) -> Self {
        Self { force_on_a, energy }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.energy == 0.0 && self.force_on_a == Vector3::zeros()
    }

    /// Pair virial `r_vec ⊗ force_on_a`.
    #[inline]
    pub fn virial(&self, r_vec: &Vector3<f64>) -> Matrix3<f64> {
        r_vec * self.force_on_a.transpose()
    }
}
