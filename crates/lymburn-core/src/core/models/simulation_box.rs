use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BoxError {
    #[error("Box length along axis {axis} must be positive and finite, got {length}")]
    InvalidLength { axis: usize, length: f64 },
}

/// An orthorhombic periodic simulation box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    lengths: Vector3<f64>,
}

impl SimulationBox {
    pub fn new(lengths: Vector3<f64>) -> Result<Self, BoxError> {
        for (axis, &length) in lengths.iter().enumerate() {
            if !(length.is_finite() && length > 0.0) {
                return Err(BoxError::InvalidLength { axis, length });
            }
        }
        Ok(Self { lengths })
    }

    pub fn cubic(length: f64) -> Result<Self, BoxError> {
        Self::new(Vector3::repeat(length))
    }

    pub fn lengths(&self) -> &Vector3<f64> {
        &self.lengths
    }

    /// Wraps a displacement into the primary image.
    ///
    /// Each component above `+L/2` has `L` subtracted, each component below
    /// `-L/2` has `L` added. The wrap is applied once, so displacements must
    /// not exceed one box length.
    pub fn apply_pbc(&self, mut vector: Vector3<f64>) -> Vector3<f64> {
        for axis in 0..3 {
            let length = self.lengths[axis];
            if vector[axis] > length * 0.5 {
                vector[axis] -= length;
            } else if vector[axis] < -length * 0.5 {
                vector[axis] += length;
            }
        }
        vector
    }

    /// Minimum-image displacement `pos_a - pos_b`.
    pub fn minimum_image(&self, pos_a: &Point3<f64>, pos_b: &Point3<f64>) -> Vector3<f64> {
        self.apply_pbc(pos_a - pos_b)
    }
}
