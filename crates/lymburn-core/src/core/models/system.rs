use super::ids::TypeId;
use super::simulation_box::SimulationBox;
use super::types::TypeRegistry;
use nalgebra::Point3;

/// A periodic particle system as seen by the pair evaluator.
///
/// Only the data the potential needs is stored: positions, type labels and
/// the box. Velocities, masses and integration state belong to the host.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    /// Type name registry shared by all particles of the system.
    registry: TypeRegistry,
    /// Type of each particle, indexed by particle index.
    types: Vec<TypeId>,
    /// Position of each particle, indexed by particle index.
    positions: Vec<Point3<f64>>,
    /// Periodic box used for minimum-image displacements.
    sim_box: SimulationBox,
}

impl ParticleSystem {
    /// Creates an empty system inside `sim_box`.
    pub fn new(sim_box: SimulationBox) -> Self {
        Self {
            registry: TypeRegistry::new(),
            types: Vec::new(),
            positions: Vec::new(),
            sim_box,
        }
    }

    /// Adds a particle of type `type_name` and returns its index.
    ///
    /// The type is registered on first use.
    pub fn add_particle(&mut self, type_name: &str, position: Point3<f64>) -> usize {
        let type_id = self.registry.intern(type_name);
        self.types.push(type_id);
        self.positions.push(position);
        self.positions.len() - 1
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }

    /// Moves particle `index`; returns `false` if the index is out of range.
    pub fn set_position(&mut self, index: usize, position: Point3<f64>) -> bool {
        match self.positions.get_mut(index) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    pub fn type_of(&self, index: usize) -> Option<TypeId> {
        self.types.get(index).copied()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn types(&self) -> &[TypeId] {
        &self.types
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn sim_box(&self) -> &SimulationBox {
        &self.sim_box
    }
}
