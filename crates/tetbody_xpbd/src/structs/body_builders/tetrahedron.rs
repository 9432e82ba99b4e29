use glam::Vec3;

use crate::constraints::{DistanceConstraint, VolumeConstraint};
use crate::structs::{Particle, SoftBody};

/// The six pairwise edges of the tetrahedron, in solve order.
pub const TETRAHEDRON_EDGES: [(usize, usize); 6] =
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Triangle groupings a renderer expands the particle positions into.
pub const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

impl SoftBody {
    /// The reference body: a single tetrahedron of four free
    /// unit-inverse-mass particles, all pairwise edges and one volume
    /// constraint. The volume term is deliberately much softer than the
    /// edges so the body can compress somewhat before it dominates.
    pub fn single_tetrahedron() -> Self {
        let particles = vec![
            Particle::from_position(Vec3::new(0.0, -0.5, 0.0)),
            Particle::from_position(Vec3::new(-0.5, 0.5, 0.5)),
            Particle::from_position(Vec3::new(0.5, 0.5, 0.5)),
            Particle::from_position(Vec3::new(0.0, 0.5, -0.5)),
        ];
        let edges = TETRAHEDRON_EDGES
            .iter()
            .map(|&(a, b)| DistanceConstraint::from_particles(&particles, a, b))
            .collect();
        let volume = VolumeConstraint::from_particles(&particles, 0, 1, 2, 3);
        SoftBody {
            particles,
            edges,
            volume,
            edge_compliance: 0.03,
            volume_compliance: 0.9,
        }
    }
}
