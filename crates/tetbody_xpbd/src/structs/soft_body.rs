use glam::Vec3;

use crate::constraints::{DistanceConstraint, VolumeConstraint};

use super::Particle;

/// A tetrahedral body: the particle store plus its fixed constraint
/// topology. Distance and volume constraints are kept as two separate
/// ordered sequences; their solve logic never needs dynamic dispatch.
/// Constraints reference particles by index, never by pointer.
pub struct SoftBody {
    pub particles: Vec<Particle>,
    pub edges: Vec<DistanceConstraint>,
    pub volume: VolumeConstraint,
    pub edge_compliance: f32,
    pub volume_compliance: f32,
}

impl SoftBody {
    /// Predict phase: integrate gravity into velocities and advance the
    /// positions, remembering where each particle started the step.
    pub fn pre_solve(&mut self, gravity: Vec3, dt: f32) {
        for particle in self.particles.iter_mut() {
            if particle.is_pinned() {
                continue;
            }
            particle.velocity += gravity * dt;
            particle.prev_position = particle.position;
            particle.position += particle.velocity * dt;
        }
    }

    /// Clamp predicted positions against the infinite ground plane. Only
    /// the vertical component is constrained; particles slide freely along
    /// the plane. Runs once per substep, between prediction and the
    /// iterative solver, never inside the iteration loop.
    pub fn resolve_ground(&mut self, ground_y: f32) {
        for particle in self.particles.iter_mut() {
            if particle.is_pinned() {
                continue;
            }
            if particle.position.y < ground_y {
                particle.position.y = ground_y;
            }
        }
    }

    /// One relaxation pass: every edge in declaration order, then the
    /// volume constraint.
    pub fn solve_constraints(&mut self, dt: f32) {
        let dt_squared = dt * dt;
        let edge_alpha = self.edge_compliance / dt_squared;
        for edge in self.edges.iter() {
            edge.solve(&mut self.particles, edge_alpha);
        }
        self.volume
            .solve(&mut self.particles, self.volume_compliance / dt_squared);
    }

    /// Derive velocities from the positional change over the step. Velocity
    /// is never the primary integrated state here.
    pub fn post_solve(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            if particle.is_pinned() {
                continue;
            }
            particle.velocity = (particle.position - particle.prev_position) / dt;
        }
    }
}
