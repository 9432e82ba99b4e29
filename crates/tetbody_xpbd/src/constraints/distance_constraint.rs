use crate::structs::Particle;

/// Keeps two particles at the distance they had when the constraint was
/// built. Immutable after construction.
pub struct DistanceConstraint {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
}

impl DistanceConstraint {
    pub fn from_particles(particles: &[Particle], a: usize, b: usize) -> Self {
        assert!(
            a < particles.len() && b < particles.len(),
            "distance constraint ({}, {}) references a particle outside the store (len={})",
            a,
            b,
            particles.len()
        );
        let rest_length = (particles[a].position - particles[b].position).length();
        Self { a, b, rest_length }
    }

    /// One XPBD relaxation pass. `alpha` is compliance / dt^2; the
    /// compliance term keeps the stiffness independent of the iteration
    /// count, so it must never be dropped in favor of a hard projection.
    pub fn solve(&self, particles: &mut [Particle], alpha: f32) {
        let delta = particles[self.a].position - particles[self.b].position;
        let length = delta.length();
        if length < 1e-6 {
            // coincident particles, no usable gradient
            return;
        }
        let w = particles[self.a].inverse_mass + particles[self.b].inverse_mass;
        if w < 1e-6 {
            return;
        }
        let gradient = delta / length;
        let lambda = -(length - self.rest_length) / (w + alpha);
        particles[self.a].position += gradient * (lambda * particles[self.a].inverse_mass);
        particles[self.b].position -= gradient * (lambda * particles[self.b].inverse_mass);
    }
}
