use itertools::izip;

use crate::structs::Particle;

/// Pulls four particles back toward the signed tetrahedron volume they
/// enclosed when the constraint was built. The rest volume keeps whatever
/// sign the initial winding produced; the correction below is driven by the
/// signed difference, so rest and current measurements share one
/// convention.
pub struct VolumeConstraint {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub rest_volume: f32,
}

impl VolumeConstraint {
    pub fn from_particles(particles: &[Particle], a: usize, b: usize, c: usize, d: usize) -> Self {
        let len = particles.len();
        assert!(
            a < len && b < len && c < len && d < len,
            "volume constraint ({}, {}, {}, {}) references a particle outside the store (len={})",
            a,
            b,
            c,
            d,
            len
        );
        let mut tetra = Self {
            a,
            b,
            c,
            d,
            rest_volume: 0.0,
        };
        tetra.rest_volume = tetra.volume(particles);
        tetra
    }

    /// Signed volume of the current configuration, scalar triple product
    /// over six.
    pub fn volume(&self, particles: &[Particle]) -> f32 {
        let p0 = particles[self.a].position;
        let v1 = particles[self.b].position - p0;
        let v2 = particles[self.c].position - p0;
        let v3 = particles[self.d].position - p0;
        v1.dot(v2.cross(v3)) / 6.0
    }

    /// One XPBD relaxation pass. `alpha` is compliance / dt^2.
    pub fn solve(&self, particles: &mut [Particle], alpha: f32) {
        let p0 = particles[self.a].position;
        let p1 = particles[self.b].position;
        let p2 = particles[self.c].position;
        let p3 = particles[self.d].position;

        // dV/dp_i without the 1/6 factor; it is folded into lambda instead.
        let gradients = [
            (p2 - p1).cross(p3 - p1),
            (p3 - p0).cross(p2 - p0),
            (p0 - p1).cross(p3 - p1),
            (p1 - p0).cross(p2 - p0),
        ];
        let ids = [self.a, self.b, self.c, self.d];

        let mut w = 0.0;
        for (id, gradient) in izip!(ids, gradients) {
            w += particles[id].inverse_mass * gradient.length_squared();
        }
        if w.abs() <= 1e-6 {
            return;
        }

        let residual = self.volume(particles) - self.rest_volume;
        let lambda = -6.0 * residual / (w + alpha);
        for (id, gradient) in izip!(ids, gradients) {
            let push = gradient * (lambda * particles[id].inverse_mass);
            particles[id].position += push;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn tetra_particles() -> Vec<Particle> {
        vec![
            Particle::from_position(Vec3::new(0.0, -0.5, 0.0)),
            Particle::from_position(Vec3::new(-0.5, 0.5, 0.5)),
            Particle::from_position(Vec3::new(0.5, 0.5, 0.5)),
            Particle::from_position(Vec3::new(0.0, 0.5, -0.5)),
        ]
    }

    #[test]
    fn rest_volume_is_captured_at_construction() {
        let particles = tetra_particles();
        let constraint = VolumeConstraint::from_particles(&particles, 0, 1, 2, 3);
        assert!((constraint.volume(&particles) - constraint.rest_volume).abs() < 1e-6);
        assert!(constraint.rest_volume.abs() > 1e-3);
    }

    #[test]
    fn fully_pinned_tetrahedron_is_skipped() {
        let mut particles = tetra_particles();
        for particle in particles.iter_mut() {
            particle.inverse_mass = 0.0;
        }
        let mut constraint = VolumeConstraint::from_particles(&particles, 0, 1, 2, 3);
        // force a violation so a non-skip would be visible
        constraint.rest_volume *= 2.0;
        let before: Vec<_> = particles.iter().map(|p| p.position).collect();
        constraint.solve(&mut particles, 0.0);
        for (particle, position) in particles.iter().zip(before) {
            assert_eq!(particle.position, position);
        }
    }

    #[test]
    fn squashed_tetrahedron_recovers_its_volume() {
        let mut particles = tetra_particles();
        let constraint = VolumeConstraint::from_particles(&particles, 0, 1, 2, 3);
        for particle in particles.iter_mut() {
            particle.position.y *= 0.5;
        }
        let squashed_error = (constraint.volume(&particles) - constraint.rest_volume).abs();
        assert!(squashed_error > 1e-3);

        let dt = 1.0f32 / 60.0;
        let alpha = 0.01 / (dt * dt);
        for _ in 0..200 {
            constraint.solve(&mut particles, alpha);
        }
        let error = (constraint.volume(&particles) - constraint.rest_volume).abs();
        assert!(error < 1e-3);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_fails_fast() {
        let particles = tetra_particles();
        VolumeConstraint::from_particles(&particles, 0, 1, 2, 4);
    }
}
