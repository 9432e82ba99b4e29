use glam::Vec3;

/// Point mass tracked by the solver. `inverse_mass == 0.0` pins the
/// particle: every position-mutating phase leaves it untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    pub position: Vec3,
    pub prev_position: Vec3,
    pub velocity: Vec3,
    pub inverse_mass: f32,
}

impl Particle {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            prev_position: position,
            velocity: Vec3::ZERO,
            inverse_mass: 1.0,
        }
    }

    pub fn pinned(position: Vec3) -> Self {
        Self {
            inverse_mass: 0.0,
            ..Self::from_position(position)
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.inverse_mass == 0.0
    }
}
