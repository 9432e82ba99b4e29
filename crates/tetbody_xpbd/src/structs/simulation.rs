use glam::Vec3;

use super::SoftBody;

/// Configuration fixed at construction. `solver_iterations` is the primary
/// quality/cost lever. `substeps` runs the full
/// predict/collide/solve/reconcile cycle that many times per `step` call,
/// each at a fraction of `dt`; 1 reproduces the single-cycle behavior.
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
    pub gravity: Vec3,
    pub ground_y: f32,
    pub solver_iterations: usize,
    pub substeps: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -1.0, 0.0),
            ground_y: -3.5,
            solver_iterations: 1,
            substeps: 1,
        }
    }
}

/// Owns the bodies and the configuration; `step` is the sole mutating
/// entry point. Single-threaded and run-to-completion: constraint
/// application is order-dependent within an iteration.
#[derive(Default)]
pub struct Simulation {
    pub params: SimulationParams,
    bodies: Vec<SoftBody>,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            bodies: Vec::new(),
        }
    }

    pub fn add_body(&mut self, body: SoftBody) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[SoftBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [SoftBody] {
        &mut self.bodies
    }

    /// Advance every body by `dt` seconds. The compliance terms divide by
    /// `dt^2`, so a non-positive or non-finite `dt` turns the call into a
    /// no-op.
    pub fn step(&mut self, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            log::warn!("skipping step: invalid dt {dt}");
            return;
        }
        let substeps = self.params.substeps.max(1);
        let sub_dt = dt / substeps as f32;
        for _ in 0..substeps {
            for body in self.bodies.iter_mut() {
                body.pre_solve(self.params.gravity, sub_dt);
                body.resolve_ground(self.params.ground_y);
                for _ in 0..self.params.solver_iterations {
                    body.solve_constraints(sub_dt);
                }
                body.post_solve(sub_dt);
            }
        }
    }
}
