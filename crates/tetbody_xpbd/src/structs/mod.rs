mod particle;
pub use particle::*;

mod soft_body;
pub use soft_body::*;

mod body_builders;
pub use body_builders::*;

mod simulation;
pub use simulation::*;
