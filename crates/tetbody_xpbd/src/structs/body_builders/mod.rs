mod tetrahedron;
pub use tetrahedron::*;
