mod distance_constraint;
pub use distance_constraint::*;

mod volume_constraint;
pub use volume_constraint::*;
