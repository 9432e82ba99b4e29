mod constraints;
pub use constraints::*;

mod structs;
pub use structs::*;
