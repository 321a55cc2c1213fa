pub mod clip;
pub mod sections;

pub use clip::*;
pub use sections::*;
