pub mod diff;
pub mod flatten;

pub use diff::*;
pub use flatten::*;
