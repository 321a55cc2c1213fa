pub mod ci;
pub mod comment;
pub mod persist;

pub use ci::*;
pub use comment::*;
pub use persist::*;
