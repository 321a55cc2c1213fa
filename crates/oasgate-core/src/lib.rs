pub mod format;
pub mod state;

pub use format::*;
pub use state::*;
