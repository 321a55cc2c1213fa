pub mod config;
pub mod context;
pub mod doctor;
pub mod runner;

pub use config::*;
pub use context::*;
pub use doctor::*;
pub use runner::*;
