//! Command implementations

pub mod play;
pub mod simulate;

pub use play::run_play;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
