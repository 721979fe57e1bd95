pub mod human;
pub mod simulate;

pub use human::HumanMode;
pub use simulate::{SimulateConfig, SimulateMode, SimulationSummary};
