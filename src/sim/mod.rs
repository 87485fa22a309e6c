mod actions;
mod catalog;
mod clock;
mod context;
mod decay;
pub mod dilemma;
mod engine;
mod fire;
mod helpers;
mod morale;
mod pacing;
mod production;
mod runner;
mod shortages;
mod system;
mod terminal;

pub use actions::ActionSystem;
pub use catalog::{apply_crisis, apply_minor_event, trigger_crisis, trigger_minor_event};
pub use clock::ClockSystem;
pub use context::TickContext;
pub use decay::DecaySystem;
pub use engine::{Engine, create_world, default_systems};
pub use fire::FireSystem;
pub use morale::MoraleSystem;
pub use pacing::PacingSystem;
pub use production::{ConsumptionSystem, ProductionSystem, monthly_output};
pub use runner::{Driver, RunSummary, SimConfig, dispatch_systems, play, run};
pub use shortages::ShortageSystem;
pub use system::SimSystem;
pub use terminal::{LEGENDARY_YEAR, TerminalSystem, evaluate};
