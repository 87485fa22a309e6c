pub mod model;
pub mod scenario;
pub mod sim;
pub mod testutil;

pub use model::{
    Action, Dilemma, DilemmaChoice, EventKind, LogEntry, Outcome, Sector, SectorKind, Tone,
    TurnResult, World, WorldConfig, WorldSnapshot,
};
pub use sim::{Driver, Engine, RunSummary, SimConfig};
