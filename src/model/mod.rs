#[macro_use]
mod macros;

pub mod action;
pub mod config;
pub mod crisis;
pub mod dilemma;
pub mod event;
pub mod sector;
pub mod snapshot;
pub mod world;

pub use action::{Action, DilemmaChoice, TurnResult};
pub use config::WorldConfig;
pub use crisis::{CrisisKind, MinorEventKind};
pub use dilemma::{Dilemma, DilemmaEffect, EffectKind};
pub use event::{EventKind, EventLog, LogEntry, Tone};
pub use sector::{Resource, Sector, SectorCondition, SectorKind};
pub use snapshot::{SectorView, WorldSnapshot};
pub use world::{Outcome, World};
