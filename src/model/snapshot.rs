use serde::Serialize;

use super::dilemma::Dilemma;
use super::event::LogEntry;
use super::sector::{Sector, SectorCondition};
use super::world::{Outcome, World};

/// A sector as a renderer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct SectorView {
    #[serde(flatten)]
    pub sector: Sector,
    pub functional: bool,
    pub condition: SectorCondition,
}

/// An owned, read-only copy of the world for renderers and agents.
///
/// Holding one never borrows the engine.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub year: u32,
    pub month: u32,
    pub food: f64,
    pub power: f64,
    pub materials: f64,
    pub population: u32,
    pub morale: f64,
    pub tension: f64,
    pub sectors: Vec<SectorView>,
    pub max_height: u32,
    pub cursor: u32,
    pub events: Vec<LogEntry>,
    pub current_dilemma: Option<Dilemma>,
    pub turns_since_crisis: u32,
    pub alive: bool,
    pub victory_message: String,
    pub outcome: Option<Outcome>,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            year: world.year,
            month: world.month,
            food: world.food,
            power: world.power,
            materials: world.materials,
            population: world.population,
            morale: world.morale,
            tension: world.tension,
            sectors: world
                .sectors
                .iter()
                .map(|s| SectorView {
                    sector: s.clone(),
                    functional: s.is_functional(),
                    condition: s.condition(),
                })
                .collect(),
            max_height: world.max_height,
            cursor: world.cursor,
            events: world.events.iter().cloned().collect(),
            current_dilemma: world.current_dilemma.clone(),
            turns_since_crisis: world.turns_since_crisis,
            alive: world.alive,
            victory_message: world.victory_message.clone(),
            outcome: world.outcome,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
