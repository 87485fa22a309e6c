use serde::{Deserialize, Serialize};

use super::event::DEFAULT_LOG_CAPACITY;
use super::sector::SectorKind;

/// Initial conditions for a fresh tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub start_year: u32,
    pub food: f64,
    pub power: f64,
    pub materials: f64,
    pub population: u32,
    pub morale: f64,
    pub max_height: u32,
    pub cursor: u32,
    pub log_capacity: usize,
    /// Pre-placed sectors, bottom to top, starting at level 1.
    pub layout: Vec<SectorKind>,
    /// Inclusive range of workers assigned to each starting sector.
    pub starting_workers: (u32, u32),
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            start_year: 1,
            food: 150.0,
            power: 100.0,
            materials: 80.0,
            population: 85,
            morale: 65.0,
            max_height: 12,
            cursor: 5,
            log_capacity: DEFAULT_LOG_CAPACITY,
            layout: vec![
                SectorKind::Power,
                SectorKind::Industrial,
                SectorKind::Residential,
                SectorKind::Farm,
                SectorKind::Residential,
                SectorKind::Farm,
                SectorKind::Power,
                SectorKind::Residential,
            ],
            starting_workers: (8, 15),
        }
    }
}
