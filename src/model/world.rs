use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::config::WorldConfig;
use super::dilemma::Dilemma;
use super::event::{EventKind, EventLog, LogEntry, Tone};
use super::sector::{Sector, SectorKind};

pub const MONTHS_PER_YEAR: u32 = 12;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Extinction { year: u32 },
    TotalCollapse { year: u32 },
    Legendary { year: u32, population: u32 },
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Extinction { year } => {
                format!("EXTINCTION - The Spire stands empty. Year {year}")
            }
            Outcome::TotalCollapse { year } => {
                format!("TOTAL COLLAPSE - All sectors destroyed. Year {year}")
            }
            Outcome::Legendary { year, population } => {
                format!("LEGENDARY - {year} years, {population} survivors!")
            }
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Legendary { .. })
    }
}

/// The whole mutable state of one tower.
///
/// Fields are public for reading. Mutate through the engine; the cursor
/// setters are the only direct mutation drivers should use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub year: u32,
    pub month: u32,
    pub food: f64,
    pub power: f64,
    pub materials: f64,
    pub population: u32,
    pub morale: f64,
    pub tension: f64,
    /// Sorted by level; levels are unique.
    pub sectors: Vec<Sector>,
    pub max_height: u32,
    pub cursor: u32,
    pub events: EventLog,
    pub current_dilemma: Option<Dilemma>,
    pub turns_since_crisis: u32,
    pub alive: bool,
    pub victory_message: String,
    pub outcome: Option<Outcome>,
}

impl World {
    /// An empty tower with the configured pools and no sectors.
    pub fn empty(config: &WorldConfig) -> Self {
        let max_height = config.max_height.max(1);
        Self {
            year: config.start_year,
            month: 1,
            food: config.food,
            power: config.power,
            materials: config.materials,
            population: config.population,
            morale: config.morale,
            tension: 0.0,
            sectors: Vec::new(),
            max_height,
            cursor: config.cursor.clamp(1, max_height),
            events: EventLog::new(config.log_capacity),
            current_dilemma: None,
            turns_since_crisis: 0,
            alive: true,
            victory_message: String::new(),
            outcome: None,
        }
    }

    /// A fresh tower with the configured starting layout and welcome entries.
    pub fn from_config(config: &WorldConfig, rng: &mut dyn RngCore) -> Self {
        let mut world = Self::empty(config);
        let (lo, hi) = config.starting_workers;
        for kind in config.layout.iter().take(world.max_height as usize) {
            let workers = rng.random_range(lo.min(hi)..=hi.max(lo));
            world.push_sector(*kind, workers);
        }
        world.log(
            EventKind::Welcome,
            Tone::Info,
            "The Spire awakens. Your people huddle in its shadow.",
        );
        world.log(
            EventKind::Welcome,
            Tone::Warning,
            "The Tower is unstable. Disasters will come. Be ready.",
        );
        world
    }

    pub fn sector(&self, level: u32) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.level == level)
    }

    pub fn sector_mut(&mut self, level: u32) -> Option<&mut Sector> {
        self.sectors.iter_mut().find(|s| s.level == level)
    }

    pub fn is_full(&self) -> bool {
        self.sectors.len() >= self.max_height as usize
    }

    /// Add a sector on level `len + 1`. Returns its level, or `None` at
    /// capacity or if that level is somehow occupied.
    pub fn push_sector(&mut self, kind: SectorKind, workers: u32) -> Option<u32> {
        if self.is_full() {
            return None;
        }
        let level = self.sectors.len() as u32 + 1;
        if self.sector(level).is_some() {
            return None;
        }
        self.sectors.push(Sector::new(level, kind, workers));
        self.sectors.sort_by_key(|s| s.level);
        Some(level)
    }

    pub fn functional_count(&self) -> usize {
        self.sectors.iter().filter(|s| s.is_functional()).count()
    }

    /// Levels of sectors currently able to produce.
    pub fn functional_levels(&self) -> Vec<u32> {
        self.sectors
            .iter()
            .filter(|s| s.is_functional())
            .map(|s| s.level)
            .collect()
    }

    pub fn levels(&self) -> Vec<u32> {
        self.sectors.iter().map(|s| s.level).collect()
    }

    /// Remove up to `count` people. Returns how many were actually removed.
    pub fn kill(&mut self, count: u32) -> u32 {
        let removed = count.min(self.population);
        self.population -= removed;
        removed
    }

    pub fn set_cursor(&mut self, level: u32) {
        self.cursor = level.clamp(1, self.max_height);
    }

    pub fn move_cursor_up(&mut self) {
        self.set_cursor(self.cursor.saturating_add(1));
    }

    pub fn move_cursor_down(&mut self) {
        self.set_cursor(self.cursor.saturating_sub(1));
    }

    /// Advance one month, rolling the year over after December.
    pub fn advance_clock(&mut self) {
        self.month += 1;
        if self.month > MONTHS_PER_YEAR {
            self.month = 1;
            self.year += 1;
        }
    }

    pub fn log(&mut self, kind: EventKind, tone: Tone, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(year = self.year, month = self.month, kind = %kind, "{message}");
        self.events.push(LogEntry {
            year: self.year,
            month: self.month,
            kind,
            tone,
            message,
        });
    }

    /// Record a terminal outcome. The first one recorded sticks.
    pub fn end(&mut self, outcome: Outcome) {
        if !self.alive {
            return;
        }
        tracing::info!(year = self.year, population = self.population, "{}", outcome.message());
        self.alive = false;
        self.victory_message = outcome.message();
        self.outcome = Some(outcome);
    }
}
