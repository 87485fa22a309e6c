use rand::RngCore;

use crate::model::*;
use crate::sim::Engine;

/// Workers placed in every scenario sector unless overridden.
pub const SCENARIO_WORKERS: u32 = 10;

/// Builder for hand-made test towers.
///
/// Starts from the default pools and starting layout with exactly
/// [`SCENARIO_WORKERS`] workers per sector and an empty log, so tests can
/// predict every number. Setters chain by value:
///
/// ```
/// use spire_sim::scenario::Scenario;
///
/// let world = Scenario::new()
///     .food(-50.0)
///     .sector(4, |s| s.health = 0.0)
///     .build();
/// assert_eq!(world.sector(4).unwrap().health, 0.0);
/// ```
pub struct Scenario {
    world: World,
}

impl Scenario {
    pub fn new() -> Self {
        Self::with_config(&WorldConfig::default())
    }

    pub fn with_config(config: &WorldConfig) -> Self {
        let mut world = World::empty(config);
        for kind in &config.layout {
            world.push_sector(*kind, SCENARIO_WORKERS);
        }
        Self { world }
    }

    pub fn year(mut self, v: u32) -> Self { self.world.year = v; self }
    pub fn month(mut self, v: u32) -> Self { self.world.month = v.clamp(1, 12); self }
    pub fn food(mut self, v: f64) -> Self { self.world.food = v; self }
    pub fn power(mut self, v: f64) -> Self { self.world.power = v; self }
    pub fn materials(mut self, v: f64) -> Self { self.world.materials = v; self }
    pub fn population(mut self, v: u32) -> Self { self.world.population = v; self }
    pub fn morale(mut self, v: f64) -> Self { self.world.morale = v; self }
    pub fn tension(mut self, v: f64) -> Self { self.world.tension = v; self }
    pub fn turns_since_crisis(mut self, v: u32) -> Self { self.world.turns_since_crisis = v; self }
    pub fn cursor(mut self, v: u32) -> Self { self.world.set_cursor(v); self }

    /// Change the capacity, dropping sectors above it.
    pub fn max_height(mut self, v: u32) -> Self {
        self.world.max_height = v.max(1);
        let max = self.world.max_height;
        self.world.sectors.retain(|s| s.level <= max);
        self.world.set_cursor(self.world.cursor);
        self
    }

    /// Keep only the listed levels; the rest become unbuilt.
    pub fn only_levels(mut self, levels: &[u32]) -> Self {
        self.world.sectors.retain(|s| levels.contains(&s.level));
        self
    }

    /// Stack `n` more residential levels on top.
    pub fn extra_levels(mut self, n: u32) -> Self {
        for _ in 0..n {
            self.world.push_sector(SectorKind::Residential, SCENARIO_WORKERS);
        }
        self
    }

    /// Escape hatch: apply an arbitrary closure to one sector.
    ///
    /// # Panics
    /// Panics if there is no sector at `level`.
    pub fn sector(mut self, level: u32, f: impl FnOnce(&mut Sector)) -> Self {
        let sector = self
            .world
            .sector_mut(level)
            .unwrap_or_else(|| panic!("scenario has no sector at level {level}"));
        f(sector);
        self
    }

    /// Escape hatch: apply an arbitrary closure to the whole world.
    pub fn with(mut self, f: impl FnOnce(&mut World)) -> Self { f(&mut self.world); self }

    pub fn build(self) -> World {
        self.world
    }

    /// Wrap the world in an engine driven by `rng`.
    pub fn engine(self, rng: impl RngCore + 'static) -> Engine {
        Engine::with_rng(self.world, Box::new(rng))
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
