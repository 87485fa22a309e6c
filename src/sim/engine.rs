use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::actions::ActionSystem;
use super::clock::ClockSystem;
use super::decay::DecaySystem;
use super::dilemma;
use super::fire::FireSystem;
use super::morale::MoraleSystem;
use super::pacing::PacingSystem;
use super::production::{ConsumptionSystem, ProductionSystem};
use super::runner::dispatch_systems;
use super::shortages::ShortageSystem;
use super::system::SimSystem;
use super::terminal::TerminalSystem;
use crate::model::{Action, DilemmaChoice, TurnResult, World, WorldConfig, WorldSnapshot};

/// A fresh world with the configured starting tower.
pub fn create_world(config: &WorldConfig, rng: &mut dyn RngCore) -> World {
    World::from_config(config, rng)
}

/// The turn pipeline in its fixed phase order.
pub fn default_systems() -> Vec<Box<dyn SimSystem>> {
    vec![
        Box::new(ClockSystem),
        Box::new(ActionSystem),
        Box::new(ProductionSystem),
        Box::new(ConsumptionSystem),
        Box::new(ShortageSystem),
        Box::new(FireSystem),
        Box::new(DecaySystem),
        Box::new(MoraleSystem),
        Box::new(PacingSystem),
        Box::new(TerminalSystem),
    ]
}

/// Owns one tower and advances it a month at a time.
///
/// Drivers read the world through [`Engine::world`] or [`Engine::snapshot`]
/// and change it only by submitting actions or moving the cursor.
pub struct Engine {
    world: World,
    rng: Box<dyn RngCore>,
    systems: Vec<Box<dyn SimSystem>>,
}

impl Engine {
    /// Default tower, deterministic for a given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(&WorldConfig::default(), seed)
    }

    pub fn with_config(config: &WorldConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let world = create_world(config, &mut rng);
        Self::with_rng(world, Box::new(rng))
    }

    /// Wrap an existing world with any random source.
    pub fn with_rng(world: World, rng: Box<dyn RngCore>) -> Self {
        Self {
            world,
            rng,
            systems: default_systems(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.world)
    }

    pub fn is_alive(&self) -> bool {
        self.world.alive
    }

    pub fn set_cursor(&mut self, level: u32) {
        self.world.set_cursor(level);
    }

    pub fn move_cursor_up(&mut self) {
        self.world.move_cursor_up();
    }

    pub fn move_cursor_down(&mut self) {
        self.world.move_cursor_down();
    }

    /// Run one full turn with `action`.
    ///
    /// While a dilemma is outstanding only a choice is accepted: the choice is
    /// applied and then a `wait` turn runs. Anything else is rejected without
    /// touching the world, as is a choice with no dilemma outstanding. A
    /// finished game is never advanced.
    pub fn advance_turn(&mut self, action: Action) -> TurnResult {
        if !self.world.alive {
            return TurnResult::GameOver;
        }

        let pending = self.world.current_dilemma.as_ref().map(|d| d.title.clone());
        let action = match (pending, action) {
            (Some(_), Action::Choose { choice }) => {
                dilemma::resolve(&mut self.world, choice);
                Action::Wait
            }
            (Some(title), other) => {
                tracing::debug!(action = other.tag(), dilemma = %title, "action gated by dilemma");
                return TurnResult::Rejected {
                    reason: format!("Resolve \"{title}\" first"),
                };
            }
            (None, Action::Choose { .. }) => {
                return TurnResult::Rejected {
                    reason: "No dilemma to resolve".to_string(),
                };
            }
            (None, other) => other,
        };

        dispatch_systems(&mut self.world, &mut self.systems, self.rng.as_mut(), action);
        TurnResult::Advanced
    }

    /// Apply a dilemma choice without advancing the clock.
    pub fn resolve_dilemma(&mut self, choice: DilemmaChoice) -> TurnResult {
        if !self.world.alive {
            return TurnResult::GameOver;
        }
        match dilemma::resolve(&mut self.world, choice) {
            Some(_) => TurnResult::Resolved,
            None => TurnResult::Rejected {
                reason: "No dilemma to resolve".to_string(),
            },
        }
    }

    /// Parse a driver's action tag against the current cursor and advance.
    pub fn submit(&mut self, tag: &str) -> TurnResult {
        let action = Action::parse(tag, self.world.cursor);
        self.advance_turn(action)
    }
}
