use rand::RngCore;

use super::context::TickContext;
use super::engine::Engine;
use super::system::SimSystem;
use crate::model::{Action, Outcome, TurnResult, World};

/// Configuration for a single driven game.
pub struct SimConfig {
    pub seed: u64,
    /// Upper bound on submissions, counting rejected ones.
    pub max_turns: u32,
}

impl SimConfig {
    pub fn new(seed: u64, max_turns: u32) -> Self {
        Self { seed, max_turns }
    }
}

/// Anything that picks the next action: a UI loop, a script, an agent.
///
/// Drivers see the world read-only.
pub trait Driver {
    fn choose_action(&mut self, world: &World) -> Action;
}

/// How a driven game went.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Turns that actually advanced the world.
    pub turns: u32,
    pub rejected: u32,
    pub outcome: Option<Outcome>,
    pub year: u32,
    pub month: u32,
    pub population: u32,
    pub sectors: usize,
}

impl RunSummary {
    fn capture(world: &World, turns: u32, rejected: u32) -> Self {
        Self {
            turns,
            rejected,
            outcome: world.outcome,
            year: world.year,
            month: world.month,
            population: world.population,
            sectors: world.sectors.len(),
        }
    }
}

/// Run each system once, in registration order, for one turn.
pub fn dispatch_systems(
    world: &mut World,
    systems: &mut [Box<dyn SimSystem>],
    rng: &mut dyn RngCore,
    action: Action,
) {
    for system in systems.iter_mut() {
        let mut ctx = TickContext { world, rng, action };
        system.tick(&mut ctx);
    }
}

/// Drive `engine` until the game ends or `max_turns` submissions were made.
pub fn run(engine: &mut Engine, driver: &mut dyn Driver, max_turns: u32) -> RunSummary {
    let mut turns = 0;
    let mut rejected = 0;

    for _ in 0..max_turns {
        if !engine.is_alive() {
            break;
        }
        let action = driver.choose_action(engine.world());
        match engine.advance_turn(action) {
            TurnResult::Advanced => turns += 1,
            TurnResult::Rejected { .. } => rejected += 1,
            _ => break,
        }
    }

    let summary = RunSummary::capture(engine.world(), turns, rejected);
    tracing::info!(
        turns = summary.turns,
        year = summary.year,
        population = summary.population,
        "run finished"
    );
    summary
}

/// Start a fresh seeded game and drive it.
pub fn play(config: SimConfig, driver: &mut dyn Driver) -> (Engine, RunSummary) {
    let mut engine = Engine::new(config.seed);
    let summary = run(&mut engine, driver, config.max_turns);
    (engine, summary)
}
