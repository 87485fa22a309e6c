use super::context::TickContext;
use super::system::SimSystem;
use crate::model::{Outcome, World};

/// Surviving to this year wins the game.
pub const LEGENDARY_YEAR: u32 = 50;

/// Phase 10: decide whether the game is over.
pub struct TerminalSystem;

/// The first matching end condition, in priority order:
/// extinction, then total collapse, then legendary survival.
pub fn evaluate(world: &World) -> Option<Outcome> {
    if world.population == 0 {
        Some(Outcome::Extinction { year: world.year })
    } else if world.functional_count() == 0 {
        Some(Outcome::TotalCollapse { year: world.year })
    } else if world.year >= LEGENDARY_YEAR {
        Some(Outcome::Legendary {
            year: world.year,
            population: world.population,
        })
    } else {
        None
    }
}

impl SimSystem for TerminalSystem {
    fn name(&self) -> &str {
        "terminal"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        if let Some(outcome) = evaluate(ctx.world) {
            ctx.world.end(outcome);
        }
    }
}
