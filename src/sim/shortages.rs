use super::context::TickContext;
use super::helpers::{fraction_of, pick_level};
use super::system::SimSystem;
use crate::model::{EventKind, Tone};

pub const STARVATION_RATE: f64 = 0.12;
pub const STARVATION_CAP: u32 = 15;
pub const STARVATION_MORALE: f64 = 25.0;
pub const BLACKOUT_MORALE: f64 = 15.0;
pub const BLACKOUT_DAMAGE: f64 = 25.0;

/// Phase 5: starvation and blackout when a pool ran dry.
///
/// Both checks run independently; each clamps its pool back to zero.
pub struct ShortageSystem;

impl SimSystem for ShortageSystem {
    fn name(&self) -> &str {
        "shortages"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let world = &mut *ctx.world;

        if world.food < 0.0 {
            let deaths = fraction_of(world.population, STARVATION_RATE).min(STARVATION_CAP);
            let deaths = world.kill(deaths);
            world.morale -= STARVATION_MORALE;
            world.food = 0.0;
            world.log(
                EventKind::Starvation,
                Tone::Danger,
                format!("STARVATION: {deaths} die from hunger"),
            );
        }

        if world.power < 0.0 {
            world.morale -= BLACKOUT_MORALE;
            world.power = 0.0;
            let functional = world.functional_levels();
            if let Some(level) = pick_level(ctx.rng, &functional) {
                if let Some(sector) = world.sector_mut(level) {
                    sector.health -= BLACKOUT_DAMAGE;
                }
                world.log(
                    EventKind::Blackout,
                    Tone::Danger,
                    format!("BLACKOUT damages Level {level}"),
                );
            } else {
                world.log(EventKind::Blackout, Tone::Danger, "BLACKOUT across the Spire");
            }
        }
    }
}
