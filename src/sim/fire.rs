use super::context::TickContext;
use super::helpers::roll;
use super::system::SimSystem;
use crate::model::{EventKind, Tone};

pub const FIRE_DAMAGE: f64 = 8.0;
/// A fire must have burned longer than this before it can spread.
pub const SPREAD_AFTER_TURNS: u32 = 2;
pub const SPREAD_CHANCE: f64 = 0.4;
/// Per neighbour, once a spread attempt happens.
pub const IGNITE_NEIGHBOUR_CHANCE: f64 = 0.5;
/// A fire must have burned longer than this before it can burn out.
pub const BURNOUT_AFTER_TURNS: u32 = 5;
pub const BURNOUT_CHANCE: f64 = 0.3;

/// Phase 6: fires damage their sector, spread vertically, and burn out.
///
/// Sectors are visited bottom to top, so a fire that spreads upward burns
/// its new sector in the same pass; one that spreads downward waits a turn.
pub struct FireSystem;

impl SimSystem for FireSystem {
    fn name(&self) -> &str {
        "fire"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        for level in ctx.world.levels() {
            let Some(sector) = ctx.world.sector_mut(level).filter(|s| s.on_fire) else {
                continue;
            };
            sector.fire_turns += 1;
            sector.health -= FIRE_DAMAGE;
            let fire_turns = sector.fire_turns;

            if fire_turns > SPREAD_AFTER_TURNS && roll(ctx.rng, SPREAD_CHANCE) {
                let neighbours = [level.checked_sub(1), level.checked_add(1)];
                for adjacent in neighbours.into_iter().flatten() {
                    let can_ignite = ctx
                        .world
                        .sector(adjacent)
                        .is_some_and(|s| !s.on_fire);
                    if can_ignite && roll(ctx.rng, IGNITE_NEIGHBOUR_CHANCE) {
                        if let Some(s) = ctx.world.sector_mut(adjacent) {
                            s.ignite();
                        }
                        ctx.world.log(
                            EventKind::FireSpread,
                            Tone::Danger,
                            format!("Fire spreads to Level {adjacent}!"),
                        );
                    }
                }
            }

            if fire_turns > BURNOUT_AFTER_TURNS && roll(ctx.rng, BURNOUT_CHANCE) {
                if let Some(s) = ctx.world.sector_mut(level) {
                    s.on_fire = false;
                }
                ctx.world.log(
                    EventKind::FireBurnout,
                    Tone::Warning,
                    format!("Fire on Level {level} burns out"),
                );
            }
        }
    }
}
