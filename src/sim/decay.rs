use super::context::TickContext;
use super::helpers::roll;
use super::system::SimSystem;
use crate::model::{EventKind, Tone};

pub const BASE_DECAY: f64 = 1.5;
/// Levels above this decay twice as fast.
pub const WEAK_LEVEL_THRESHOLD: u32 = 8;
pub const CASCADE_CHANCE: f64 = 0.3;
pub const CASCADE_DAMAGE: f64 = 40.0;

/// Phase 7: structures wear down; dead sectors with people inside collapse.
pub struct DecaySystem;

pub fn decay_rate(level: u32) -> f64 {
    if level > WEAK_LEVEL_THRESHOLD {
        BASE_DECAY * 2.0
    } else {
        BASE_DECAY
    }
}

impl SimSystem for DecaySystem {
    fn name(&self) -> &str {
        "decay"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        for level in ctx.world.levels() {
            let Some(sector) = ctx.world.sector_mut(level) else {
                continue;
            };
            if sector.health > 0.0 {
                sector.health -= decay_rate(level);
            }
            if sector.health > 0.0 || sector.workers == 0 {
                continue;
            }

            let trapped = std::mem::take(&mut sector.workers);
            let lost = ctx.world.kill(trapped);
            ctx.world.log(
                EventKind::Collapse,
                Tone::Danger,
                format!("Level {level} COLLAPSES: {lost} lost"),
            );

            if roll(ctx.rng, CASCADE_CHANCE) {
                let Some(below) = level.checked_sub(1) else {
                    continue;
                };
                if let Some(s) = ctx.world.sector_mut(below) {
                    s.health -= CASCADE_DAMAGE;
                    ctx.world.log(
                        EventKind::CollapseDamage,
                        Tone::Warning,
                        format!("Collapse damages Level {below}!"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::testutil::{FixedRng, tick_system_with};

    #[test]
    fn upper_levels_decay_twice_as_fast() {
        let mut world = Scenario::new().max_height(12).extra_levels(2).build();
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_miss());
        assert_eq!(world.sector(8).unwrap().health, 98.5);
        assert_eq!(world.sector(9).unwrap().health, 97.0);
        assert_eq!(world.sector(10).unwrap().health, 97.0);
    }

    #[test]
    fn dead_sector_health_does_not_keep_falling() {
        let mut world = Scenario::new()
            .sector(2, |s| {
                s.health = -4.0;
                s.workers = 0;
            })
            .build();
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_miss());
        assert_eq!(world.sector(2).unwrap().health, -4.0);
    }

    #[test]
    fn collapse_kills_workers_and_cascades_down() {
        let mut world = Scenario::new()
            .population(85)
            .sector(4, |s| {
                s.health = 1.0;
                s.workers = 10;
            })
            .build();
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_hit());
        assert_eq!(world.population, 75);
        assert_eq!(world.sector(4).unwrap().workers, 0);
        // Level 3 decayed before level 4 collapsed onto it.
        assert_eq!(world.sector(3).unwrap().health, 100.0 - 1.5 - 40.0);
        assert_eq!(world.events.of_kind(EventKind::Collapse).count(), 1);
        assert_eq!(world.events.of_kind(EventKind::CollapseDamage).count(), 1);
    }

    #[test]
    fn ground_floor_collapse_has_nothing_below() {
        let mut world = Scenario::new()
            .sector(1, |s| s.health = 0.0)
            .build();
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_hit());
        assert_eq!(world.sector(1).unwrap().workers, 0);
        assert_eq!(world.events.of_kind(EventKind::CollapseDamage).count(), 0);
    }

    #[test]
    fn collapse_happens_once() {
        let mut world = Scenario::new()
            .sector(6, |s| s.health = 0.0)
            .build();
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_miss());
        let population = world.population;
        tick_system_with(&mut world, &mut DecaySystem, &mut FixedRng::always_miss());
        assert_eq!(world.population, population);
        assert_eq!(world.events.of_kind(EventKind::Collapse).count(), 1);
    }
}
