use super::catalog::{trigger_crisis, trigger_minor_event};
use super::context::TickContext;
use super::dilemma;
use super::helpers::roll;
use super::system::SimSystem;

pub const TENSION_PER_TURN: f64 = 2.5;
pub const TENSION_LIMIT: f64 = 100.0;
/// After this many quiet turns a crisis may fire early.
pub const QUIET_TURNS: u32 = 8;
pub const EARLY_CRISIS_CHANCE: f64 = 0.4;
pub const MINOR_EVENT_CHANCE: f64 = 0.15;
pub const DILEMMA_CHANCE: f64 = 0.12;

/// Phase 9: build tension and fire crises, windfalls, and dilemmas.
pub struct PacingSystem;

impl SimSystem for PacingSystem {
    fn name(&self) -> &str {
        "pacing"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        ctx.world.tension += TENSION_PER_TURN;

        let forced = ctx.world.tension > TENSION_LIMIT;
        if forced
            || (ctx.world.turns_since_crisis > QUIET_TURNS && roll(ctx.rng, EARLY_CRISIS_CHANCE))
        {
            trigger_crisis(ctx.world, ctx.rng);
            ctx.world.tension = 0.0;
            ctx.world.turns_since_crisis = 0;
        }

        if roll(ctx.rng, MINOR_EVENT_CHANCE) {
            trigger_minor_event(ctx.world, ctx.rng);
        }

        if ctx.world.current_dilemma.is_none() && roll(ctx.rng, DILEMMA_CHANCE) {
            ctx.world.current_dilemma = dilemma::generate(ctx.world, ctx.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::model::EventKind;
    use crate::scenario::Scenario;
    use crate::testutil::{FixedRng, tick_system_with};

    #[test]
    fn tension_accumulates_quietly() {
        let mut world = Scenario::new().tension(10.0).build();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_miss());
        assert_eq!(world.tension, 12.5);
        assert_eq!(world.events.of_kind(EventKind::Crisis).count(), 0);
        assert!(world.current_dilemma.is_none());
    }

    #[test]
    fn tension_over_limit_forces_a_crisis() {
        let mut world = Scenario::new().tension(98.0).turns_since_crisis(3).build();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_miss());
        assert_eq!(world.tension, 0.0);
        assert_eq!(world.turns_since_crisis, 0);
        assert_eq!(world.events.of_kind(EventKind::Crisis).count(), 1);
    }

    #[test]
    fn quiet_spell_can_end_early() {
        let mut world = Scenario::new().tension(0.0).turns_since_crisis(9).build();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_hit());
        assert_eq!(world.tension, 0.0);
        assert_eq!(world.events.of_kind(EventKind::Crisis).count(), 1);

        let mut world = Scenario::new().tension(0.0).turns_since_crisis(8).build();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_hit());
        assert_eq!(world.tension, 2.5);
        assert_eq!(world.events.of_kind(EventKind::Crisis).count(), 0);
    }

    /// Counts words drawn from an inner source.
    struct CountingRng {
        inner: FixedRng,
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst);
        }
    }

    fn draws_for_forced_crisis(turns_since_crisis: u32) -> usize {
        let mut world = Scenario::new()
            .tension(99.0)
            .turns_since_crisis(turns_since_crisis)
            .build();
        let mut rng = CountingRng {
            inner: FixedRng::always_miss(),
            draws: 0,
        };
        tick_system_with(&mut world, &mut PacingSystem, &mut rng);
        assert_eq!(world.events.of_kind(EventKind::Crisis).count(), 1);
        rng.draws
    }

    #[test]
    fn forced_crisis_skips_the_early_crisis_roll() {
        assert_eq!(draws_for_forced_crisis(12), draws_for_forced_crisis(0));
    }

    #[test]
    fn lucky_turn_brings_windfall_and_dilemma() {
        let mut world = Scenario::new().sector(6, |s| s.health = 40.0).build();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_hit());
        assert_eq!(world.events.of_kind(EventKind::MinorEvent).count(), 1);
        let dilemma = world.current_dilemma.as_ref().unwrap();
        assert_eq!(dilemma.effect_a.target_level, 6);
    }

    #[test]
    fn outstanding_dilemma_is_not_replaced() {
        let mut world = Scenario::new()
            .sector(6, |s| s.health = 40.0)
            .sector(2, |s| s.health = 30.0)
            .build();
        world.current_dilemma = dilemma::generate(&world, &mut FixedRng::always_miss());
        let before = world.current_dilemma.clone();
        tick_system_with(&mut world, &mut PacingSystem, &mut FixedRng::always_hit());
        assert_eq!(world.current_dilemma, before);
    }
}
