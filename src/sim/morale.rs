use rand::Rng;

use super::context::TickContext;
use super::system::SimSystem;
use crate::model::{EventKind, Tone};

/// Below this, people start leaving.
pub const FLIGHT_MORALE: f64 = 30.0;
pub const FLIGHT_RANGE: (u32, u32) = (3, 8);
/// Below this, morale drifts back up each month.
pub const RECOVERY_CEILING: f64 = 60.0;
pub const RECOVERY_RATE: f64 = 1.5;
pub const GROWTH_MIN_FOOD: f64 = 50.0;
pub const GROWTH_MIN_MORALE: f64 = 50.0;
/// Growth happens on months divisible by this.
pub const GROWTH_MONTH_INTERVAL: u32 = 3;
pub const GROWTH_RANGE: (u32, u32) = (2, 5);

/// Phase 8: flight, passive recovery, and quarterly growth.
pub struct MoraleSystem;

impl SimSystem for MoraleSystem {
    fn name(&self) -> &str {
        "morale"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let world = &mut *ctx.world;

        if world.morale < FLIGHT_MORALE {
            let fleeing = ctx.rng.random_range(FLIGHT_RANGE.0..=FLIGHT_RANGE.1);
            let fled = world.kill(fleeing);
            world.log(
                EventKind::Exodus,
                Tone::Warning,
                format!("{fled} citizens flee the Spire"),
            );
        }

        // Additive; may step past the ceiling.
        if world.morale < RECOVERY_CEILING {
            world.morale += RECOVERY_RATE;
        }

        if world.food > GROWTH_MIN_FOOD
            && world.morale > GROWTH_MIN_MORALE
            && world.month % GROWTH_MONTH_INTERVAL == 0
        {
            world.population += ctx.rng.random_range(GROWTH_RANGE.0..=GROWTH_RANGE.1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::testutil::{FixedRng, tick_system_with};

    #[test]
    fn low_morale_drives_people_away() {
        let mut world = Scenario::new().population(50).morale(20.0).build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_miss());
        assert_eq!(world.population, 42);
        assert_eq!(world.morale, 21.5);
        assert_eq!(world.events.of_kind(EventKind::Exodus).count(), 1);
    }

    #[test]
    fn recovery_is_plain_addition() {
        let mut world = Scenario::new().morale(59.5).month(1).build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_hit());
        assert_eq!(world.morale, 61.0);

        let mut world = Scenario::new().morale(60.0).build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_hit());
        assert_eq!(world.morale, 60.0);
    }

    #[test]
    fn growth_only_on_quarter_months() {
        let mut world = Scenario::new()
            .population(40)
            .food(80.0)
            .morale(70.0)
            .month(6)
            .build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_hit());
        assert_eq!(world.population, 42);

        let mut world = Scenario::new()
            .population(40)
            .food(80.0)
            .morale(70.0)
            .month(7)
            .build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_hit());
        assert_eq!(world.population, 40);
    }

    #[test]
    fn no_growth_when_hungry() {
        let mut world = Scenario::new()
            .population(40)
            .food(50.0)
            .morale(90.0)
            .month(3)
            .build();
        tick_system_with(&mut world, &mut MoraleSystem, &mut FixedRng::always_miss());
        assert_eq!(world.population, 40);
    }
}
