use super::context::TickContext;
use super::system::SimSystem;
use crate::model::{Resource, World};

pub const POWER_PER_CAPITA: f64 = 0.6;
pub const FOOD_PER_CAPITA: f64 = 1.0;

/// Phase 3: functional sectors add their output to the pools.
pub struct ProductionSystem;

impl SimSystem for ProductionSystem {
    fn name(&self) -> &str {
        "production"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let (food, power, materials) = monthly_output(ctx.world);
        ctx.world.food += food;
        ctx.world.power += power;
        ctx.world.materials += materials;
    }
}

/// Total `(food, power, materials)` the tower would produce this month.
pub fn monthly_output(world: &World) -> (f64, f64, f64) {
    let mut totals = (0.0, 0.0, 0.0);
    for (resource, amount) in world.sectors.iter().filter_map(|s| s.production()) {
        match resource {
            Resource::Food => totals.0 += amount,
            Resource::Power => totals.1 += amount,
            Resource::Materials => totals.2 += amount,
        }
    }
    totals
}

/// Phase 4: the population eats and draws power. Pools may go negative here.
pub struct ConsumptionSystem;

impl SimSystem for ConsumptionSystem {
    fn name(&self) -> &str {
        "consumption"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let population = f64::from(ctx.world.population);
        ctx.world.power -= population * POWER_PER_CAPITA;
        ctx.world.food -= population * FOOD_PER_CAPITA;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::testutil::tick_system;

    #[test]
    fn output_by_kind_scaled_by_health() {
        // Level 1 power (10 workers), level 2 industry, level 4 farm at half health.
        let world = Scenario::new()
            .only_levels(&[1, 2, 4])
            .sector(4, |s| s.health = 50.0)
            .build();
        let (food, power, materials) = monthly_output(&world);
        assert!((food - 12.5).abs() < 1e-9);
        assert!((power - 30.0).abs() < 1e-9);
        assert!((materials - 20.0).abs() < 1e-9);
    }

    #[test]
    fn burning_and_broken_sectors_produce_nothing() {
        let world = Scenario::new()
            .only_levels(&[1, 7])
            .sector(1, |s| s.ignite())
            .sector(7, |s| s.health = 20.0)
            .build();
        assert_eq!(monthly_output(&world), (0.0, 0.0, 0.0));
    }

    #[test]
    fn residential_produces_nothing() {
        let world = Scenario::new().only_levels(&[3, 5, 8]).build();
        assert_eq!(monthly_output(&world), (0.0, 0.0, 0.0));
    }

    #[test]
    fn consumption_can_go_negative() {
        let mut world = Scenario::new().population(100).food(10.0).power(10.0).build();
        tick_system(&mut world, &mut ConsumptionSystem, 1);
        assert!((world.food - -90.0).abs() < 1e-9);
        assert!((world.power - -50.0).abs() < 1e-9);
    }
}
