use rand::Rng;

use super::context::TickContext;
use super::system::SimSystem;
use crate::model::sector::MAX_HEALTH;
use crate::model::{Action, EventKind, SectorKind, Tone, World};

pub const REPAIR_COST: f64 = 40.0;
pub const REPAIR_AMOUNT: f64 = 50.0;
pub const EXTINGUISH_COST: f64 = 30.0;
pub const BUILD_COST: f64 = 80.0;
pub const FESTIVAL_FOOD_COST: f64 = 40.0;
pub const FESTIVAL_POWER_COST: f64 = 20.0;
pub const FESTIVAL_MORALE: f64 = 30.0;
pub const RATIONS_MIN_POPULATION: u32 = 30;
pub const RATIONS_CULLED: u32 = 10;
pub const RATIONS_FOOD: f64 = 60.0;
pub const RATIONS_MORALE: f64 = 20.0;

const NEW_SECTOR_WORKERS: (u32, u32) = (5, 10);

/// Phase 2: apply the submitted action.
///
/// Every action either succeeds and logs it, or logs a rejection and
/// leaves every pool and sector untouched.
pub struct ActionSystem;

impl SimSystem for ActionSystem {
    fn name(&self) -> &str {
        "actions"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let outcome = match ctx.action {
            Action::Wait | Action::Choose { .. } => return,
            Action::Repair { level } => repair(ctx.world, level),
            Action::Extinguish { level } => extinguish(ctx.world, level),
            Action::Build { kind } => {
                let workers = ctx
                    .rng
                    .random_range(NEW_SECTOR_WORKERS.0..=NEW_SECTOR_WORKERS.1);
                build(ctx.world, kind, workers)
            }
            Action::BoostMorale => boost_morale(ctx.world),
            Action::EmergencyRations => emergency_rations(ctx.world),
        };

        match outcome {
            Ok(message) => ctx.world.log(EventKind::ActionSucceeded, Tone::Good, message),
            Err(reason) => ctx.world.log(EventKind::ActionRejected, Tone::Danger, reason),
        }
    }
}

fn repair(world: &mut World, level: u32) -> Result<String, String> {
    if world.materials < REPAIR_COST {
        return Err(format!("Need {REPAIR_COST} materials"));
    }
    let Some(sector) = world.sector_mut(level) else {
        return Err(format!("No sector on Level {level} to repair"));
    };
    sector.health = (sector.health + REPAIR_AMOUNT).min(MAX_HEALTH);
    world.materials -= REPAIR_COST;
    Ok(format!("Level {level} repaired"))
}

fn extinguish(world: &mut World, level: u32) -> Result<String, String> {
    let power = world.power;
    let Some(sector) = world.sector_mut(level).filter(|s| s.on_fire) else {
        return Err(format!("No fire on Level {level}"));
    };
    if power < EXTINGUISH_COST {
        return Err(format!("Need {EXTINGUISH_COST} power to fight the fire"));
    }
    sector.on_fire = false;
    world.power -= EXTINGUISH_COST;
    Ok(format!("Fire on Level {level} extinguished"))
}

fn build(world: &mut World, kind: SectorKind, workers: u32) -> Result<String, String> {
    if world.is_full() {
        return Err("At maximum height".to_string());
    }
    if world.materials < BUILD_COST {
        return Err(format!("Need {BUILD_COST} materials to build"));
    }
    let level = world
        .push_sector(kind, workers)
        .ok_or_else(|| "No free level to build on".to_string())?;
    world.materials -= BUILD_COST;
    Ok(format!("{} built on Level {level}", kind.label()))
}

fn boost_morale(world: &mut World) -> Result<String, String> {
    if world.food < FESTIVAL_FOOD_COST || world.power < FESTIVAL_POWER_COST {
        return Err(format!(
            "Need {FESTIVAL_FOOD_COST} food + {FESTIVAL_POWER_COST} power"
        ));
    }
    world.food -= FESTIVAL_FOOD_COST;
    world.power -= FESTIVAL_POWER_COST;
    world.morale += FESTIVAL_MORALE;
    Ok("Festival held - morale boosted!".to_string())
}

fn emergency_rations(world: &mut World) -> Result<String, String> {
    if world.population <= RATIONS_MIN_POPULATION {
        return Err(format!(
            "Population too small for rations (need more than {RATIONS_MIN_POPULATION})"
        ));
    }
    world.kill(RATIONS_CULLED);
    world.food += RATIONS_FOOD;
    world.morale -= RATIONS_MORALE;
    Ok(format!("Culled {RATIONS_CULLED} citizens for emergency rations"))
}
