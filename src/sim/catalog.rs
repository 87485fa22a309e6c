//! Major crises and minor windfalls.
//!
//! Each generator mutates the world directly and logs one entry describing
//! what happened. Casualty counts in the log are what was actually removed
//! from the population.

use rand::{Rng, RngCore};

use super::helpers::{fraction_of, pick_level, sample_levels};
use crate::model::{CrisisKind, EventKind, MinorEventKind, Tone, World};

const EARTHQUAKE_LEVELS: (usize, usize) = (2, 5);
const EARTHQUAKE_DAMAGE: (u32, u32) = (20, 45);
const EARTHQUAKE_CASUALTIES_PER_LEVEL: (u32, u32) = (2, 6);
const EARTHQUAKE_MORALE: f64 = 20.0;

const PLAGUE_SHARE: (f64, f64) = (0.15, 0.30);
const PLAGUE_MORALE: f64 = 30.0;

const FAILURE_LEVELS: (usize, usize) = (1, 3);

const RIOT_DAMAGE: f64 = 30.0;
const RIOT_MORALE: f64 = 25.0;
const RIOT_CASUALTIES: (u32, u32) = (5, 15);

const SUPPLY_CACHE: (u32, u32) = (30, 60);
const REFUGEES: (u32, u32) = (5, 12);
const POWER_SURGE: (u32, u32) = (40, 80);
const HARVEST: (u32, u32) = (50, 100);

/// Pick a crisis uniformly and apply it.
pub fn trigger_crisis(world: &mut World, rng: &mut dyn RngCore) -> CrisisKind {
    let kind = CrisisKind::ALL[rng.random_range(0..CrisisKind::ALL.len())];
    tracing::info!(year = world.year, month = world.month, crisis = %kind, "major crisis");
    apply_crisis(world, rng, kind);
    kind
}

pub fn apply_crisis(world: &mut World, rng: &mut dyn RngCore, kind: CrisisKind) {
    match kind {
        CrisisKind::Earthquake => earthquake(world, rng),
        CrisisKind::Fire => fire_outbreak(world, rng),
        CrisisKind::Disease => disease(world, rng),
        CrisisKind::StructuralFailure => structural_failure(world, rng),
        CrisisKind::Riot => riot(world, rng),
    }
}

fn earthquake(world: &mut World, rng: &mut dyn RngCore) {
    let count = rng.random_range(EARTHQUAKE_LEVELS.0..=EARTHQUAKE_LEVELS.1);
    let hit = sample_levels(rng, &world.levels(), count);

    let mut casualties = 0;
    for &level in &hit {
        let damage = rng.random_range(EARTHQUAKE_DAMAGE.0..=EARTHQUAKE_DAMAGE.1);
        if let Some(sector) = world.sector_mut(level) {
            sector.health -= f64::from(damage);
        }
        casualties += rng.random_range(
            EARTHQUAKE_CASUALTIES_PER_LEVEL.0..=EARTHQUAKE_CASUALTIES_PER_LEVEL.1,
        );
    }
    let dead = world.kill(casualties);
    world.morale -= EARTHQUAKE_MORALE;
    world.log(
        EventKind::Crisis,
        Tone::Danger,
        format!("EARTHQUAKE! {} levels damaged, {dead} dead", hit.len()),
    );
}

fn fire_outbreak(world: &mut World, rng: &mut dyn RngCore) {
    let Some(level) = pick_level(rng, &world.levels()) else {
        return;
    };
    if let Some(sector) = world.sector_mut(level) {
        sector.ignite();
    }
    world.log(
        EventKind::Crisis,
        Tone::Danger,
        format!("MAJOR FIRE on Level {level}! Spreading fast!"),
    );
}

fn disease(world: &mut World, rng: &mut dyn RngCore) {
    let share = rng.random_range(PLAGUE_SHARE.0..=PLAGUE_SHARE.1);
    let dead = world.kill(fraction_of(world.population, share));
    world.morale -= PLAGUE_MORALE;
    world.log(
        EventKind::Crisis,
        Tone::Danger,
        format!("PLAGUE OUTBREAK: {dead} dead in days"),
    );
}

fn structural_failure(world: &mut World, rng: &mut dyn RngCore) {
    let count = rng.random_range(FAILURE_LEVELS.0..=FAILURE_LEVELS.1);
    let targets = sample_levels(rng, &world.levels(), count);

    let mut casualties = 0;
    for &level in &targets {
        if let Some(sector) = world.sector_mut(level) {
            casualties += std::mem::take(&mut sector.workers);
            sector.health = 0.0;
        }
    }
    let lost = world.kill(casualties);
    world.log(
        EventKind::Crisis,
        Tone::Danger,
        format!(
            "STRUCTURAL FAILURE: {} levels collapse, {lost} lost",
            targets.len()
        ),
    );
}

fn riot(world: &mut World, rng: &mut dyn RngCore) {
    let Some(level) = pick_level(rng, &world.levels()) else {
        return;
    };
    if let Some(sector) = world.sector_mut(level) {
        sector.health -= RIOT_DAMAGE;
    }
    world.morale -= RIOT_MORALE;
    let dead = world.kill(rng.random_range(RIOT_CASUALTIES.0..=RIOT_CASUALTIES.1));
    world.log(
        EventKind::Crisis,
        Tone::Danger,
        format!("RIOTS on Level {level}: {dead} casualties"),
    );
}

/// Pick a windfall uniformly and apply it.
pub fn trigger_minor_event(world: &mut World, rng: &mut dyn RngCore) -> MinorEventKind {
    let kind = MinorEventKind::ALL[rng.random_range(0..MinorEventKind::ALL.len())];
    apply_minor_event(world, rng, kind);
    kind
}

pub fn apply_minor_event(world: &mut World, rng: &mut dyn RngCore, kind: MinorEventKind) {
    let message = match kind {
        MinorEventKind::SupplyCache => {
            world.materials += f64::from(rng.random_range(SUPPLY_CACHE.0..=SUPPLY_CACHE.1));
            "Supply cache discovered"
        }
        MinorEventKind::Refugees => {
            world.population += rng.random_range(REFUGEES.0..=REFUGEES.1);
            "Refugee group arrives"
        }
        MinorEventKind::PowerSurge => {
            world.power += f64::from(rng.random_range(POWER_SURGE.0..=POWER_SURGE.1));
            "Power surge"
        }
        MinorEventKind::Harvest => {
            world.food += f64::from(rng.random_range(HARVEST.0..=HARVEST.1));
            "Abundant harvest"
        }
    };
    world.log(EventKind::MinorEvent, Tone::Good, message);
}
