//! Helpers for driving single systems and scripted games in tests.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::model::*;
use crate::sim::{ActionSystem, Driver, SimSystem, TickContext};

/// A random source that returns the same word forever.
///
/// With `always_hit` every probability roll succeeds and every range yields
/// its low end; with `always_miss` every roll fails and every range yields
/// its high end.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng {
    word: u64,
}

impl FixedRng {
    pub fn always_hit() -> Self {
        Self { word: 0 }
    }

    pub fn always_miss() -> Self {
        Self { word: u64::MAX }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.word as u8);
    }
}

// ---------------------------------------------------------------------------
// Tick execution helpers
// ---------------------------------------------------------------------------

/// Run one system for one turn with a seeded RNG and a `wait` action.
pub fn tick_system(world: &mut World, system: &mut dyn SimSystem, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    tick_system_with(world, system, &mut rng);
}

/// Run one system for one turn with the given RNG and a `wait` action.
pub fn tick_system_with(world: &mut World, system: &mut dyn SimSystem, rng: &mut dyn RngCore) {
    let mut ctx = TickContext {
        world,
        rng,
        action: Action::Wait,
    };
    system.tick(&mut ctx);
}

/// Resolve one action in isolation, without the rest of the turn.
pub fn tick_action(world: &mut World, action: Action, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ctx = TickContext {
        world,
        rng: &mut rng,
        action,
    };
    ActionSystem.tick(&mut ctx);
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

const ACTION_TAGS: [&str; 9] = [
    "wait",
    "repair",
    "extinguish",
    "build_farm",
    "build_power",
    "build_industry",
    "build_housing",
    "boost_morale",
    "emergency_rations",
];

/// Submits uniformly random actions at random levels and answers dilemmas
/// with a coin flip. Exists to fuzz the engine, not to play well.
pub struct RandomDriver {
    rng: SmallRng,
}

impl RandomDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Driver for RandomDriver {
    fn choose_action(&mut self, world: &World) -> Action {
        if world.current_dilemma.is_some() {
            let choice = if self.rng.random_bool(0.5) {
                DilemmaChoice::A
            } else {
                DilemmaChoice::B
            };
            return Action::Choose { choice };
        }
        let tag = ACTION_TAGS[self.rng.random_range(0..ACTION_TAGS.len())];
        let level = self.rng.random_range(1..=world.max_height);
        Action::parse(tag, level)
    }
}
