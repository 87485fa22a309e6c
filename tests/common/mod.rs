#![allow(dead_code)]

use std::collections::BTreeSet;

use spire_sim::model::World;
use spire_sim::scenario::Scenario;
use spire_sim::sim::Engine;
use spire_sim::testutil::FixedRng;

/// An engine where no random event ever fires and every range rolls high.
pub fn quiet_engine(scenario: Scenario) -> Engine {
    scenario.engine(FixedRng::always_miss())
}

/// An engine where every random event fires and every range rolls low.
pub fn eventful_engine(scenario: Scenario) -> Engine {
    scenario.engine(FixedRng::always_hit())
}

/// Invariants that must hold at every observation point.
pub fn assert_invariants(world: &World) {
    assert!((1..=12).contains(&world.month), "month out of range: {}", world.month);
    assert!(
        (1..=world.max_height).contains(&world.cursor),
        "cursor {} outside 1..={}",
        world.cursor,
        world.max_height
    );
    let levels: BTreeSet<u32> = world.sectors.iter().map(|s| s.level).collect();
    assert_eq!(levels.len(), world.sectors.len(), "duplicate sector levels");
    assert!(world.sectors.len() <= world.max_height as usize);
    assert!(
        world.sectors.windows(2).all(|w| w[0].level < w[1].level),
        "sectors not sorted by level"
    );
    assert!(world.events.len() <= world.events.capacity());
    if !world.alive {
        assert!(world.outcome.is_some());
        assert!(!world.victory_message.is_empty());
    }
}
