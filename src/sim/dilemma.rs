//! Two-choice dilemmas about a failing sector.

use rand::RngCore;

use super::helpers::{fraction_of, pick_level};
use crate::model::{Dilemma, DilemmaChoice, DilemmaEffect, EffectKind, EventKind, Tone, World};

/// Sectors strictly between these health values are at risk.
pub const AT_RISK_HEALTH: (f64, f64) = (20.0, 60.0);
pub const REINFORCE_HEALTH: f64 = 40.0;
pub const REINFORCE_COST: f64 = 50.0;
pub const EVACUATION_LOSS: f64 = 0.3;
pub const EVACUATION_MORALE: f64 = 15.0;

pub fn at_risk_levels(world: &World) -> Vec<u32> {
    world
        .sectors
        .iter()
        .filter(|s| s.health > AT_RISK_HEALTH.0 && s.health < AT_RISK_HEALTH.1)
        .map(|s| s.level)
        .collect()
}

/// Build a dilemma about one at-risk sector, or `None` if nothing is at risk.
pub fn generate(world: &World, rng: &mut dyn RngCore) -> Option<Dilemma> {
    let level = pick_level(rng, &at_risk_levels(world))?;
    let target = world.sector(level)?;
    Some(Dilemma {
        title: format!("Level {level} Critical"),
        description: format!(
            "{} sector failing! {} workers trapped.",
            target.kind.label(),
            target.workers
        ),
        option_a: format!("Reinforce (-{REINFORCE_COST} materials)"),
        option_b: "Evacuate (lose workers)".to_string(),
        effect_a: DilemmaEffect {
            kind: EffectKind::Reinforce,
            target_level: level,
        },
        effect_b: DilemmaEffect {
            kind: EffectKind::Evacuate,
            target_level: level,
        },
    })
}

/// Apply one resolution effect.
///
/// Reinforcing does not check the materials pool and does not cap health.
pub fn apply_effect(world: &mut World, effect: DilemmaEffect) {
    let level = effect.target_level;
    match effect.kind {
        EffectKind::Reinforce => {
            if let Some(sector) = world.sector_mut(level) {
                sector.health += REINFORCE_HEALTH;
            }
            world.materials -= REINFORCE_COST;
            world.log(
                EventKind::DilemmaResolved,
                Tone::Good,
                format!("Level {level} reinforced"),
            );
        }
        EffectKind::Evacuate => {
            let lost = world
                .sector_mut(level)
                .map(|sector| {
                    sector.health = 0.0;
                    fraction_of(std::mem::take(&mut sector.workers), EVACUATION_LOSS)
                })
                .unwrap_or(0);
            world.kill(lost);
            world.morale -= EVACUATION_MORALE;
            world.log(
                EventKind::DilemmaResolved,
                Tone::Warning,
                format!("Level {level} evacuated, some lost"),
            );
        }
    }
}

/// Apply the chosen option and clear the dilemma. Returns the applied effect,
/// or `None` if no dilemma was outstanding.
pub fn resolve(world: &mut World, choice: DilemmaChoice) -> Option<DilemmaEffect> {
    let dilemma = world.current_dilemma.take()?;
    let effect = dilemma.effect(choice);
    tracing::debug!(title = %dilemma.title, choice = dilemma.label(choice), "dilemma resolved");
    apply_effect(world, effect);
    Some(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::testutil::FixedRng;

    #[test]
    fn nothing_at_risk_means_no_dilemma() {
        let world = Scenario::new()
            .sector(2, |s| s.health = 60.0)
            .sector(3, |s| s.health = 20.0)
            .build();
        assert!(generate(&world, &mut FixedRng::always_hit()).is_none());
    }

    #[test]
    fn dilemma_targets_an_at_risk_sector() {
        let world = Scenario::new()
            .sector(4, |s| {
                s.health = 45.0;
                s.workers = 12;
            })
            .build();
        let dilemma = generate(&world, &mut FixedRng::always_hit()).unwrap();
        assert_eq!(dilemma.title, "Level 4 Critical");
        assert_eq!(dilemma.description, "Farms sector failing! 12 workers trapped.");
        assert_eq!(dilemma.option_a, "Reinforce (-50 materials)");
        assert_eq!(dilemma.effect_a.target_level, 4);
        assert_eq!(dilemma.effect_b.kind, EffectKind::Evacuate);
    }

    #[test]
    fn reinforce_can_overdraw_materials_and_overheal() {
        let mut world = Scenario::new()
            .materials(10.0)
            .sector(4, |s| s.health = 59.0)
            .build();
        apply_effect(
            &mut world,
            DilemmaEffect {
                kind: EffectKind::Reinforce,
                target_level: 4,
            },
        );
        assert_eq!(world.materials, -40.0);
        assert_eq!(world.sector(4).unwrap().health, 99.0);
        assert_eq!(world.events.last().unwrap().message, "Level 4 reinforced");
    }

    #[test]
    fn evacuate_loses_thirty_percent_and_the_sector() {
        let mut world = Scenario::new()
            .population(85)
            .morale(50.0)
            .sector(4, |s| {
                s.health = 45.0;
                s.workers = 12;
            })
            .build();
        apply_effect(
            &mut world,
            DilemmaEffect {
                kind: EffectKind::Evacuate,
                target_level: 4,
            },
        );
        let sector = world.sector(4).unwrap();
        assert_eq!(sector.workers, 0);
        assert_eq!(sector.health, 0.0);
        assert_eq!(world.population, 82);
        assert_eq!(world.morale, 35.0);
    }

    #[test]
    fn resolve_clears_the_dilemma_once() {
        let mut world = Scenario::new()
            .sector(4, |s| s.health = 45.0)
            .build();
        world.current_dilemma = generate(&world, &mut FixedRng::always_hit());
        let effect = resolve(&mut world, DilemmaChoice::A).unwrap();
        assert_eq!(effect.kind, EffectKind::Reinforce);
        assert!(world.current_dilemma.is_none());
        assert!(resolve(&mut world, DilemmaChoice::B).is_none());
        assert_eq!(world.sector(4).unwrap().health, 85.0);
    }
}
