use serde::{Deserialize, Serialize};

use super::action::DilemmaChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Shore the sector up at the cost of materials.
    Reinforce,
    /// Abandon the sector; some of its workers do not make it out.
    Evacuate,
}

/// A resolution effect, interpreted by `sim::dilemma::apply_effect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilemmaEffect {
    pub kind: EffectKind,
    pub target_level: u32,
}

/// A blocking two-choice event tied to one at-risk sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dilemma {
    pub title: String,
    pub description: String,
    pub option_a: String,
    pub option_b: String,
    pub effect_a: DilemmaEffect,
    pub effect_b: DilemmaEffect,
}

impl Dilemma {
    pub fn effect(&self, choice: DilemmaChoice) -> DilemmaEffect {
        match choice {
            DilemmaChoice::A => self.effect_a,
            DilemmaChoice::B => self.effect_b,
        }
    }

    pub fn label(&self, choice: DilemmaChoice) -> &str {
        match choice {
            DilemmaChoice::A => &self.option_a,
            DilemmaChoice::B => &self.option_b,
        }
    }
}
