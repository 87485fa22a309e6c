//! Player actions and the result of submitting one.
//!
//! Drivers (UI loops, scripted players, agents) submit an `Action` per turn.
//! Targeted actions carry their level explicitly; the string-tag parser
//! fills it from the world's cursor.

use serde::{Deserialize, Serialize};

use super::sector::SectorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DilemmaChoice {
    A,
    B,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    #[default]
    Wait,
    Repair { level: u32 },
    Extinguish { level: u32 },
    Build { kind: SectorKind },
    BoostMorale,
    EmergencyRations,
    Choose { choice: DilemmaChoice },
}

impl Action {
    /// Parse a driver's action tag. Total: unrecognized tags are `Wait`.
    ///
    /// `cursor` is the target level for `repair` and `extinguish`.
    pub fn parse(tag: &str, cursor: u32) -> Self {
        match tag.trim() {
            "repair" => Action::Repair { level: cursor },
            "extinguish" => Action::Extinguish { level: cursor },
            "build_farm" => Action::Build {
                kind: SectorKind::Farm,
            },
            "build_power" => Action::Build {
                kind: SectorKind::Power,
            },
            "build_industry" => Action::Build {
                kind: SectorKind::Industrial,
            },
            "build_housing" => Action::Build {
                kind: SectorKind::Residential,
            },
            "boost_morale" => Action::BoostMorale,
            "emergency_rations" => Action::EmergencyRations,
            "dilemma_a" => Action::Choose {
                choice: DilemmaChoice::A,
            },
            "dilemma_b" => Action::Choose {
                choice: DilemmaChoice::B,
            },
            _ => Action::Wait,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Action::Wait => "wait",
            Action::Repair { .. } => "repair",
            Action::Extinguish { .. } => "extinguish",
            Action::Build { kind } => match kind {
                SectorKind::Farm => "build_farm",
                SectorKind::Power => "build_power",
                SectorKind::Industrial => "build_industry",
                SectorKind::Residential => "build_housing",
            },
            Action::BoostMorale => "boost_morale",
            Action::EmergencyRations => "emergency_rations",
            Action::Choose {
                choice: DilemmaChoice::A,
            } => "dilemma_a",
            Action::Choose {
                choice: DilemmaChoice::B,
            } => "dilemma_b",
        }
    }
}

/// What happened to a submitted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// The full turn pipeline ran.
    Advanced,
    /// A dilemma was resolved without advancing the clock.
    Resolved,
    /// Refused before touching any state.
    Rejected { reason: String },
    /// The world already reached a terminal state.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uses_cursor_for_targeted_actions() {
        assert_eq!(Action::parse("repair", 4), Action::Repair { level: 4 });
        assert_eq!(
            Action::parse("extinguish", 9),
            Action::Extinguish { level: 9 }
        );
    }

    #[test]
    fn unknown_tags_become_wait() {
        assert_eq!(Action::parse("launch_rockets", 1), Action::Wait);
        assert_eq!(Action::parse("", 1), Action::Wait);
    }

    #[test]
    fn tag_inverts_parse() {
        for tag in [
            "wait",
            "repair",
            "extinguish",
            "build_farm",
            "build_power",
            "build_industry",
            "build_housing",
            "boost_morale",
            "emergency_rations",
            "dilemma_a",
            "dilemma_b",
        ] {
            assert_eq!(Action::parse(tag, 3).tag(), tag);
        }
    }
}
