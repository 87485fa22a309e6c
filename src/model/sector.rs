use serde::{Deserialize, Serialize};

/// Health at or below which a sector stops producing.
pub const FUNCTIONAL_HEALTH: f64 = 20.0;
/// Nominal maximum health; repairs clamp to it.
pub const MAX_HEALTH: f64 = 100.0;

const CRITICAL_HEALTH: f64 = 30.0;
const DAMAGED_HEALTH: f64 = 60.0;

/// The pooled resources a sector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Food,
    Power,
    Materials,
}

/// What a tower level is used for. An unbuilt level is simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SectorKind {
    Residential,
    Farm,
    Power,
    Industrial,
}

string_enum!(SectorKind {
    Residential => "residential",
    Farm => "farm",
    Power => "power",
    Industrial => "industrial",
});

/// Per-worker monthly output at full health, keyed by sector kind.
///
/// Residential levels house people but produce nothing.
const PRODUCTION_TABLE: [(SectorKind, Option<(Resource, f64)>); 4] = [
    (SectorKind::Residential, None),
    (SectorKind::Farm, Some((Resource::Food, 2.5))),
    (SectorKind::Power, Some((Resource::Power, 3.0))),
    (SectorKind::Industrial, Some((Resource::Materials, 2.0))),
];

impl SectorKind {
    /// Resource this kind yields and the per-worker rate, if any.
    pub fn output(self) -> Option<(Resource, f64)> {
        PRODUCTION_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .and_then(|(_, out)| *out)
    }

    /// Player-facing name used in log lines and dilemma text.
    pub fn label(self) -> &'static str {
        match self {
            SectorKind::Residential => "Housing",
            SectorKind::Farm => "Farms",
            SectorKind::Power => "Power",
            SectorKind::Industrial => "Industry",
        }
    }
}

/// Coarse damage state for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorCondition {
    Intact,
    Damaged,
    Critical,
    Burning,
    Destroyed,
}

/// One level of the tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub level: u32,
    pub kind: SectorKind,
    /// Nominally 0–100 but unbounded below; damage is never clamped.
    pub health: f64,
    pub workers: u32,
    pub on_fire: bool,
    pub fire_turns: u32,
}

impl Sector {
    pub fn new(level: u32, kind: SectorKind, workers: u32) -> Self {
        Self {
            level,
            kind,
            health: MAX_HEALTH,
            workers,
            on_fire: false,
            fire_turns: 0,
        }
    }

    pub fn is_functional(&self) -> bool {
        self.health > FUNCTIONAL_HEALTH && !self.on_fire
    }

    /// Destroyed sectors keep their slot in the tower.
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    pub fn ignite(&mut self) {
        self.on_fire = true;
        self.fire_turns = 0;
    }

    /// Monthly output of this sector, scaled by health. Zero unless functional.
    pub fn production(&self) -> Option<(Resource, f64)> {
        if !self.is_functional() {
            return None;
        }
        let efficiency = self.health / MAX_HEALTH;
        self.kind
            .output()
            .map(|(resource, rate)| (resource, f64::from(self.workers) * rate * efficiency))
    }

    pub fn condition(&self) -> SectorCondition {
        if self.is_destroyed() {
            SectorCondition::Destroyed
        } else if self.on_fire {
            SectorCondition::Burning
        } else if self.health < CRITICAL_HEALTH {
            SectorCondition::Critical
        } else if self.health < DAMAGED_HEALTH {
            SectorCondition::Damaged
        } else {
            SectorCondition::Intact
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_table_covers_every_kind() {
        for kind in SectorKind::ALL {
            assert!(PRODUCTION_TABLE.iter().any(|(k, _)| k == kind));
        }
        assert_eq!(SectorKind::Residential.output(), None);
        assert_eq!(SectorKind::Power.output(), Some((Resource::Power, 3.0)));
    }

    #[test]
    fn functional_requires_health_above_twenty_and_no_fire() {
        let mut s = Sector::new(1, SectorKind::Farm, 10);
        assert!(s.is_functional());
        s.health = 20.0;
        assert!(!s.is_functional());
        s.health = 20.5;
        s.ignite();
        assert!(!s.is_functional());
    }

    #[test]
    fn production_scales_with_health() {
        let mut s = Sector::new(1, SectorKind::Farm, 10);
        s.health = 50.0;
        let (resource, amount) = s.production().unwrap();
        assert_eq!(resource, Resource::Food);
        assert!((amount - 12.5).abs() < 1e-9);
    }

    #[test]
    fn condition_thresholds() {
        let mut s = Sector::new(1, SectorKind::Power, 5);
        assert_eq!(s.condition(), SectorCondition::Intact);
        s.health = 45.0;
        assert_eq!(s.condition(), SectorCondition::Damaged);
        s.health = 10.0;
        assert_eq!(s.condition(), SectorCondition::Critical);
        s.on_fire = true;
        assert_eq!(s.condition(), SectorCondition::Burning);
        s.health = -3.0;
        assert_eq!(s.condition(), SectorCondition::Destroyed);
    }

    #[test]
    fn kind_string_round_trip_rejects_unknown() {
        assert_eq!(
            SectorKind::try_from("industrial".to_string()),
            Ok(SectorKind::Industrial)
        );
        assert!(SectorKind::try_from("empty".to_string()).is_err());
    }
}
