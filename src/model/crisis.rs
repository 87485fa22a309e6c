use serde::{Deserialize, Serialize};

/// Major disasters, chosen uniformly when pacing forces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CrisisKind {
    Earthquake,
    Fire,
    Disease,
    StructuralFailure,
    Riot,
}

string_enum!(CrisisKind {
    Earthquake => "earthquake",
    Fire => "fire",
    Disease => "disease",
    StructuralFailure => "structural_failure",
    Riot => "riot",
});

/// Small windfalls. Always additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MinorEventKind {
    SupplyCache,
    Refugees,
    PowerSurge,
    Harvest,
}

string_enum!(MinorEventKind {
    SupplyCache => "supply_cache",
    Refugees => "refugees",
    PowerSurge => "power_surge",
    Harvest => "harvest",
});
