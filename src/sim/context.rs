use rand::RngCore;

use crate::model::{Action, World};

/// Context passed to each system on every turn.
///
/// Bundled so the `SimSystem` signature stays stable as phases grow.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut dyn RngCore,
    /// The action submitted for this turn. Only the action phase reads it.
    pub action: Action,
}
