use super::context::TickContext;
use super::system::SimSystem;

/// Phase 1: one month passes.
pub struct ClockSystem;

impl SimSystem for ClockSystem {
    fn name(&self) -> &str {
        "clock"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        ctx.world.advance_clock();
        ctx.world.turns_since_crisis += 1;
    }
}
