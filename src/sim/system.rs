use super::context::TickContext;

/// One phase of the turn pipeline.
///
/// Object-safe so phases can be stored as `Box<dyn SimSystem>` and run in
/// registration order.
pub trait SimSystem {
    fn name(&self) -> &str;
    fn tick(&mut self, ctx: &mut TickContext);
}
