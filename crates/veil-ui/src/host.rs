use veil_engine::core::{EventBus, Resolution};
use veil_engine::input::InputSource;

use crate::render::Renderer;

/// Everything the UI engine needs from the embedding application.
///
/// One implementation per host integration; the engine borrows it for the
/// duration of each lifecycle call or event.
pub trait Host {
    fn event_bus(&mut self) -> &mut dyn EventBus;

    /// Current scaled resolution, queried once at init.
    fn resolution(&self) -> Resolution;

    /// Raw button/pointer state for this tick.
    fn input(&self) -> &dyn InputSource;

    fn renderer(&mut self) -> &mut dyn Renderer;
}
