use crate::coords::Vec2;

use super::types::MouseButton;

/// Raw input queries the UI driver polls once per tick.
///
/// Implemented by [`InputState`](super::InputState) for event-fed hosts, or
/// directly by hosts that expose a polling API.
pub trait InputSource {
    /// Whether `button` is physically held right now.
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// Pointer position in overlay space.
    ///
    /// `None` when the pointer is outside the surface; nothing is hovered then.
    fn pointer_position(&self) -> Option<Vec2>;
}
