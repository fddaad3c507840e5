use crate::coords::Vec2;

use super::source::InputSource;
use super::types::{InputEvent, MouseButton, PointerButtonEvent, PointerMoveEvent};

/// Current pointer state for a single window.
///
/// Holds "is down" information and the current pointer position. Feed it
/// `InputEvent`s as they arrive; the UI driver polls it once per tick through
/// [`InputSource`].
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in overlay units.
    pub pointer_pos: Option<Vec2>,

    /// Held state per routed button.
    pub buttons_down: [bool; MouseButton::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press never delivers the release.
                    self.buttons_down = Default::default();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => {
                self.buttons_down[button.index()] = state.is_pressed();
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down[btn.index()]
    }
}

impl InputSource for InputState {
    fn is_button_down(&self, button: MouseButton) -> bool {
        self.button_down(button)
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer_pos
    }
}
