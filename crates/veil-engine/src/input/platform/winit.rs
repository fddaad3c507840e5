use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's physical-to-logical ratio; cursor positions
/// are reported in logical units. Returns `None` for events the input subsystem
/// does not represent, including buttons outside the routed three.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => Some(translate_cursor_moved(scale_factor, *position)),

        WindowEvent::MouseInput { state, button, .. } => translate_mouse_input(*state, *button),

        _ => None,
    }
}

/// Translates a physical cursor position into a logical pointer move.
pub fn translate_cursor_moved(scale_factor: f64, position: PhysicalPosition<f64>) -> InputEvent {
    let (x, y) = to_logical_f32(scale_factor, position);
    InputEvent::PointerMoved(PointerMoveEvent { x, y })
}

/// Translates a button transition; `None` for buttons that are not routed.
pub fn translate_mouse_input(state: ElementState, button: WinitMouseButton) -> Option<InputEvent> {
    let button = map_mouse_button(button)?;
    let state = match state {
        ElementState::Pressed => MouseButtonState::Pressed,
        ElementState::Released => MouseButtonState::Released,
    };
    Some(InputEvent::PointerButton(PointerButtonEvent { button, state }))
}

/// Maps a winit button to a routed button; back/forward/other are not routed.
pub fn map_mouse_button(b: WinitMouseButton) -> Option<MouseButton> {
    match b {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Back | WinitMouseButton::Forward | WinitMouseButton::Other(_) => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_buttons_map_one_to_one() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), Some(MouseButton::Middle));
        assert_eq!(map_mouse_button(WinitMouseButton::Right), Some(MouseButton::Right));
    }

    #[test]
    fn extra_buttons_are_dropped() {
        assert_eq!(map_mouse_button(WinitMouseButton::Back), None);
        assert_eq!(map_mouse_button(WinitMouseButton::Forward), None);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), None);
    }

    #[test]
    fn focus_change_translates() {
        assert_eq!(
            translate_window_event(1.0, &WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
    }

    #[test]
    fn cursor_moves_are_reported_in_logical_units() {
        assert_eq!(
            translate_cursor_moved(2.0, PhysicalPosition::new(120.0, 40.0)),
            InputEvent::PointerMoved(PointerMoveEvent { x: 60.0, y: 20.0 })
        );
    }

    #[test]
    fn mouse_input_keeps_press_and_release() {
        assert_eq!(
            translate_mouse_input(ElementState::Pressed, WinitMouseButton::Right),
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
            }))
        );
        assert_eq!(
            translate_mouse_input(ElementState::Released, WinitMouseButton::Left),
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
            }))
        );
        assert_eq!(translate_mouse_input(ElementState::Pressed, WinitMouseButton::Back), None);
    }

    #[test]
    fn physical_positions_become_logical() {
        assert_eq!(to_logical_f32(2.0, PhysicalPosition::new(100.0, 50.0)), (50.0, 25.0));
    }
}
