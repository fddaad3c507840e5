//! Platform adapters translating window-system events into `InputEvent`s.

mod winit;

pub use self::winit::{
    map_mouse_button, translate_cursor_moved, translate_mouse_input, translate_window_event,
};
