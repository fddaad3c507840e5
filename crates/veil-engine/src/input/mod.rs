//! Input subsystem.
//!
//! Public API is platform-agnostic; the winit adapter lives under `platform`.
//! Hosts either feed `InputEvent`s into an `InputState` or implement
//! `InputSource` directly over their own polling API.

mod edges;
mod source;
mod state;
mod types;

pub mod platform;

pub use edges::{ButtonEdge, ButtonEdges};
pub use source::InputSource;
pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
