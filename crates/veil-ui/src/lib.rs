//! Veil UI — retained element trees with hover hit-testing and click routing.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_ui::prelude::*;
//!
//! let mut ui = UiEngine::init(&mut host, UiConfig::default())?;
//! ui.overlay_mut().add(
//!     Element::container(Rect::new(0.0, 0.0, 200.0, 120.0))
//!         .child(Element::leaf(Rect::new(20.0, 20.0, 80.0, 24.0))
//!             .on_click(|_, pressed, button| log::info!("{button} pressed={pressed}"))),
//! );
//!
//! // For every event the host delivers to the engine's listener:
//! ui.handle(&mut host, event);
//!
//! // On shutdown:
//! ui.uninit(&mut host);
//! ```
//!
//! # Frame order
//!
//! `Tick` resolves hover for the overlay tree, detects button edges and routes
//! each edge to at most one element. Render events then draw the overlay and,
//! on the configured pass, the world contexts; the renderer's culling verdicts
//! gate clicks on the following tick.

pub mod click;
pub mod config;
pub mod context;
pub mod element;
pub mod engine;
pub mod host;
pub mod hover;
pub mod render;

pub use engine::UiEngine;

/// Everything needed to embed the engine and build trees.
pub mod prelude {
    pub use crate::click::{ClickRouter, RoutedClick};
    pub use crate::config::UiConfig;
    pub use crate::context::{
        ContextTransform, OverlayContext, RenderContext, WorldContext, WorldContexts, WorldId,
        WorldPlacement,
    };
    pub use crate::element::{ClickHandler, Element};
    pub use crate::engine::{EventHandler, UiEngine};
    pub use crate::host::Host;
    pub use crate::hover::ElementPath;
    pub use crate::render::Renderer;

    pub use veil_engine::coords::{Rect, Vec2, Vec3};
    pub use veil_engine::core::{
        Delivery, EventBus, EventKind, HandlerId, HostEvent, ListenerId, LocalEventBus, Resolution,
    };
    pub use veil_engine::input::{InputSource, InputState, MouseButton};
}
