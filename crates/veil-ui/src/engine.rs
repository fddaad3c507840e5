use std::fmt;

use anyhow::{Context, Result};
use veil_engine::core::{
    EventBus, EventKind, HandlerId, HostEvent, ListenerId, Resolution, Subscription,
};
use veil_engine::input::InputSource;

use crate::click::{ClickRouter, RoutedClick};
use crate::config::UiConfig;
use crate::context::{OverlayContext, RenderContext, WorldContexts};
use crate::host::Host;
use crate::hover;
use crate::render::Renderer;

/// Subscriptions every engine registers, in registration order.
const CORE_EVENTS: [EventKind; 4] = [
    EventKind::OverlayRender,
    EventKind::Tick,
    EventKind::Resize,
    EventKind::RenderPass,
];

/// Application callback registered through [`UiEngine::register_handler`].
pub type EventHandler = Box<dyn FnMut(&HostEvent)>;

struct AppHandler {
    id: HandlerId,
    kind: EventKind,
    callback: EventHandler,
}

impl fmt::Debug for AppHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppHandler")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// The per-frame driver and owner of all UI state.
///
/// Created by [`UiEngine::init`] and consumed by [`UiEngine::uninit`], so
/// teardown without init cannot be expressed. Hand every delivery made to
/// the engine's listener to [`UiEngine::dispatch`]; the engine's own
/// subscriptions carry [`HandlerId::PRIMARY`] and go to [`UiEngine::handle`].
///
/// Per frame the host is expected to deliver `Tick` (hover, edges, clicks)
/// before the render events.
#[derive(Debug)]
pub struct UiEngine {
    config: UiConfig,
    listener: ListenerId,
    subscriptions: Vec<Subscription>,
    overlay: OverlayContext,
    worlds: WorldContexts,
    router: ClickRouter,
    app_handlers: Vec<AppHandler>,
    next_handler: u32,
}

impl UiEngine {
    /// Subscribes to the host's events and sizes the overlay.
    ///
    /// On failure, any subscription already made is removed again.
    pub fn init<H: Host + ?Sized>(host: &mut H, config: UiConfig) -> Result<Self> {
        let bus = host.event_bus();
        let listener = bus.create_listener();

        let subscriptions = match register_core(bus, listener, config.handler_priority) {
            Ok(subs) => subs,
            Err(err) => {
                bus.unregister_all(listener);
                return Err(err);
            }
        };

        let mut engine = Self {
            config,
            listener,
            subscriptions,
            overlay: OverlayContext::default(),
            worlds: WorldContexts::new(),
            router: ClickRouter::new(),
            app_handlers: Vec::new(),
            next_handler: HandlerId::PRIMARY.0 + 1,
        };
        engine.update_resolution(host.resolution());

        log::debug!(
            "ui engine initialized (listener {:?}, overlay {:?})",
            listener,
            engine.overlay.size()
        );
        Ok(engine)
    }

    /// Removes every subscription made on the engine's listener, application
    /// handlers included, and drops all contexts.
    pub fn uninit<H: Host + ?Sized>(self, host: &mut H) {
        host.event_bus().unregister_all(self.listener);
        log::debug!(
            "ui engine torn down (listener {:?}, {} app handlers, {} world contexts dropped)",
            self.listener,
            self.app_handlers.len(),
            self.worlds.len()
        );
    }

    /// Subscribes an application handler on the engine's listener.
    ///
    /// Mods share this listener instead of creating their own, so `uninit`
    /// tears their handlers down with the engine's.
    pub fn register_handler<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        kind: EventKind,
        priority: i32,
        handler: impl FnMut(&HostEvent) + 'static,
    ) -> Result<HandlerId> {
        let id = HandlerId(self.next_handler);
        let sub = Subscription::for_handler(kind, priority, id);
        host.event_bus()
            .register(self.listener, sub)
            .with_context(|| format!("failed to register handler for {:?} events", kind))?;

        self.next_handler += 1;
        self.subscriptions.push(sub);
        self.app_handlers.push(AppHandler { id, kind, callback: Box::new(handler) });
        log::debug!("registered app handler {:?} for {:?} (priority {})", id, kind, priority);
        Ok(id)
    }

    /// Routes one delivery made to the engine's listener.
    ///
    /// `handler` is the tag of the subscription that matched; each
    /// subscription therefore runs exactly one piece of code.
    pub fn dispatch<H: Host + ?Sized>(&mut self, host: &mut H, handler: HandlerId, event: HostEvent) {
        if handler == HandlerId::PRIMARY {
            self.handle(host, event);
            return;
        }

        match self.app_handlers.iter_mut().find(|h| h.id == handler) {
            Some(app) if app.kind == event.kind() => (app.callback)(&event),
            Some(app) => log::warn!(
                "handler {:?} subscribed to {:?} was handed {:?}",
                handler,
                app.kind,
                event
            ),
            None => log::warn!("no handler {:?} on listener {:?}", handler, self.listener),
        }
    }

    /// Runs the engine's own behavior for one host event.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: HostEvent) {
        match event {
            HostEvent::OverlayRender => self.render_overlay(host.renderer()),
            HostEvent::Tick => {
                self.tick(host.input());
            }
            HostEvent::Resize(resolution) => self.update_resolution(resolution),
            HostEvent::RenderPass(pass) => self.render_world(pass, host.renderer()),
        }
    }

    /// Hover pass over the overlay, then edge detection and click routing.
    ///
    /// World contexts never take part.
    pub fn tick(&mut self, input: &dyn InputSource) -> Vec<RoutedClick> {
        let roots = self.overlay.roots_mut();
        hover::resolve(roots, input.pointer_position());
        self.router.tick(input, roots)
    }

    pub fn render_overlay(&mut self, renderer: &mut dyn Renderer) {
        self.overlay.transform_and_render(renderer);
    }

    /// Draws world contexts when `pass` is the configured world pass.
    pub fn render_world(&mut self, pass: u32, renderer: &mut dyn Renderer) {
        if pass != self.config.world_render_pass {
            return;
        }
        self.worlds.render_all(renderer);
    }

    /// Copies the host's scaled resolution into the overlay size.
    ///
    /// Degenerate sizes (a minimised window reports zero) are applied too.
    pub fn update_resolution(&mut self, resolution: Resolution) {
        if !resolution.is_valid() {
            log::warn!("host reported degenerate resolution {:?}", resolution);
        }
        self.overlay.apply_resolution(resolution);
        log::debug!("overlay resized to {:?}", self.overlay.size());
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn overlay(&self) -> &OverlayContext {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut OverlayContext {
        &mut self.overlay
    }

    pub fn worlds(&self) -> &WorldContexts {
        &self.worlds
    }

    pub fn worlds_mut(&mut self) -> &mut WorldContexts {
        &mut self.worlds
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }
}

fn register_core(bus: &mut dyn EventBus, listener: ListenerId, priority: i32) -> Result<Vec<Subscription>> {
    let mut subscriptions = Vec::with_capacity(CORE_EVENTS.len());
    for kind in CORE_EVENTS {
        let sub = Subscription::new(kind, priority);
        bus.register(listener, sub)
            .with_context(|| format!("failed to subscribe to {:?} events", kind))?;
        subscriptions.push(sub);
    }
    Ok(subscriptions)
}
