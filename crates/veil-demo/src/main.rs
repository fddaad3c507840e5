use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use veil_engine::input::platform::{translate_cursor_moved, translate_mouse_input, translate_window_event};
use veil_engine::input::InputEvent;
use veil_engine::logging::{init_logging, LoggingConfig};
use veil_ui::prelude::*;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Renderer that logs what it would draw and culls nothing.
#[derive(Default)]
struct LogRenderer {
    drawn: usize,
}

impl Renderer for LogRenderer {
    fn begin_context(&mut self, transform: &ContextTransform) {
        log::debug!("begin {:?}", transform);
    }

    fn draw(&mut self, element: &Element, depth: usize) -> bool {
        self.drawn += 1;
        log::debug!("{:indent$}draw {:?}", "", element.bounds(), indent = depth * 2);
        true
    }

    fn end_context(&mut self) {}
}

/// Host that replays a fixed script of window events.
struct ScriptedHost {
    bus: LocalEventBus,
    input: InputState,
    renderer: LogRenderer,
    resolution: Resolution,
    scale_factor: f64,
}

impl Host for ScriptedHost {
    fn event_bus(&mut self) -> &mut dyn EventBus {
        &mut self.bus
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn input(&self) -> &dyn InputSource {
        &self.input
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.renderer
    }
}

impl ScriptedHost {
    /// Delivers `event` once per matching subscription, in priority order.
    fn fire(&mut self, ui: &mut UiEngine, event: HostEvent) {
        for delivery in self.bus.deliveries(event.kind()) {
            if delivery.listener == ui.listener() {
                ui.dispatch(self, delivery.handler, event);
            }
        }
    }

    fn feed(&mut self, event: Option<InputEvent>) {
        if let Some(event) = event {
            self.input.apply_event(&event);
        }
    }

    /// Moves the cursor to a physical position, sets the left button, then
    /// runs one frame.
    fn frame(&mut self, ui: &mut UiEngine, cursor: (f64, f64), left: ElementState) {
        self.feed(Some(translate_cursor_moved(
            self.scale_factor,
            PhysicalPosition::new(cursor.0, cursor.1),
        )));
        self.feed(translate_mouse_input(left, WinitMouseButton::Left));

        self.fire(ui, HostEvent::Tick);
        self.fire(ui, HostEvent::OverlayRender);
        self.fire(ui, HostEvent::RenderPass(0));
        self.fire(ui, HostEvent::RenderPass(2));
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut host = ScriptedHost {
        bus: LocalEventBus::new(),
        input: InputState::new(),
        renderer: LogRenderer::default(),
        resolution: Resolution::new(427.0, 240.0),
        scale_factor: 1.5,
    };
    let focus = translate_window_event(host.scale_factor, &WindowEvent::Focused(true));
    host.feed(focus);

    let mut ui = UiEngine::init(&mut host, UiConfig::default())?;

    let ticks = Rc::new(Cell::new(0u32));
    let tick_sink = ticks.clone();
    ui.register_handler(&mut host, EventKind::Tick, 0, move |_| tick_sink.set(tick_sink.get() + 1))?;

    let panel_clicks = Rc::new(Cell::new(0u32));
    let button_clicks = Rc::new(Cell::new(0u32));

    let panel_sink = panel_clicks.clone();
    let button_sink = button_clicks.clone();
    ui.overlay_mut().add(
        Element::container(Rect::new(10.0, 10.0, 200.0, 100.0))
            .on_click(move |_, pressed, button| {
                panel_sink.set(panel_sink.get() + 1);
                log::info!("panel: {button} pressed={pressed}");
            })
            .child(
                Element::leaf(Rect::new(20.0, 20.0, 80.0, 24.0)).on_click(move |el, pressed, button| {
                    button_sink.set(button_sink.get() + 1);
                    log::info!("button at {:?}: {button} pressed={pressed}", el.bounds().origin);
                }),
            ),
    );

    let placement = WorldPlacement::at(Vec3::new(0.0, 72.0, 0.0))
        .rotated(Vec3::new(0.0, 180.0, 0.0))
        .scaled(0.0625);
    let label = ui.worlds_mut().add(WorldContext::new(placement));
    if let Some(world) = ui.worlds_mut().get_mut(label) {
        world.add(Element::leaf(Rect::new(-16.0, 0.0, 32.0, 8.0)));
    }
    for (id, world) in ui.worlds().iter() {
        log::info!("world {:?} at {:?} with {} roots", id, world.placement().origin, world.roots().len());
    }

    // Press and release on the button, hold over the panel, then resize.
    // Cursor positions are physical pixels at a 1.5 scale factor.
    host.frame(&mut ui, (45.0, 45.0), ElementState::Pressed);
    host.frame(&mut ui, (45.0, 45.0), ElementState::Pressed);
    host.frame(&mut ui, (45.0, 45.0), ElementState::Released);
    host.frame(&mut ui, (225.0, 120.0), ElementState::Pressed);
    host.frame(&mut ui, (600.0, 300.0), ElementState::Released);

    host.fire(&mut ui, HostEvent::Resize(Resolution::new(640.0, 360.0)));

    // Respawn: the host empties the world contexts.
    ui.worlds_mut().clear();
    host.frame(&mut ui, (0.0, 0.0), ElementState::Released);

    log::info!(
        "ticks: {}, button clicks: {}, panel clicks: {}, elements drawn: {}, overlay size: {:?}",
        ticks.get(),
        button_clicks.get(),
        panel_clicks.get(),
        host.renderer.drawn,
        ui.overlay().size()
    );

    ui.uninit(&mut host);
    log::info!("subscriptions left on bus: {}", host.bus.len());
    Ok(())
}
