/// Scaled screen resolution reported by the host.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Resolution {
    pub scaled_width: f64,
    pub scaled_height: f64,
}

impl Resolution {
    #[inline]
    pub const fn new(scaled_width: f64, scaled_height: f64) -> Self {
        Self { scaled_width, scaled_height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.scaled_width > 0.0
            && self.scaled_height > 0.0
            && self.scaled_width.is_finite()
            && self.scaled_height.is_finite()
    }
}

/// Kinds of host notifications a listener can subscribe to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// Screen-space overlay is being drawn.
    OverlayRender,
    /// Once-per-frame update tick.
    Tick,
    /// Window or GUI scale changed.
    Resize,
    /// A world render pass is running.
    RenderPass,
}

/// A host notification with its payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostEvent {
    OverlayRender,
    Tick,
    Resize(Resolution),
    /// Render pass identifier as numbered by the host.
    RenderPass(u32),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::OverlayRender => EventKind::OverlayRender,
            HostEvent::Tick => EventKind::Tick,
            HostEvent::Resize(_) => EventKind::Resize,
            HostEvent::RenderPass(_) => EventKind::RenderPass,
        }
    }
}
