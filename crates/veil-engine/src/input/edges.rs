use super::types::MouseButton;

/// A pressed/released transition for one button.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ButtonEdge {
    pub button: MouseButton,
    /// New state: `true` on press, `false` on release.
    pub pressed: bool,
}

/// Last observed state per routed button.
///
/// Owned by the frame driver and updated once per tick; the stored state is
/// only history for edge detection.
#[derive(Debug, Default, Clone)]
pub struct ButtonEdges {
    last: [bool; MouseButton::ALL.len()],
}

impl ButtonEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current state of `button` and returns the edge, if any.
    ///
    /// The new state is stored unconditionally, so repeated calls with the same
    /// state are idempotent.
    pub fn update(&mut self, button: MouseButton, down: bool) -> Option<ButtonEdge> {
        let slot = &mut self.last[button.index()];
        let previous = *slot;
        *slot = down;

        (previous != down).then_some(ButtonEdge { button, pressed: down })
    }

    /// Last recorded state for `button`.
    #[inline]
    pub fn last_state(&self, button: MouseButton) -> bool {
        self.last[button.index()]
    }
}
