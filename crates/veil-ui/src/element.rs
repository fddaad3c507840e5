use std::fmt;

use veil_engine::coords::Rect;
use veil_engine::input::MouseButton;

/// Click callback: `(element, new_pressed_state, button)`.
///
/// Runs for both the press and the release edge of a button.
pub type ClickHandler = Box<dyn FnMut(&mut Element, bool, MouseButton)>;

// ── ElementKind ───────────────────────────────────────────────────────────

/// The closed set of element shapes.
enum ElementKind {
    /// Visual with no children.
    Leaf,
    /// Owns an ordered child sequence. Order is traversal order: later
    /// children are on top of earlier ones.
    Container(Vec<Element>),
}

// ── Element ───────────────────────────────────────────────────────────────

/// A node of the retained UI tree.
///
/// `bounds` are absolute in the owning context's space; resolving ancestor
/// offsets into them is the caller's job before each frame's hover pass.
///
/// # Example
/// ```rust,ignore
/// let panel = Element::container(Rect::new(0.0, 0.0, 200.0, 100.0))
///     .child(Element::leaf(Rect::new(10.0, 10.0, 80.0, 20.0))
///         .on_click(|el, pressed, button| log::info!("{button} {pressed} at {:?}", el.bounds())));
/// ```
pub struct Element {
    bounds: Rect,
    enabled: bool,
    hovered: bool,
    passed_hover_culling: bool,
    on_click: Option<ClickHandler>,
    /// Set when the handler slot is written; lets a running handler replace
    /// or clear itself.
    handler_changed: bool,
    kind: ElementKind,
}

impl Element {
    fn with_kind(bounds: Rect, kind: ElementKind) -> Self {
        Self {
            bounds,
            enabled: true,
            hovered: false,
            passed_hover_culling: true,
            on_click: None,
            handler_changed: false,
            kind,
        }
    }

    pub fn leaf(bounds: Rect) -> Self {
        Self::with_kind(bounds, ElementKind::Leaf)
    }

    pub fn container(bounds: Rect) -> Self {
        Self::with_kind(bounds, ElementKind::Container(Vec::new()))
    }

    /// Appends `child` (builder form).
    ///
    /// Leaves cannot own children; the child is dropped with a warning.
    pub fn child(mut self, child: Element) -> Self {
        if let Err(dropped) = self.push_child(child) {
            log::warn!("dropping child {:?}: parent is a leaf", dropped.bounds);
        }
        self
    }

    /// Installs the click handler (builder form).
    pub fn on_click(mut self, f: impl FnMut(&mut Element, bool, MouseButton) + 'static) -> Self {
        self.set_on_click(f);
        self
    }

    /// Sets the hover-culling result (builder form).
    pub fn hover_culling(mut self, passed: bool) -> Self {
        self.passed_hover_culling = passed;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    // ── state ─────────────────────────────────────────────────────────────

    /// Whether the pointer was inside `bounds` at the last hover pass.
    ///
    /// Only meaningful for the frame that pass ran in.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn passed_hover_culling(&self) -> bool {
        self.passed_hover_culling
    }

    /// Normally written by the render walk from the renderer's verdict.
    #[inline]
    pub fn set_passed_hover_culling(&mut self, passed: bool) {
        self.passed_hover_culling = passed;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ── click handler ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn set_on_click(&mut self, f: impl FnMut(&mut Element, bool, MouseButton) + 'static) {
        self.on_click = Some(Box::new(f));
        self.handler_changed = true;
    }

    pub fn clear_on_click(&mut self) {
        self.on_click = None;
        self.handler_changed = true;
    }

    /// Invokes the click handler, if any. Returns whether one ran.
    pub(crate) fn fire_click(&mut self, pressed: bool, button: MouseButton) -> bool {
        let Some(mut handler) = self.on_click.take() else {
            return false;
        };

        self.handler_changed = false;
        handler(self, pressed, button);
        if !self.handler_changed {
            self.on_click = Some(handler);
        }
        true
    }

    // ── children ──────────────────────────────────────────────────────────

    /// Child sequence; `None` for leaves.
    pub fn children(&self) -> Option<&[Element]> {
        match &self.kind {
            ElementKind::Container(children) => Some(children),
            ElementKind::Leaf => None,
        }
    }

    /// Mutable child sequence; `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.kind {
            ElementKind::Container(children) => Some(children),
            ElementKind::Leaf => None,
        }
    }

    /// Appends `child` and returns its index, or hands it back for leaves.
    pub fn push_child(&mut self, child: Element) -> Result<usize, Element> {
        match self.children_mut() {
            Some(children) => {
                children.push(child);
                Ok(children.len() - 1)
            }
            None => Err(child),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Element");
        s.field("bounds", &self.bounds)
            .field("enabled", &self.enabled)
            .field("hovered", &self.hovered)
            .field("passed_hover_culling", &self.passed_hover_culling)
            .field("clickable", &self.is_clickable());
        if let Some(children) = self.children() {
            s.field("children", &children);
        }
        s.finish()
    }
}

/// Resolves a root-relative index path to an element.
pub fn element_at<'a>(roots: &'a [Element], path: &[usize]) -> Option<&'a Element> {
    let (&first, rest) = path.split_first()?;
    let mut current = roots.get(first)?;
    for &i in rest {
        current = current.children()?.get(i)?;
    }
    Some(current)
}

/// Mutable form of [`element_at`].
pub fn element_at_mut<'a>(roots: &'a mut [Element], path: &[usize]) -> Option<&'a mut Element> {
    let (&first, rest) = path.split_first()?;
    let mut current = roots.get_mut(first)?;
    for &i in rest {
        current = current.children_mut()?.get_mut(i)?;
    }
    Some(current)
}
