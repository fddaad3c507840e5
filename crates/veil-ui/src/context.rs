//! Render contexts: owners of root element sequences.

use veil_engine::coords::Vec3;
use veil_engine::core::Resolution;

use crate::element::Element;
use crate::render::{render_tree, Renderer};

// ── transforms ────────────────────────────────────────────────────────────

/// World-space placement of a world context.
///
/// Rotation is Euler angles in degrees; the renderer owns the matrix math.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPlacement {
    pub origin: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl WorldPlacement {
    pub const fn at(origin: Vec3) -> Self {
        Self {
            origin,
            rotation: Vec3::zero(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }
}

impl Default for WorldPlacement {
    fn default() -> Self {
        Self::at(Vec3::zero())
    }
}

/// Transform a context asks the renderer to apply before drawing its roots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ContextTransform {
    Overlay { size: Vec3 },
    World { size: Vec3, placement: WorldPlacement },
}

// ── RenderContext ─────────────────────────────────────────────────────────

/// Shared behavior of overlay and world contexts.
pub trait RenderContext {
    fn transform(&self) -> ContextTransform;

    /// Root elements in traversal order.
    fn roots(&self) -> &[Element];

    fn roots_mut(&mut self) -> &mut Vec<Element>;

    /// Appends a root element and returns its index.
    fn add(&mut self, element: Element) -> usize {
        let roots = self.roots_mut();
        roots.push(element);
        roots.len() - 1
    }

    fn clear(&mut self) {
        self.roots_mut().clear();
    }

    /// Applies the context transform and draws every root subtree.
    fn transform_and_render(&mut self, renderer: &mut dyn Renderer) {
        let transform = self.transform();
        renderer.begin_context(&transform);
        render_tree(renderer, self.roots_mut(), 0);
        renderer.end_context();
    }
}

/// The screen-space context. One per engine.
#[derive(Debug, Default)]
pub struct OverlayContext {
    size: Vec3,
    roots: Vec<Element>,
}

impl OverlayContext {
    pub fn new(size: Vec3) -> Self {
        Self { size, roots: Vec::new() }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Copies the host's scaled resolution into the context size.
    pub fn apply_resolution(&mut self, resolution: Resolution) {
        self.size = Vec3::planar(resolution.scaled_width as f32, resolution.scaled_height as f32);
    }
}

impl RenderContext for OverlayContext {
    fn transform(&self) -> ContextTransform {
        ContextTransform::Overlay { size: self.size }
    }

    fn roots(&self) -> &[Element] {
        &self.roots
    }

    fn roots_mut(&mut self) -> &mut Vec<Element> {
        &mut self.roots
    }
}

/// A world-space context such as a floating label.
///
/// Never takes part in click routing.
#[derive(Debug, Default)]
pub struct WorldContext {
    size: Vec3,
    placement: WorldPlacement,
    roots: Vec<Element>,
}

impl WorldContext {
    pub fn new(placement: WorldPlacement) -> Self {
        Self { size: Vec3::zero(), placement, roots: Vec::new() }
    }

    pub fn with_size(mut self, size: Vec3) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn placement(&self) -> WorldPlacement {
        self.placement
    }
}

impl RenderContext for WorldContext {
    fn transform(&self) -> ContextTransform {
        ContextTransform::World { size: self.size, placement: self.placement }
    }

    fn roots(&self) -> &[Element] {
        &self.roots
    }

    fn roots_mut(&mut self) -> &mut Vec<Element> {
        &mut self.roots
    }
}

// ── WorldContexts ─────────────────────────────────────────────────────────

/// Stable handle to a world context inside [`WorldContexts`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WorldId(u64);

/// Application-managed collection of world contexts.
///
/// The host clears it on world change or respawn; the engine never does.
#[derive(Debug, Default)]
pub struct WorldContexts {
    next_id: u64,
    entries: Vec<(WorldId, WorldContext)>,
}

impl WorldContexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, context: WorldContext) -> WorldId {
        let id = WorldId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, context));
        log::debug!("world context {:?} added ({} live)", id, self.entries.len());
        id
    }

    pub fn remove(&mut self, id: WorldId) -> Option<WorldContext> {
        let index = self.entries.iter().position(|(i, _)| *i == id)?;
        let (_, context) = self.entries.remove(index);
        log::debug!("world context {:?} removed ({} live)", id, self.entries.len());
        Some(context)
    }

    pub fn get(&self, id: WorldId) -> Option<&WorldContext> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, id: WorldId) -> Option<&mut WorldContext> {
        self.entries.iter_mut().find(|(i, _)| *i == id).map(|(_, c)| c)
    }

    /// Contexts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WorldId, &WorldContext)> {
        self.entries.iter().map(|(id, c)| (*id, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("clearing {} world contexts", self.entries.len());
        }
        self.entries.clear();
    }

    pub(crate) fn render_all(&mut self, renderer: &mut dyn Renderer) {
        for (_, context) in &mut self.entries {
            context.transform_and_render(renderer);
        }
    }
}
