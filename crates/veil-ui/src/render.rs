use crate::context::ContextTransform;
use crate::element::Element;

/// Draw backend supplied by the host.
///
/// The UI layer never issues draw calls itself; it walks its trees and hands
/// each enabled element to the renderer inside a `begin_context` /
/// `end_context` pair.
pub trait Renderer {
    /// Pushes the context's transform (screen ortho for the overlay, a world
    /// placement for world contexts).
    fn begin_context(&mut self, transform: &ContextTransform);

    /// Draws one element. `depth` is 0 for roots.
    ///
    /// Returns the hover-culling verdict: `false` when the element is hidden
    /// or occluded and must not receive clicks.
    fn draw(&mut self, element: &Element, depth: usize) -> bool;

    /// Pops what `begin_context` pushed.
    fn end_context(&mut self);
}

/// Draws `elements` and records each culling verdict.
///
/// Disabled elements are neither drawn nor descended into, and fail culling.
pub(crate) fn render_tree(renderer: &mut dyn Renderer, elements: &mut [Element], depth: usize) {
    for element in elements {
        if !element.is_enabled() {
            element.set_passed_hover_culling(false);
            continue;
        }

        let passed = renderer.draw(element, depth);
        element.set_passed_hover_culling(passed);

        if let Some(children) = element.children_mut() {
            render_tree(renderer, children, depth + 1);
        }
    }
}
