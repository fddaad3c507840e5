//! Hover resolution and click-target selection.
//!
//! Two separate questions are answered here:
//! - *hovered*: is the pointer inside an element's bounds? Computed for every
//!   element, culled or not, clickable or not.
//! - *click target*: which single element should receive a button edge?
//!   Gated on hover culling and on having a handler.

use veil_engine::coords::Vec2;

use crate::element::Element;

/// Root-relative index path to an element.
pub type ElementPath = Vec<usize>;

/// Recomputes `hovered` for every element under `elements`.
///
/// A child's hover does not depend on its parent's; nested elements may sit
/// outside their parent's bounds. With no pointer, nothing is hovered.
pub fn resolve(elements: &mut [Element], pointer: Option<Vec2>) {
    for element in elements {
        let hovered = pointer.is_some_and(|p| element.bounds().contains(p));
        element.set_hovered(hovered);

        if let Some(children) = element.children_mut() {
            resolve(children, pointer);
        }
    }
}

/// Finds the element that should receive a click.
///
/// Pre-order walk over `elements`; every element that passed hover culling,
/// is hovered, and has a handler replaces the current candidate. Descendants
/// therefore beat ancestors and later siblings beat earlier ones. An element
/// that is disabled or failed culling is skipped along with its subtree.
pub fn find_click_target(elements: &[Element]) -> Option<ElementPath> {
    let mut path = Vec::new();
    let mut best = None;
    search(elements, &mut path, &mut best);
    best
}

fn search(elements: &[Element], path: &mut ElementPath, best: &mut Option<ElementPath>) {
    for (i, element) in elements.iter().enumerate() {
        if !element.is_enabled() || !element.passed_hover_culling() {
            continue;
        }

        path.push(i);
        if element.is_hovered() && element.is_clickable() {
            *best = Some(path.clone());
        }
        if let Some(children) = element.children() {
            search(children, path, best);
        }
        path.pop();
    }
}
