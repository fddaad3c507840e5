//! Button edge tracking and click routing.

use veil_engine::input::{ButtonEdge, ButtonEdges, InputSource, MouseButton};

use crate::element::{element_at_mut, Element};
use crate::hover::{find_click_target, ElementPath};

/// A click delivered to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedClick {
    pub button: MouseButton,
    pub pressed: bool,
    pub target: ElementPath,
}

/// Turns raw button state into at most one handler call per edge.
///
/// Hover must already be resolved for the frame; the router only reads it.
#[derive(Debug, Default)]
pub struct ClickRouter {
    edges: ButtonEdges,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls every button once and routes each edge into `roots`.
    ///
    /// Buttons are handled in [`MouseButton::ALL`] order and the target is
    /// searched per edge, so a handler that reshapes the tree affects the
    /// buttons routed after it.
    pub fn tick(&mut self, input: &dyn InputSource, roots: &mut [Element]) -> Vec<RoutedClick> {
        let mut routed = Vec::new();
        for button in MouseButton::ALL {
            let Some(edge) = self.edges.update(button, input.is_button_down(button)) else {
                continue;
            };
            if let Some(click) = route(roots, edge) {
                routed.push(click);
            }
        }
        routed
    }

    #[inline]
    pub fn edges(&self) -> &ButtonEdges {
        &self.edges
    }
}

/// Routes one edge to the current click target, if there is one.
pub fn route(roots: &mut [Element], edge: ButtonEdge) -> Option<RoutedClick> {
    let Some(path) = find_click_target(roots) else {
        log::trace!("{} edge (pressed={}) hit no clickable element", edge.button, edge.pressed);
        return None;
    };

    let target = element_at_mut(roots, &path)?;
    target.fire_click(edge.pressed, edge.button);
    log::trace!("{} edge (pressed={}) routed to {:?}", edge.button, edge.pressed, path);

    Some(RoutedClick {
        button: edge.button,
        pressed: edge.pressed,
        target: path,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use veil_engine::coords::{Rect, Vec2};

    use super::*;
    use crate::hover::resolve;

    type Log = Rc<RefCell<Vec<(&'static str, bool, MouseButton)>>>;

    #[derive(Default)]
    struct FakeInput {
        down: [bool; 3],
        pointer: Option<Vec2>,
    }

    impl FakeInput {
        fn at(x: f32, y: f32) -> Self {
            Self { down: [false; 3], pointer: Some(Vec2::new(x, y)) }
        }
    }

    impl InputSource for FakeInput {
        fn is_button_down(&self, button: MouseButton) -> bool {
            self.down[button.index()]
        }

        fn pointer_position(&self) -> Option<Vec2> {
            self.pointer
        }
    }

    fn recording(name: &'static str, bounds: Rect, log: &Log) -> Element {
        let log = log.clone();
        Element::leaf(bounds).on_click(move |_, pressed, button| {
            log.borrow_mut().push((name, pressed, button));
        })
    }

    fn frame(router: &mut ClickRouter, input: &FakeInput, roots: &mut [Element]) -> Vec<RoutedClick> {
        resolve(roots, input.pointer_position());
        router.tick(input, roots)
    }

    #[test]
    fn press_hold_release_scenario() {
        let log = Log::default();
        let mut roots = vec![recording("E", Rect::new(0.0, 0.0, 100.0, 100.0), &log)];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(50.0, 50.0);

        input.down[MouseButton::Left.index()] = true;
        frame(&mut router, &input, &mut roots);
        assert_eq!(*log.borrow(), vec![("E", true, MouseButton::Left)]);

        frame(&mut router, &input, &mut roots);
        assert_eq!(log.borrow().len(), 1);

        input.down[MouseButton::Left.index()] = false;
        frame(&mut router, &input, &mut roots);
        assert_eq!(
            *log.borrow(),
            vec![("E", true, MouseButton::Left), ("E", false, MouseButton::Left)]
        );
    }

    #[test]
    fn held_button_does_not_refire_when_hover_changes() {
        let log = Log::default();
        let mut roots = vec![
            recording("A", Rect::new(0.0, 0.0, 10.0, 10.0), &log),
            recording("B", Rect::new(20.0, 0.0, 10.0, 10.0), &log),
        ];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(5.0, 5.0);
        input.down[MouseButton::Right.index()] = true;
        frame(&mut router, &input, &mut roots);

        input.pointer = Some(Vec2::new(25.0, 5.0));
        let routed = frame(&mut router, &input, &mut roots);

        assert!(routed.is_empty());
        assert_eq!(*log.borrow(), vec![("A", true, MouseButton::Right)]);
    }

    #[test]
    fn release_routes_to_whatever_is_under_the_pointer() {
        let log = Log::default();
        let mut roots = vec![
            recording("A", Rect::new(0.0, 0.0, 10.0, 10.0), &log),
            recording("B", Rect::new(20.0, 0.0, 10.0, 10.0), &log),
        ];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(5.0, 5.0);
        input.down[0] = true;
        frame(&mut router, &input, &mut roots);

        input.pointer = Some(Vec2::new(25.0, 5.0));
        input.down[0] = false;
        frame(&mut router, &input, &mut roots);

        assert_eq!(
            *log.borrow(),
            vec![("A", true, MouseButton::Left), ("B", false, MouseButton::Left)]
        );
    }

    #[test]
    fn container_child_wins_over_container() {
        let log = Log::default();
        let parent_log = log.clone();
        let mut roots = vec![
            Element::container(Rect::new(0.0, 0.0, 100.0, 100.0))
                .on_click(move |_, pressed, button| parent_log.borrow_mut().push(("parent", pressed, button)))
                .child(recording("child", Rect::new(40.0, 40.0, 20.0, 20.0), &log)),
        ];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(50.0, 50.0);
        input.down[0] = true;

        let routed = frame(&mut router, &input, &mut roots);

        assert_eq!(routed[0].target, vec![0, 0]);
        assert_eq!(*log.borrow(), vec![("child", true, MouseButton::Left)]);
    }

    #[test]
    fn each_button_edge_routes_separately_in_order() {
        let log = Log::default();
        let mut roots = vec![recording("E", Rect::new(0.0, 0.0, 10.0, 10.0), &log)];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(1.0, 1.0);
        input.down = [true, true, true];

        let routed = frame(&mut router, &input, &mut roots);

        let buttons: Vec<_> = routed.iter().map(|c| c.button).collect();
        assert_eq!(buttons, MouseButton::ALL.to_vec());
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn edge_without_target_is_still_consumed() {
        let log = Log::default();
        let mut roots = vec![recording("E", Rect::new(0.0, 0.0, 10.0, 10.0), &log)];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(90.0, 90.0);
        input.down[0] = true;
        assert!(frame(&mut router, &input, &mut roots).is_empty());
        assert!(router.edges().last_state(MouseButton::Left));

        // Moving onto the element while still held is not a new edge.
        input.pointer = Some(Vec2::new(5.0, 5.0));
        assert!(frame(&mut router, &input, &mut roots).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn disabled_element_never_receives_clicks_before_first_render() {
        let log = Log::default();
        let mut roots = vec![recording("E", Rect::new(0.0, 0.0, 10.0, 10.0), &log).enabled(false)];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(5.0, 5.0);
        input.down[0] = true;

        assert!(frame(&mut router, &input, &mut roots).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn culled_element_never_receives_clicks() {
        let log = Log::default();
        let mut roots = vec![recording("E", Rect::new(0.0, 0.0, 10.0, 10.0), &log).hover_culling(false)];
        let mut router = ClickRouter::new();
        let mut input = FakeInput::at(5.0, 5.0);
        input.down[0] = true;
        frame(&mut router, &input, &mut roots);
        input.down[0] = false;
        frame(&mut router, &input, &mut roots);

        assert!(log.borrow().is_empty());
    }
}
