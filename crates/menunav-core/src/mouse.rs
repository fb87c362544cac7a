//! Mouse routing: pointer hit testing, hover focus and click forwarding.

use crate::focus::Interactions;
use crate::input::MouseEvent;
use crate::interaction::ElementSource;
use crate::settings::NavigationMode;
use kurbo::Point;

impl<S: ElementSource> Interactions<S> {
    /// Index position of the nearest focusable element under `point`.
    ///
    /// Sub-regions such as slider arrows count as hits. Elements deeper than
    /// `z_far` are ignored; on equal depth the later registered element wins,
    /// matching the element painted on top.
    pub fn hit_test(&self, point: Point, mode: NavigationMode) -> Option<usize> {
        let mut nearest_z = self.settings.z_far;
        let mut hit = None;
        for position in 0..self.index.len() {
            if !self.is_focusable(position, mode) {
                continue;
            }
            let Some(element) = self.element_at(position) else {
                continue;
            };
            if !element.bounds().contains(point) && !element.hit_subregion(point) {
                continue;
            }
            let z = element.bounds().z;
            if z > nearest_z {
                continue;
            }
            nearest_z = z;
            hit = Some(position);
        }
        hit
    }

    /// Focus whatever is under the pointer and let the focused element track
    /// hover. Returns true if focus moved.
    pub fn on_mouse_move(&mut self, point: Point, mode: NavigationMode) -> bool {
        let moved = match self.hit_test(point, mode) {
            Some(position) if Some(position) != self.cursor => {
                self.refocus(position);
                true
            }
            _ => false,
        };
        if let Some(element) = self.focused_element_mut() {
            if element.is_visible() {
                element.on_hover(point);
            }
        }
        moved
    }

    /// Forward a left click to the focused element. Returns true if the
    /// element reacted.
    pub fn on_mouse_click(&mut self, point: Point) -> bool {
        match self.focused_element_mut() {
            Some(element) if element.is_visible() => element.on_click(point),
            _ => false,
        }
    }

    /// Route a mouse event. Returns true if focus moved or a click was
    /// consumed.
    pub fn handle_mouse(&mut self, event: &MouseEvent, mode: NavigationMode) -> bool {
        if mode.is_edit() {
            return self.handle_mouse_edit(event);
        }
        let moved = self.on_mouse_move(event.position, mode);
        let clicked = event.left_click && self.on_mouse_click(event.position);
        self.last_pointer = event.position;
        self.drag.reset(event.position);
        moved || clicked
    }
}
