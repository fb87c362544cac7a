//! Theme editor: move and resize the focused element with keys or drags.

use crate::focus::{Interactions, TabDirection};
use crate::input::{Key, KeyEvent, Modifiers, MouseEvent};
use crate::interaction::ElementSource;
use crate::settings::NavigationMode;
use kurbo::{Point, Vec2};

/// Pointer movement since the previous event, raw and quantized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    /// Full pointer delta.
    pub raw: Vec2,
    /// Whole multiples of the drag step.
    pub stepped: Vec2,
}

/// Turns pointer motion into fixed-size steps.
///
/// The anchor only advances by whole steps, so the remainder carries into
/// the next event and slow drags still move the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragQuantizer {
    step: f64,
    anchor: Point,
}

impl DragQuantizer {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            anchor: Point::ZERO,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    /// Position the next delta is measured from.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Restart measuring from `position`.
    pub fn reset(&mut self, position: Point) {
        self.anchor = position;
    }

    /// Measure the pointer at `position`. With `free` set, no quantization
    /// happens and the anchor jumps to the pointer.
    pub fn update(&mut self, position: Point, free: bool) -> DragDelta {
        let raw = position - self.anchor;
        if free || self.step <= 0.0 {
            self.anchor = position;
            let stepped = if free { Vec2::ZERO } else { raw };
            return DragDelta { raw, stepped };
        }
        let stepped = Vec2::new(
            quantize(position.x, self.anchor.x, self.step),
            quantize(position.y, self.anchor.y, self.step),
        );
        self.anchor += stepped;
        DragDelta { raw, stepped }
    }
}

fn quantize(position: f64, anchor: f64, step: f64) -> f64 {
    ((position - anchor) / step).trunc() * step
}

impl<S: ElementSource> Interactions<S> {
    /// Shift the focused element. False if nothing is focused or the step
    /// is zero.
    pub fn move_focused(&mut self, dx: f64, dy: f64) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        match self.focused_element_mut() {
            Some(element) => {
                element.move_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Grow or shrink the focused element.
    pub fn resize_focused(&mut self, dw: f64, dh: f64) -> bool {
        if dw == 0.0 && dh == 0.0 {
            return false;
        }
        match self.focused_element_mut() {
            Some(element) => {
                element.resize_by(dw, dh);
                true
            }
            None => false,
        }
    }

    fn clear_focus_highlight(&mut self) {
        if let Some(position) = self.cursor {
            self.set_focus_highlight(position, false);
        }
    }

    /// Theme editor keys. Tab and unmodified Left/Right walk every
    /// element, Ctrl+arrow moves the focused one by a pixel and Shift+arrow
    /// resizes it (Right and Up grow, Left and Down shrink).
    pub(crate) fn handle_key_edit(&mut self, event: &KeyEvent) -> bool {
        self.clear_focus_highlight();
        let mode = NavigationMode::EditTheme;
        let modifiers = event.modifiers;
        let ctrl = modifiers == Modifiers::ctrl();
        let shift = modifiers == Modifiers::shift();
        match event.key {
            Key::Tab if modifiers.shift => self.advance_tab(TabDirection::Prev, mode),
            Key::Tab => self.advance_tab(TabDirection::Next, mode),
            Key::Up if ctrl => self.move_focused(0.0, -1.0),
            Key::Up if shift => self.resize_focused(0.0, 1.0),
            Key::Down if ctrl => self.move_focused(0.0, 1.0),
            Key::Down if shift => self.resize_focused(0.0, -1.0),
            Key::Right if ctrl => self.move_focused(1.0, 0.0),
            Key::Right if shift => self.resize_focused(1.0, 0.0),
            Key::Right if modifiers.is_empty() => self.advance_tab(TabDirection::Next, mode),
            Key::Left if ctrl => self.move_focused(-1.0, 0.0),
            Key::Left if shift => self.resize_focused(-1.0, 0.0),
            Key::Left if modifiers.is_empty() => self.advance_tab(TabDirection::Prev, mode),
            _ => false,
        }
    }

    /// Theme editor mouse: drag with the left button to move (Shift:
    /// resize) the focused element in steps, add Ctrl for free movement.
    /// Without a button held the pointer picks the focused element.
    pub(crate) fn handle_mouse_edit(&mut self, event: &MouseEvent) -> bool {
        self.clear_focus_highlight();
        let modifiers = event.modifiers;
        let delta = self.drag.update(event.position, modifiers.ctrl);
        self.last_pointer = event.position;

        if !event.left_held {
            return self.on_mouse_move(event.position, NavigationMode::EditTheme);
        }
        if modifiers.alt || modifiers.meta {
            return false;
        }
        match (modifiers.ctrl, modifiers.shift) {
            (false, false) => self.move_focused(delta.stepped.x, delta.stepped.y),
            (true, false) => self.move_focused(delta.raw.x, delta.raw.y),
            (false, true) => self.resize_focused(delta.stepped.x, delta.stepped.y),
            (true, true) => self.resize_focused(delta.raw.x, delta.raw.y),
        }
    }
}
