//! Focus state machine.
//!
//! `Interactions` owns the cursor into an interaction index and keeps the
//! Selected flag of the referenced elements in sync with it: at most one
//! element of a scope is Selected at any time, and it is the one under the
//! cursor. Mouse routing, the draw-order pass and the theme editor are
//! implemented on the same type in their own modules.

use crate::edit::DragQuantizer;
use crate::element::Element;
use crate::geometry::Bounds;
use crate::input::{Key, KeyEvent};
use crate::interaction::{ElementRef, ElementSource, InteractionIndex};
use crate::navigation::{DirectionalPlan, Direction, RenderArea};
use crate::settings::{KeyScheme, NavigationMode, ScreenSettings};
use kurbo::Point;

/// Tab order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Next,
    Prev,
}

/// Focus, navigation, mouse routing and theme editing for one interaction
/// scope (a whole screen, or the children of a composite widget).
pub struct Interactions<S> {
    pub(crate) source: S,
    pub(crate) index: InteractionIndex,
    pub(crate) cursor: Option<usize>,
    pub(crate) last_pointer: Point,
    pub(crate) drag: DragQuantizer,
    pub(crate) settings: ScreenSettings,
}

impl<S: ElementSource> Interactions<S> {
    /// Create an empty scope over `source`.
    pub fn new(source: S, settings: ScreenSettings) -> Self {
        Self {
            source,
            index: InteractionIndex::new(),
            cursor: None,
            last_pointer: Point::ZERO,
            drag: DragQuantizer::new(settings.drag_step),
            settings,
        }
    }

    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ScreenSettings) {
        self.drag.set_step(settings.drag_step);
        self.settings = settings;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the elements.
    ///
    /// Changing visibility or enabled state through this may leave focus on
    /// an ineligible element; call `check_interaction` afterwards.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn index(&self) -> &InteractionIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Last pointer position seen by the mouse router.
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Reference of the focused element.
    pub fn focused(&self) -> Option<ElementRef> {
        self.cursor.and_then(|position| self.index.get(position))
    }

    pub fn focused_element(&self) -> Option<&dyn Element> {
        self.cursor.and_then(|position| self.element_at(position))
    }

    pub fn focused_element_mut(&mut self) -> Option<&mut dyn Element> {
        let position = self.cursor?;
        self.element_at_mut(position)
    }

    /// Element at an index position.
    pub fn element_at(&self, position: usize) -> Option<&dyn Element> {
        let element = self.index.get(position)?;
        self.source.element(element)
    }

    pub(crate) fn element_at_mut(&mut self, position: usize) -> Option<&mut dyn Element> {
        let element = self.index.get(position)?;
        self.source.element_mut(element)
    }

    /// Whether the element at `position` may hold focus in `mode`.
    pub fn is_focusable(&self, position: usize, mode: NavigationMode) -> bool {
        match self.element_at(position) {
            Some(_) if mode.is_edit() => true,
            Some(element) => !element.is_edit_only() && element.is_visible() && element.is_enabled(),
            None => false,
        }
    }

    /// Append an element to the tab order.
    ///
    /// The cursor stays on the first element that may hold focus, so a
    /// freshly built scope focuses its first eligible element.
    pub fn register(&mut self, element: ElementRef, mode: NavigationMode) -> usize {
        let position = self.index.push(element);
        let current = *self.cursor.get_or_insert(0);
        let target = if self.is_focusable(current, mode) {
            current
        } else {
            self.scan(current, TabDirection::Next, mode)
        };
        self.set_cursor(target);
        position
    }

    /// Forget every entry. The elements themselves belong to the source.
    pub fn clear(&mut self) {
        self.index.clear();
        self.cursor = None;
    }

    /// Move the cursor, keeping Selected on exactly the focused element.
    ///
    /// Out-of-range positions are ignored.
    pub fn set_cursor(&mut self, position: usize) -> bool {
        if position >= self.index.len() {
            return false;
        }
        let previous = self.cursor.replace(position);
        if let Some(old) = previous.filter(|old| *old != position) {
            if let Some(element) = self.element_at_mut(old) {
                element.set_selected(false);
            }
        }
        if let Some(element) = self.element_at_mut(position) {
            element.set_selected(true);
        }
        if previous != Some(position) {
            log::debug!(
                "focus {:?} -> {} ({:?})",
                previous,
                position,
                self.index.get(position)
            );
        }
        true
    }

    /// Linear search from `start` for the next focusable position. Returns
    /// `start` when a full lap finds nothing.
    fn scan(&self, start: usize, direction: TabDirection, mode: NavigationMode) -> usize {
        let len = self.index.len();
        if len == 0 {
            return start;
        }
        let mut position = start;
        loop {
            position = match direction {
                TabDirection::Next => (position + 1) % len,
                TabDirection::Prev => (position + len - 1) % len,
            };
            if position == start || self.is_focusable(position, mode) {
                return position;
            }
        }
    }

    /// Step through the tab order with wrap-around.
    ///
    /// If no other element may hold focus the cursor stays where it is,
    /// even when the current element is itself ineligible.
    pub fn advance_tab(&mut self, direction: TabDirection, mode: NavigationMode) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        let target = self.scan(current, direction, mode);
        if target == current && !self.is_focusable(current, mode) {
            log::warn!("no element can take focus, keeping cursor at {current}");
        }
        self.set_cursor(target);
        target != current
    }

    fn source_rect(&self) -> Bounds {
        self.focused_element()
            .map(|element| element.bounds())
            .unwrap_or_else(|| Bounds::unit_at(self.last_pointer.x, self.last_pointer.y, 0.0))
    }

    /// Best candidate in every direction from the focused element.
    pub fn directional_plan(&self, mode: NavigationMode) -> DirectionalPlan {
        let candidates: Vec<(usize, Bounds)> = (0..self.index.len())
            .filter(|position| Some(*position) != self.cursor && self.is_focusable(*position, mode))
            .filter_map(|position| self.element_at(position).map(|element| (position, element.bounds())))
            .collect();
        let area = RenderArea::new(self.settings.render_width, self.settings.render_height);
        DirectionalPlan::compute(&self.source_rect(), &candidates, area)
    }

    /// Move focus spatially. Returns false, changing nothing, when no other
    /// element qualifies.
    pub fn advance_directional(&mut self, direction: Direction, mode: NavigationMode) -> bool {
        let Some(candidate) = self.directional_plan(mode).target(direction, self.cursor) else {
            return false;
        };
        self.refocus(candidate.position);
        true
    }

    /// Move the cursor and carry the focus highlight along.
    pub(crate) fn refocus(&mut self, position: usize) {
        if let Some(old) = self.cursor {
            self.set_focus_highlight(old, false);
        }
        self.set_cursor(position);
        self.set_focus_highlight(position, true);
    }

    pub(crate) fn set_focus_highlight(&mut self, position: usize, highlighted: bool) {
        if let Some(element) = self.element_at_mut(position) {
            if element.highlight_follows_focus() {
                element.set_highlighted(highlighted);
            }
        }
    }

    /// Revalidate focus after elements changed visibility or enabled state.
    pub fn check_interaction(&mut self, mode: NavigationMode) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        let still_valid = self
            .element_at(current)
            .is_some_and(|element| element.is_visible() && element.is_enabled());
        if still_valid {
            return false;
        }
        self.advance_tab(TabDirection::Prev, mode)
    }

    /// Force focus onto a specific element. False if it is not indexed.
    pub fn focus_to(&mut self, element: ElementRef) -> bool {
        let Some(position) = self.index.position_of(element) else {
            return false;
        };
        if let Some(old) = self.cursor {
            self.set_focus_highlight(old, false);
        }
        self.set_cursor(position)
    }

    /// Step the focused element's value forwards.
    pub fn next_value(&mut self) -> bool {
        self.focused_element_mut()
            .is_some_and(|element| element.next_value())
    }

    /// Step the focused element's value backwards.
    pub fn prev_value(&mut self) -> bool {
        self.focused_element_mut()
            .is_some_and(|element| element.prev_value())
    }

    /// Route a key press. Returns true if it changed focus or a value.
    pub fn handle_key(&mut self, event: &KeyEvent, mode: NavigationMode) -> bool {
        if mode.is_edit() {
            return self.handle_key_edit(event);
        }
        if self.index.is_empty() {
            return false;
        }
        let tab_direction = if event.modifiers.shift {
            TabDirection::Prev
        } else {
            TabDirection::Next
        };
        match self.settings.key_scheme {
            KeyScheme::Directional => match &event.key {
                Key::Tab => self.advance_tab(tab_direction, mode),
                Key::Left | Key::Right if self.steps_values(event) => {
                    if event.key == Key::Left {
                        self.prev_value()
                    } else {
                        self.next_value()
                    }
                }
                key => match Direction::from_key(key) {
                    Some(direction) => self.advance_directional(direction, mode),
                    None => false,
                },
            },
            KeyScheme::Tab => match event.key {
                Key::Tab => self.advance_tab(tab_direction, mode),
                Key::Left => self.prev_value(),
                Key::Right => self.next_value(),
                _ => false,
            },
        }
    }

    fn steps_values(&self, event: &KeyEvent) -> bool {
        !event.modifiers.shift
            && self
                .focused_element()
                .is_some_and(|element| element.cycles_values())
    }
}
