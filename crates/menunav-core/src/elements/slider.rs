//! Slider (select-slide) widget: a value picker with arrow hotspots.

use crate::element::{Element, ElementKind, ElementState};
use crate::geometry::Bounds;
use crate::hotspot::{Hotspot, HotspotKind, hit_test_hotspots};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A horizontal value picker with left/right arrows.
///
/// While focused, hovering an arrow makes it the active hotspot, but only
/// if stepping in that direction is possible. Theme-editor moves and
/// resizes apply to the active hotspot instead of the whole slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    /// Main rectangle showing the value.
    pub bounds: Bounds,
    /// Left arrow hotspot.
    pub arrow_left: Bounds,
    /// Right arrow hotspot.
    pub arrow_right: Bounds,
    #[serde(default)]
    values: Vec<String>,
    #[serde(default)]
    selection: Option<usize>,
    #[serde(skip)]
    active_hotspot: Option<HotspotKind>,
    #[serde(skip)]
    state: ElementState,
}

impl Slider {
    /// Create a slider without values.
    pub fn new(bounds: Bounds, arrow_left: Bounds, arrow_right: Bounds) -> Self {
        Self {
            bounds,
            arrow_left,
            arrow_right,
            values: Vec::new(),
            selection: None,
            active_hotspot: None,
            state: ElementState::default(),
        }
    }

    /// Append values; the first value added becomes the selection.
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.add_value(value);
        }
        self
    }

    /// Append a single value.
    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
        if self.selection.is_none() {
            self.selection = Some(0);
        }
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.values.clear();
        self.selection = None;
        self.active_hotspot = None;
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Index of the current value.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The current value.
    pub fn value(&self) -> Option<&str> {
        self.selection
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Select a value by index. Out-of-range indices are ignored.
    pub fn set_selection(&mut self, index: usize) -> bool {
        if index < self.values.len() {
            self.selection = Some(index);
            true
        } else {
            false
        }
    }

    /// The arrow currently under the pointer, if it can be used.
    pub fn active_hotspot(&self) -> Option<HotspotKind> {
        self.active_hotspot
    }

    /// Both arrows as hotspots.
    pub fn hotspots(&self) -> [Hotspot; 2] {
        [
            Hotspot::new(HotspotKind::ArrowLeft, self.arrow_left),
            Hotspot::new(HotspotKind::ArrowRight, self.arrow_right),
        ]
    }

    fn can_step_back(&self) -> bool {
        self.selection.is_some_and(|i| i > 0)
    }

    fn can_step_forward(&self) -> bool {
        self.selection.is_some_and(|i| i + 1 < self.values.len())
    }

    fn edit_target(&mut self) -> &mut Bounds {
        match self.active_hotspot {
            Some(HotspotKind::ArrowLeft) => &mut self.arrow_left,
            Some(HotspotKind::ArrowRight) => &mut self.arrow_right,
            None => &mut self.bounds,
        }
    }
}

impl Element for Slider {
    fn kind(&self) -> ElementKind {
        ElementKind::Slider
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.state.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    fn is_enabled(&self) -> bool {
        self.state.visible
    }

    fn is_selected(&self) -> bool {
        self.state.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.state.selected = selected;
        if !selected {
            self.active_hotspot = None;
        }
    }

    fn is_highlighted(&self) -> bool {
        self.state.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.state.highlighted = highlighted;
    }

    fn highlight_follows_focus(&self) -> bool {
        true
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.edit_target().translate(dx, dy);
    }

    fn resize_by(&mut self, dw: f64, dh: f64) {
        self.edit_target().resize(dw, dh);
    }

    fn hit_subregion(&self, point: Point) -> bool {
        hit_test_hotspots(&self.hotspots(), point).is_some()
    }

    fn on_hover(&mut self, point: Point) {
        self.active_hotspot = match hit_test_hotspots(&self.hotspots(), point) {
            Some(HotspotKind::ArrowLeft) if self.can_step_back() => Some(HotspotKind::ArrowLeft),
            Some(HotspotKind::ArrowRight) if self.can_step_forward() => {
                Some(HotspotKind::ArrowRight)
            }
            _ => None,
        };
    }

    fn on_click(&mut self, point: Point) -> bool {
        self.on_hover(point);
        match self.active_hotspot {
            Some(HotspotKind::ArrowLeft) => self.prev_value(),
            Some(HotspotKind::ArrowRight) => self.next_value(),
            None => false,
        }
    }

    fn next_value(&mut self) -> bool {
        match self.selection {
            Some(i) if i + 1 < self.values.len() => {
                self.selection = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    fn prev_value(&mut self) -> bool {
        match self.selection {
            Some(i) if i > 0 => {
                self.selection = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    fn cycles_values(&self) -> bool {
        true
    }
}
