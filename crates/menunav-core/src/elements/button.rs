//! Push button.

use crate::element::{Element, ElementKind, ElementState};
use crate::geometry::Bounds;
use serde::{Deserialize, Serialize};

/// A labelled button. The only kind with an explicit enabled flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub bounds: Bounds,
    /// Caption drawn on the button.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(skip)]
    state: ElementState,
}

fn default_enabled() -> bool {
    true
}

impl Button {
    /// Create a new enabled, visible button.
    pub fn new(bounds: Bounds, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            enabled: true,
            state: ElementState::default(),
        }
    }

    /// Builder-style variant of `set_visible`.
    pub fn hidden(mut self) -> Self {
        self.state.visible = false;
        self
    }

    /// Builder-style disable.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Element for Button {
    fn kind(&self) -> ElementKind {
        ElementKind::Button
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
        self.enabled
    }

    fn is_selected(&self) -> bool {
        self.state.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.state.selected = selected;
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.bounds.translate(dx, dy);
    }

    fn resize_by(&mut self, dw: f64, dh: f64) {
        self.bounds.resize(dw, dh);
    }
}
