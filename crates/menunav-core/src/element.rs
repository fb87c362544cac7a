//! The capability contract every widget kind exposes to the engine.

use crate::geometry::Bounds;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a widget. Decides which registry it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Background,
    Button,
    Slider,
    Static,
    Text,
    SongList,
    NameGrid,
    Equalizer,
    Playlist,
    ParticleEffect,
}

impl ElementKind {
    /// Every kind, in registry order.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Background,
        ElementKind::Button,
        ElementKind::Slider,
        ElementKind::Static,
        ElementKind::Text,
        ElementKind::SongList,
        ElementKind::NameGrid,
        ElementKind::Equalizer,
        ElementKind::Playlist,
        ElementKind::ParticleEffect,
    ];

    /// Kinds that can only take focus while the theme editor is active.
    pub fn is_edit_only(self) -> bool {
        !matches!(self, ElementKind::Button | ElementKind::Slider)
    }

    /// Kinds painted by the draw-order pass. Backgrounds paint earlier,
    /// on their own.
    pub fn is_paintable(self) -> bool {
        self != ElementKind::Background
    }

    /// Human-readable name used in log and error messages.
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Background => "Background",
            ElementKind::Button => "Button",
            ElementKind::Slider => "Slider",
            ElementKind::Static => "Static",
            ElementKind::Text => "Text",
            ElementKind::SongList => "SongList",
            ElementKind::NameGrid => "NameGrid",
            ElementKind::Equalizer => "Equalizer",
            ElementKind::Playlist => "Playlist",
            ElementKind::ParticleEffect => "ParticleEffect",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flags shared by every widget kind.
///
/// `selected` is owned by the focus state machine: elements store it but
/// never decide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementState {
    pub visible: bool,
    pub selected: bool,
    pub highlighted: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            visible: true,
            selected: false,
            highlighted: false,
        }
    }
}

/// Common trait for all interactive widgets.
pub trait Element {
    /// The widget kind.
    fn kind(&self) -> ElementKind;

    /// Bounding rectangle and depth in screen space.
    fn bounds(&self) -> Bounds;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Whether the element accepts focus (on top of being visible).
    fn is_enabled(&self) -> bool;

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// Secondary "active/expanded" state. Only list- and slider-like kinds
    /// keep it; the rest always report false.
    fn is_highlighted(&self) -> bool {
        false
    }

    fn set_highlighted(&mut self, _highlighted: bool) {}

    /// Whether the engine highlights this element while it holds focus.
    /// Other highlight-capable kinds are highlighted by screen code only.
    fn highlight_follows_focus(&self) -> bool {
        false
    }

    /// Only focusable while editing the theme.
    fn is_edit_only(&self) -> bool {
        self.kind().is_edit_only()
    }

    /// Theme editor: shift the element (or its active hotspot).
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Theme editor: grow or shrink the element (or its active hotspot).
    fn resize_by(&mut self, dw: f64, dh: f64);

    /// Hit test against sub-regions outside the main bounds.
    fn hit_subregion(&self, _point: Point) -> bool {
        false
    }

    /// Pointer moved while this element has focus.
    fn on_hover(&mut self, _point: Point) {}

    /// Left click while this element has focus. Returns true if the click
    /// changed the element.
    fn on_click(&mut self, _point: Point) -> bool {
        false
    }

    /// Step to the next value, for value-cycling kinds.
    fn next_value(&mut self) -> bool {
        false
    }

    /// Step to the previous value, for value-cycling kinds.
    fn prev_value(&mut self) -> bool {
        false
    }

    /// Whether Left/Right keys should cycle values instead of moving focus.
    fn cycles_values(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_only_kinds() {
        assert!(!ElementKind::Button.is_edit_only());
        assert!(!ElementKind::Slider.is_edit_only());
        assert!(ElementKind::Static.is_edit_only());
        assert!(ElementKind::NameGrid.is_edit_only());
        assert!(ElementKind::ParticleEffect.is_edit_only());
    }

    #[test]
    fn test_background_not_paintable() {
        let skipped: Vec<_> = ElementKind::ALL
            .iter()
            .filter(|kind| !kind.is_paintable())
            .collect();
        assert_eq!(skipped, vec![&ElementKind::Background]);
    }

    #[test]
    fn test_default_state_is_visible() {
        let state = ElementState::default();
        assert!(state.visible);
        assert!(!state.selected);
        assert!(!state.highlighted);
    }
}
