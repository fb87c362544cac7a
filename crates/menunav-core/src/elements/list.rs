//! Song browser.

use crate::element::{Element, ElementKind, ElementState};
use crate::geometry::Bounds;
use serde::{Deserialize, Serialize};

/// Song browser. Highlighted means the list is expanded and owns the
/// arrow keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongList {
    pub bounds: Bounds,
    #[serde(default)]
    pub songs: Vec<String>,
    #[serde(skip)]
    state: ElementState,
}

impl SongList {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            songs: Vec::new(),
            state: ElementState::default(),
        }
    }
}

impl Element for SongList {
    fn kind(&self) -> ElementKind {
        ElementKind::SongList
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
    }

    fn is_highlighted(&self) -> bool {
        self.state.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.state.highlighted = highlighted;
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.bounds.translate(dx, dy);
    }

    fn resize_by(&mut self, dw: f64, dh: f64) {
        self.bounds.resize(dw, dh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_list_highlight() {
        let mut list = SongList::new(Bounds::new(0.0, 0.0, 400.0, 600.0, 0.0));
        list.set_highlighted(true);
        assert!(list.is_highlighted());
        assert!(list.is_edit_only());
    }
}
