//! Scrolling playlist whose visible rows form their own focus scope.

use crate::element::{Element, ElementKind, ElementState};
use crate::elements::{Button, MAX_TILES};
use crate::focus::Interactions;
use crate::geometry::Bounds;
use crate::input::{Key, KeyEvent};
use crate::interaction::ElementRef;
use crate::settings::{NavigationMode, ScreenSettings};
use kurbo::Point;

type Rows = Interactions<Vec<Box<dyn Element>>>;

/// Queue of songs to sing next.
///
/// Only the rows that fit inside the bounds exist as elements. Moving past
/// the first or last row scrolls the window over `entries`.
pub struct Playlist {
    pub bounds: Bounds,
    entry_height: f64,
    entries: Vec<String>,
    offset: usize,
    rows: Rows,
    state: ElementState,
}

impl Playlist {
    pub fn new(bounds: Bounds, entry_height: f64) -> Self {
        let mut playlist = Self {
            bounds,
            entry_height,
            entries: Vec::new(),
            offset: 0,
            rows: Interactions::new(Vec::new(), ScreenSettings::default()),
            state: ElementState::default(),
        };
        playlist.layout_rows();
        playlist
    }

    pub fn with_entries<I, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.set_entries(entries);
        self
    }

    /// Replace the queue. The scroll offset is kept when it still fits.
    pub fn set_entries<I, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
        self.offset = self
            .offset
            .min(self.entries.len().saturating_sub(self.visible_rows()));
        self.layout_rows();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn entry_height(&self) -> f64 {
        self.entry_height
    }

    /// Index of the first entry shown.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows that fit inside the bounds.
    pub fn visible_rows(&self) -> usize {
        if self.entry_height <= 0.0 {
            return 1;
        }
        ((self.bounds.height / self.entry_height).floor() as usize).clamp(1, MAX_TILES)
    }

    /// The row focus scope.
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    fn current_row(&self) -> Option<usize> {
        self.rows
            .cursor()
            .filter(|row| self.rows.is_focusable(*row, NavigationMode::Normal))
    }

    /// Index into `entries` of the focused row.
    pub fn current_entry(&self) -> Option<usize> {
        self.current_row().map(|row| self.offset + row)
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.current_entry()
            .and_then(|entry| self.entries.get(entry))
            .map(String::as_str)
    }

    /// Focus the next entry, scrolling when the last row is focused.
    pub fn select_next(&mut self) -> bool {
        let Some(row) = self.current_row() else {
            return false;
        };
        if row + 1 < self.visible_rows() && self.rows.is_focusable(row + 1, NavigationMode::Normal)
        {
            return self.rows.set_cursor(row + 1);
        }
        if self.offset + self.visible_rows() < self.entries.len() {
            self.offset += 1;
            self.layout_rows();
            return true;
        }
        false
    }

    /// Focus the previous entry, scrolling when the first row is focused.
    pub fn select_prev(&mut self) -> bool {
        let Some(row) = self.current_row() else {
            return false;
        };
        if row > 0 {
            return self.rows.set_cursor(row - 1);
        }
        if self.offset > 0 {
            self.offset -= 1;
            self.layout_rows();
            return true;
        }
        false
    }

    /// Up and Down walk the queue; everything else is left to the screen.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !event.modifiers.is_empty() {
            return false;
        }
        match event.key {
            Key::Up => self.select_prev(),
            Key::Down => self.select_next(),
            _ => false,
        }
    }

    fn row_bounds(&self, row: usize) -> Bounds {
        let height = if self.entry_height > 0.0 {
            self.entry_height
        } else {
            self.bounds.height
        };
        Bounds::new(
            self.bounds.x(),
            self.bounds.y() + row as f64 * height,
            self.bounds.width,
            height,
            self.bounds.z,
        )
    }

    /// Rebuild the rows for the current window, keeping the focused row
    /// where possible.
    fn layout_rows(&mut self) {
        let previous = self.rows.cursor();
        let rows: Vec<Box<dyn Element>> = (0..self.visible_rows())
            .map(|row| {
                let button = match self.entries.get(self.offset + row) {
                    Some(entry) => Button::new(self.row_bounds(row), entry.clone()),
                    None => Button::new(self.row_bounds(row), "").disabled(),
                };
                Box::new(button) as Box<dyn Element>
            })
            .collect();

        let settings = ScreenSettings {
            render_width: self.bounds.right(),
            render_height: self.bounds.bottom(),
            ..ScreenSettings::default()
        };
        self.rows = Interactions::new(rows, settings);
        for row in 0..self.visible_rows() {
            self.rows
                .register(ElementRef::new(ElementKind::Button, row), NavigationMode::Normal);
        }
        if let Some(previous) = previous {
            if self.rows.is_focusable(previous, NavigationMode::Normal) {
                self.rows.set_cursor(previous);
            }
        }
    }
}

impl Element for Playlist {
    fn kind(&self) -> ElementKind {
        ElementKind::Playlist
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
        self.layout_rows();
    }

    fn resize_by(&mut self, dw: f64, dh: f64) {
        self.bounds.resize(dw, dh);
        self.offset = self
            .offset
            .min(self.entries.len().saturating_sub(self.visible_rows()));
        self.layout_rows();
    }

    fn on_hover(&mut self, point: Point) {
        self.rows.on_mouse_move(point, NavigationMode::Normal);
    }

    fn on_click(&mut self, point: Point) -> bool {
        match self.rows.hit_test(point, NavigationMode::Normal) {
            Some(row) => {
                if self.rows.cursor() != Some(row) {
                    self.rows.set_cursor(row);
                }
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        // Three 40 px rows over five songs.
        Playlist::new(Bounds::new(0.0, 0.0, 400.0, 120.0, 0.0), 40.0)
            .with_entries(["A", "B", "C", "D", "E"])
    }

    #[test]
    fn test_rows_fit_bounds() {
        let playlist = playlist();
        assert_eq!(playlist.visible_rows(), 3);
        assert_eq!(playlist.rows().len(), 3);
        let row = playlist.rows().element_at(2).unwrap().bounds();
        assert!((row.y() - 80.0).abs() < f64::EPSILON);
        assert_eq!(playlist.selected_entry(), Some("A"));
    }

    #[test]
    fn test_scrolls_past_last_row() {
        let mut playlist = playlist();
        assert!(playlist.select_next());
        assert!(playlist.select_next());
        assert_eq!(playlist.offset(), 0);
        assert_eq!(playlist.selected_entry(), Some("C"));

        assert!(playlist.select_next());
        assert_eq!(playlist.offset(), 1);
        assert_eq!(playlist.selected_entry(), Some("D"));
        assert!(playlist.handle_key(&KeyEvent::new(Key::Down)));
        assert_eq!(playlist.selected_entry(), Some("E"));
        assert!(!playlist.select_next());
        assert_eq!(playlist.offset(), 2);
    }

    #[test]
    fn test_scrolls_back_to_top() {
        let mut playlist = playlist();
        for _ in 0..4 {
            playlist.select_next();
        }
        assert_eq!(playlist.selected_entry(), Some("E"));
        let mut seen = Vec::new();
        while playlist.handle_key(&KeyEvent::new(Key::Up)) {
            seen.push(playlist.selected_entry().unwrap_or_default().to_string());
        }
        assert_eq!(seen, ["D", "C", "B", "A"]);
        assert_eq!(playlist.offset(), 0);
    }

    #[test]
    fn test_short_queue_skips_empty_rows() {
        let mut playlist =
            Playlist::new(Bounds::new(0.0, 0.0, 400.0, 120.0, 0.0), 40.0).with_entries(["A", "B"]);
        assert!(playlist.select_next());
        assert!(!playlist.select_next());
        assert_eq!(playlist.selected_entry(), Some("B"));
        assert!(!playlist.on_click(Point::new(10.0, 100.0)));
    }

    #[test]
    fn test_click_and_hover_pick_rows() {
        let mut playlist = playlist();
        assert!(playlist.on_click(Point::new(10.0, 50.0)));
        assert_eq!(playlist.selected_entry(), Some("B"));
        playlist.on_hover(Point::new(10.0, 90.0));
        assert_eq!(playlist.selected_entry(), Some("C"));
    }

    #[test]
    fn test_move_keeps_selection() {
        let mut playlist = playlist();
        playlist.select_next();
        playlist.move_by(0.0, 10.0);
        assert_eq!(playlist.selected_entry(), Some("B"));
        let row = playlist.rows().element_at(0).unwrap().bounds();
        assert!((row.y() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enabled_follows_visibility() {
        let mut playlist = playlist();
        assert!(playlist.is_enabled());
        playlist.set_visible(false);
        assert!(!playlist.is_enabled());
    }
}
