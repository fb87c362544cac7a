//! Grid of player-name tiles with its own focus scope.

use crate::element::{Element, ElementKind, ElementState};
use crate::elements::Button;
use crate::focus::Interactions;
use crate::geometry::Bounds;
use crate::input::{Key, KeyEvent};
use crate::interaction::ElementRef;
use crate::navigation::Direction;
use crate::settings::{NavigationMode, ScreenSettings};
use kurbo::Point;

type Tiles = Interactions<Vec<Box<dyn Element>>>;

/// Upper bound on `columns * rows`.
pub const MAX_TILES: usize = 1024;

/// Player picker: a `columns x rows` grid of tiles laid out inside its
/// bounds.
///
/// Tiles are buttons navigated by the same engine as a whole screen. Tiles
/// without a name are disabled and never take focus.
pub struct NameGrid {
    pub bounds: Bounds,
    columns: usize,
    rows: usize,
    spacing: f64,
    names: Vec<String>,
    tiles: Tiles,
    state: ElementState,
}

impl NameGrid {
    /// Create an empty grid. Oversized dimensions are clamped so the grid
    /// never holds more than `MAX_TILES` tiles.
    pub fn new(bounds: Bounds, columns: usize, rows: usize, spacing: f64) -> Self {
        let columns = columns.clamp(1, MAX_TILES);
        let mut grid = Self {
            bounds,
            columns,
            rows: rows.clamp(1, MAX_TILES / columns),
            spacing,
            names: Vec::new(),
            tiles: Interactions::new(Vec::new(), ScreenSettings::default()),
            state: ElementState::default(),
        };
        grid.layout_tiles();
        grid
    }

    pub fn with_names<I, V>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.set_names(names);
        self
    }

    /// Replace the names shown on the tiles. Extra names are dropped.
    pub fn set_names<I, V>(&mut self, names: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.names = names
            .into_iter()
            .take(self.capacity())
            .map(Into::into)
            .collect();
        self.layout_tiles();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tiles.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// The tile focus scope.
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Index of the focused tile, if it carries a name.
    pub fn selection(&self) -> Option<usize> {
        self.tiles
            .cursor()
            .filter(|tile| self.tiles.is_focusable(*tile, NavigationMode::Normal))
    }

    /// Name on the focused tile.
    pub fn selected_name(&self) -> Option<&str> {
        self.selection()
            .and_then(|tile| self.names.get(tile))
            .map(String::as_str)
    }

    /// Move the tile focus spatially.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.tiles.advance_directional(direction, NavigationMode::Normal)
    }

    /// Arrow keys move between tiles; everything else is left to the screen.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match Direction::from_key(&event.key) {
            Some(direction) if event.modifiers.is_empty() => self.navigate(direction),
            _ => event.key == Key::Tab
                && self.tiles.handle_key(event, NavigationMode::Normal),
        }
    }

    fn tile_bounds(&self, tile: usize) -> Bounds {
        let columns = self.columns as f64;
        let rows = self.rows as f64;
        let width = ((self.bounds.width - self.spacing * (columns - 1.0)) / columns).max(1.0);
        let height = ((self.bounds.height - self.spacing * (rows - 1.0)) / rows).max(1.0);
        let column = (tile % self.columns) as f64;
        let row = (tile / self.columns) as f64;
        Bounds::new(
            self.bounds.x() + column * (width + self.spacing),
            self.bounds.y() + row * (height + self.spacing),
            width,
            height,
            self.bounds.z,
        )
    }

    /// Rebuild the tile scope from the current geometry and names, keeping
    /// the focused tile where possible.
    fn layout_tiles(&mut self) {
        let previous = self.tiles.cursor();
        let tiles: Vec<Box<dyn Element>> = (0..self.capacity())
            .map(|tile| {
                let label = self.names.get(tile).cloned().unwrap_or_default();
                let button = Button::new(self.tile_bounds(tile), label);
                let button = if tile < self.names.len() {
                    button
                } else {
                    button.disabled()
                };
                Box::new(button) as Box<dyn Element>
            })
            .collect();

        let settings = ScreenSettings {
            render_width: self.bounds.right(),
            render_height: self.bounds.bottom(),
            ..ScreenSettings::default()
        };
        self.tiles = Interactions::new(tiles, settings);
        for tile in 0..self.capacity() {
            self.tiles
                .register(ElementRef::new(ElementKind::Button, tile), NavigationMode::Normal);
        }
        if let Some(previous) = previous {
            if self.tiles.is_focusable(previous, NavigationMode::Normal) {
                self.tiles.set_cursor(previous);
            }
        }
    }
}

impl Element for NameGrid {
    fn kind(&self) -> ElementKind {
        ElementKind::NameGrid
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

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.bounds.translate(dx, dy);
        self.layout_tiles();
    }

    fn resize_by(&mut self, dw: f64, dh: f64) {
        self.bounds.resize(dw, dh);
        self.layout_tiles();
    }

    fn on_hover(&mut self, point: Point) {
        self.tiles.on_mouse_move(point, NavigationMode::Normal);
    }

    fn on_click(&mut self, point: Point) -> bool {
        match self.tiles.hit_test(point, NavigationMode::Normal) {
            Some(tile) => {
                if self.tiles.cursor() != Some(tile) {
                    self.tiles.set_cursor(tile);
                }
                true
            }
            None => false,
        }
    }
}
