//! Screen layout description supplied by the theme.

use crate::elements::{
    Background, Button, Equalizer, MAX_TILES, ParticleEffect, Slider, SongList, Static, Text,
};
use crate::element::ElementKind;
use crate::error::{InteractionError, InteractionResult};
use crate::geometry::Bounds;
use serde::{Deserialize, Serialize};

/// Supplies the elements of a screen at build time.
pub trait LayoutProvider {
    fn layout(&self) -> InteractionResult<ScreenLayout>;
}

/// Geometry and names of a name grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameGridSpec {
    pub bounds: Bounds,
    pub columns: usize,
    pub rows: usize,
    #[serde(default)]
    pub spacing: f64,
    #[serde(default)]
    pub names: Vec<String>,
}

fn default_entry_height() -> f64 {
    40.0
}

/// Geometry and queue of a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSpec {
    pub bounds: Bounds,
    #[serde(default = "default_entry_height")]
    pub entry_height: f64,
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Kind-specific data of one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WidgetSpec {
    Background(Background),
    Button(Button),
    Slider(Slider),
    Static(Static),
    Text(Text),
    SongList(SongList),
    NameGrid(NameGridSpec),
    Equalizer(Equalizer),
    Playlist(PlaylistSpec),
    ParticleEffect(ParticleEffect),
}

impl WidgetSpec {
    pub fn kind(&self) -> ElementKind {
        match self {
            WidgetSpec::Background(_) => ElementKind::Background,
            WidgetSpec::Button(_) => ElementKind::Button,
            WidgetSpec::Slider(_) => ElementKind::Slider,
            WidgetSpec::Static(_) => ElementKind::Static,
            WidgetSpec::Text(_) => ElementKind::Text,
            WidgetSpec::SongList(_) => ElementKind::SongList,
            WidgetSpec::NameGrid(_) => ElementKind::NameGrid,
            WidgetSpec::Equalizer(_) => ElementKind::Equalizer,
            WidgetSpec::Playlist(_) => ElementKind::Playlist,
            WidgetSpec::ParticleEffect(_) => ElementKind::ParticleEffect,
        }
    }
}

fn default_visible() -> bool {
    true
}

/// One element of a layout, in registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Name the screen code looks the element up by.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub widget: WidgetSpec,
}

impl ElementSpec {
    pub fn new(name: Option<&str>, widget: WidgetSpec) -> Self {
        Self {
            name: name.map(str::to_string),
            visible: true,
            widget,
        }
    }

    /// Reject values no widget can represent.
    pub fn validate(&self) -> InteractionResult<()> {
        let label = self.name.as_deref().unwrap_or("<unnamed>");
        match &self.widget {
            WidgetSpec::Slider(slider) => {
                if let Some(selection) = slider.selection() {
                    if selection >= slider.values().len() {
                        return Err(InteractionError::Layout(format!(
                            "slider \"{label}\" selects value {selection} of {}",
                            slider.values().len()
                        )));
                    }
                }
            }
            WidgetSpec::Playlist(playlist) if playlist.entry_height <= 0.0 => {
                return Err(InteractionError::Layout(format!(
                    "playlist \"{label}\" has entry height {}",
                    playlist.entry_height
                )));
            }
            WidgetSpec::NameGrid(grid) => match grid.columns.checked_mul(grid.rows) {
                Some(0) => {
                    return Err(InteractionError::Layout(format!(
                        "name grid \"{label}\" has no tiles"
                    )));
                }
                Some(tiles) if tiles <= MAX_TILES => {}
                _ => {
                    return Err(InteractionError::Layout(format!(
                        "name grid \"{label}\" has more than {MAX_TILES} tiles"
                    )));
                }
            },
            _ => {}
        }
        Ok(())
    }
}

/// All elements of one screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl ScreenLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with(mut self, name: Option<&str>, widget: WidgetSpec) -> Self {
        self.elements.push(ElementSpec::new(name, widget));
        self
    }

    /// Serialize the layout to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl LayoutProvider for ScreenLayout {
    fn layout(&self) -> InteractionResult<ScreenLayout> {
        for element in &self.elements {
            element.validate()?;
        }
        Ok(self.clone())
    }
}
