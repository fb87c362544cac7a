//! Per-screen configuration and the navigation mode.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Whether input drives the menu or the theme editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    #[default]
    Normal,
    /// Theme editing: every element is reachable and keys/drags move or
    /// resize the focused one.
    EditTheme,
}

impl NavigationMode {
    pub fn is_edit(self) -> bool {
        self == NavigationMode::EditTheme
    }
}

/// Which keys move focus outside the theme editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyScheme {
    /// Arrow keys navigate spatially, Tab cycles.
    #[default]
    Directional,
    /// Tab cycles, arrows only step values.
    Tab,
}

/// Serializable RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::red()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Screen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    /// Render target width, used for wrap-around navigation.
    pub render_width: f64,
    /// Render target height, used for wrap-around navigation.
    pub render_height: f64,
    /// Elements deeper than this are never hit by the mouse.
    pub z_far: f64,
    pub key_scheme: KeyScheme,
    /// Pixel step for quantized edit-mode drags.
    pub drag_step: f64,
    /// Outline drawn around the focused element in the theme editor.
    pub highlight_color: SerializableColor,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            render_width: 1280.0,
            render_height: 720.0,
            z_far: 100.0,
            key_scheme: KeyScheme::Directional,
            drag_step: 5.0,
            highlight_color: SerializableColor::red(),
        }
    }
}

impl ScreenSettings {
    pub fn outline_color(&self) -> Color {
        self.highlight_color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ScreenSettings::default();
        assert!((settings.render_width - 1280.0).abs() < f64::EPSILON);
        assert!((settings.render_height - 720.0).abs() < f64::EPSILON);
        assert!((settings.drag_step - 5.0).abs() < f64::EPSILON);
        assert_eq!(settings.key_scheme, KeyScheme::Directional);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ScreenSettings =
            serde_json::from_str(r#"{"render_width": 1920.0, "key_scheme": "Tab"}"#).unwrap();
        assert!((settings.render_width - 1920.0).abs() < f64::EPSILON);
        assert!((settings.render_height - 720.0).abs() < f64::EPSILON);
        assert_eq!(settings.key_scheme, KeyScheme::Tab);
    }

    #[test]
    fn test_color_roundtrip() {
        let color: Color = SerializableColor::new(10, 20, 30, 255).into();
        let back = SerializableColor::from(color);
        assert_eq!(back, SerializableColor::new(10, 20, 30, 255));
    }
}
