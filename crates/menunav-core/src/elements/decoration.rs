//! Decorative kinds: never enabled, only reachable in the theme editor.

use crate::element::{Element, ElementKind, ElementState};
use crate::geometry::Bounds;
use serde::{Deserialize, Serialize};

macro_rules! decoration {
    ($name:ident, $kind:expr) => {
        impl Element for $name {
            fn kind(&self) -> ElementKind {
                $kind
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
                false
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
    };
}

/// Full-screen backdrop. Painted before the draw-order pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Background {
    pub bounds: Bounds,
    #[serde(default)]
    pub texture: String,
    #[serde(skip)]
    state: ElementState,
}

impl Background {
    pub fn new(bounds: Bounds, texture: impl Into<String>) -> Self {
        Self {
            bounds,
            texture: texture.into(),
            state: ElementState::default(),
        }
    }
}

decoration!(Background, ElementKind::Background);

/// A static image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Static {
    pub bounds: Bounds,
    #[serde(default)]
    pub texture: String,
    #[serde(skip)]
    state: ElementState,
}

impl Static {
    pub fn new(bounds: Bounds, texture: impl Into<String>) -> Self {
        Self {
            bounds,
            texture: texture.into(),
            state: ElementState::default(),
        }
    }
}

decoration!(Static, ElementKind::Static);

/// A text label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Text {
    pub bounds: Bounds,
    #[serde(default)]
    pub text: String,
    #[serde(skip)]
    state: ElementState,
}

impl Text {
    pub fn new(bounds: Bounds, text: impl Into<String>) -> Self {
        Self {
            bounds,
            text: text.into(),
            state: ElementState::default(),
        }
    }
}

decoration!(Text, ElementKind::Text);

/// Audio spectrum bars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equalizer {
    pub bounds: Bounds,
    /// Number of bars drawn.
    #[serde(default)]
    pub bars: usize,
    #[serde(skip)]
    state: ElementState,
}

impl Equalizer {
    pub fn new(bounds: Bounds, bars: usize) -> Self {
        Self {
            bounds,
            bars,
            state: ElementState::default(),
        }
    }
}

decoration!(Equalizer, ElementKind::Equalizer);

/// Area in which particles (stars, snow) are spawned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub bounds: Bounds,
    #[serde(default)]
    pub max_particles: usize,
    #[serde(skip)]
    state: ElementState,
}

impl ParticleEffect {
    pub fn new(bounds: Bounds, max_particles: usize) -> Self {
        Self {
            bounds,
            max_particles,
            state: ElementState::default(),
        }
    }
}

decoration!(ParticleEffect, ElementKind::ParticleEffect);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorations_never_enabled() {
        let text = Text::new(Bounds::new(0.0, 0.0, 50.0, 20.0, 0.0), "Title");
        let image = Static::new(Bounds::new(0.0, 0.0, 50.0, 20.0, 0.0), "logo");
        assert!(text.is_visible() && !text.is_enabled());
        assert!(image.is_visible() && !image.is_enabled());
        assert!(text.is_edit_only());
    }

    #[test]
    fn test_decoration_moves() {
        let mut effect = ParticleEffect::new(Bounds::new(0.0, 0.0, 50.0, 20.0, 0.0), 40);
        effect.move_by(-5.0, 5.0);
        assert!((effect.bounds.x() + 5.0).abs() < f64::EPSILON);
        assert!((effect.bounds.y() - 5.0).abs() < f64::EPSILON);
    }
}
