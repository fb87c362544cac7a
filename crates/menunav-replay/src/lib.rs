//! Headless replay of input scripts against a menu screen.
//!
//! A script is a JSON list of key and mouse events plus the navigation
//! mode to run them in. Each event is fed to the screen in order and the
//! resulting focus is recorded, followed by the final draw order.
//!
//! ```json
//! { "mode": "Normal",
//!   "events": [
//!     { "type": "key", "key": "Right" },
//!     { "type": "mouse", "position": { "x": 100.0, "y": 100.0 }, "left_click": true }
//!   ] }
//! ```

use menunav_core::{
    DrawItem, ElementKind, ElementRef, InteractionError, KeyEvent, MouseEvent, NavigationMode,
    Screen, ScreenLayout, ScreenSettings, SerializableColor,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] InteractionError),
}

pub type ReplayResult<T> = Result<T, ReplayError>;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Events to replay and the mode to replay them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub mode: NavigationMode,
    #[serde(default)]
    pub settings: ScreenSettings,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub handled: bool,
    pub focused: Option<ElementRef>,
}

/// Serializable form of a draw-order entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawEntry {
    pub kind: ElementKind,
    pub index: usize,
    pub z: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<SerializableColor>,
}

impl From<DrawItem> for DrawEntry {
    fn from(item: DrawItem) -> Self {
        Self {
            kind: item.element.kind,
            index: item.element.index,
            z: item.z,
            outline: item.outline.map(SerializableColor::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    pub draw_order: Vec<DrawEntry>,
}

impl ReplayReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Feed every scripted event to `screen`.
pub fn replay(screen: &mut Screen, script: &Script) -> ReplayReport {
    let steps = script
        .events
        .iter()
        .map(|event| {
            let handled = match event {
                ScriptEvent::Key(key) => screen.handle_key(key, script.mode),
                ScriptEvent::Mouse(mouse) => screen.handle_mouse(mouse, script.mode),
            };
            let focused = screen.focused();
            log::debug!("{:?} handled={} focused={:?}", event, handled, focused);
            StepReport { handled, focused }
        })
        .collect();

    ReplayReport {
        steps,
        draw_order: screen
            .draw_order(script.mode)
            .into_iter()
            .map(DrawEntry::from)
            .collect(),
    }
}

pub fn load_layout(path: &Path) -> ReplayResult<ScreenLayout> {
    let json = std::fs::read_to_string(path)?;
    Ok(ScreenLayout::from_json(&json)?)
}

pub fn load_script(path: &Path) -> ReplayResult<Script> {
    let json = std::fs::read_to_string(path)?;
    Ok(Script::from_json(&json)?)
}

/// Build the screen described by `layout_path` and replay `script_path`
/// against it.
pub fn run(layout_path: &Path, script_path: &Path) -> ReplayResult<ReplayReport> {
    let layout = load_layout(layout_path)?;
    let script = load_script(script_path)?;
    let mut screen = Screen::build(&layout, script.settings.clone(), script.mode)?;
    log::info!(
        "replaying {} events on screen {}",
        script.events.len(),
        screen.name()
    );
    Ok(replay(&mut screen, &script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const LAYOUT: &str = r#"{
        "name": "Main",
        "elements": [
            {"kind": "Button", "name": "Sing", "label": "Sing",
             "bounds": {"position": {"x": 75.0, "y": 75.0}, "width": 50.0, "height": 50.0}},
            {"kind": "Button", "name": "Party", "label": "Party",
             "bounds": {"position": {"x": 275.0, "y": 75.0}, "width": 50.0, "height": 50.0}},
            {"kind": "Button", "name": "Options", "label": "Options",
             "bounds": {"position": {"x": 75.0, "y": 275.0}, "width": 50.0, "height": 50.0}}
        ]
    }"#;

    const SCRIPT: &str = r#"{
        "mode": "Normal",
        "events": [
            {"type": "key", "key": "Right"},
            {"type": "key", "key": "Down"},
            {"type": "key", "key": "Up"},
            {"type": "mouse", "position": {"x": 100.0, "y": 300.0}, "left_click": true}
        ]
    }"#;

    #[test]
    fn test_replay_from_files() {
        let dir = tempdir().unwrap();
        let layout_path = dir.path().join("layout.json");
        let script_path = dir.path().join("script.json");
        fs::write(&layout_path, LAYOUT).unwrap();
        fs::write(&script_path, SCRIPT).unwrap();

        let report = run(&layout_path, &script_path).unwrap();
        let focused: Vec<_> = report
            .steps
            .iter()
            .map(|step| step.focused.map(|element| element.index))
            .collect();
        assert_eq!(focused, vec![Some(1), Some(2), Some(0), Some(2)]);
        assert!(report.steps.iter().all(|step| step.handled));
        assert_eq!(report.draw_order.len(), 3);
        assert!(report.draw_order.iter().all(|entry| entry.outline.is_none()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_layout(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }

    #[test]
    fn test_bad_script() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("script.json");
        fs::write(&path, r#"{"events": [{"type": "joystick"}]}"#).unwrap();
        assert!(matches!(load_script(&path), Err(ReplayError::Json(_))));
    }

    #[test]
    fn test_edit_mode_outlines_cursor() {
        let layout = ScreenLayout::from_json(LAYOUT).unwrap();
        let script = Script {
            mode: NavigationMode::EditTheme,
            ..Script::default()
        };
        let mut screen = Screen::build(&layout, script.settings.clone(), script.mode).unwrap();
        let report = replay(&mut screen, &script);
        assert!(report.steps.is_empty());
        let outlined: Vec<_> = report
            .draw_order
            .iter()
            .filter(|entry| entry.outline.is_some())
            .collect();
        assert_eq!(outlined.len(), 1);
        assert_eq!(outlined[0].outline, Some(SerializableColor::red()));
        assert!(report.to_json().unwrap().contains("\"outline\""));
    }
}
