//! Menunav Core Library
//!
//! Focus navigation and interaction registries for themeable menu screens:
//! which widget has focus, how arrows, Tab and the mouse move it, in which
//! order widgets paint, and the theme editor that moves and resizes them.

pub mod draw;
pub mod edit;
pub mod element;
pub mod elements;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod hotspot;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod mouse;
pub mod navigation;
pub mod registry;
pub mod screen;
pub mod settings;

pub use draw::DrawItem;
pub use edit::{DragDelta, DragQuantizer};
pub use element::{Element, ElementKind, ElementState};
pub use error::{InteractionError, InteractionResult};
pub use focus::{Interactions, TabDirection};
pub use geometry::Bounds;
pub use input::{Key, KeyEvent, Modifiers, MouseEvent};
pub use interaction::{ElementRef, ElementSource, InteractionIndex};
pub use layout::{ElementSpec, LayoutProvider, ScreenLayout};
pub use navigation::{Direction, DirectionalPlan, NavCandidate, NavStage};
pub use registry::Registry;
pub use screen::{Registries, RegistryMember, Screen};
pub use settings::{KeyScheme, NavigationMode, ScreenSettings, SerializableColor};
