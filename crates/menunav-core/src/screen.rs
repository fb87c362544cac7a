//! A menu screen: one registry per widget kind plus the screen-wide
//! interaction scope.

use crate::draw::DrawItem;
use crate::element::{Element, ElementKind};
use crate::elements::{
    Background, Button, Equalizer, NameGrid, ParticleEffect, Playlist, Slider, SongList, Static,
    Text,
};
use crate::error::InteractionResult;
use crate::focus::Interactions;
use crate::input::{KeyEvent, MouseEvent};
use crate::interaction::{ElementRef, ElementSource};
use crate::layout::{LayoutProvider, ScreenLayout, WidgetSpec};
use crate::registry::Registry;
use crate::settings::{NavigationMode, ScreenSettings};

/// Typed registries of one screen.
pub struct Registries {
    pub backgrounds: Registry<Background>,
    pub buttons: Registry<Button>,
    pub sliders: Registry<Slider>,
    pub statics: Registry<Static>,
    pub texts: Registry<Text>,
    pub song_lists: Registry<SongList>,
    pub name_grids: Registry<NameGrid>,
    pub equalizers: Registry<Equalizer>,
    pub playlists: Registry<Playlist>,
    pub particle_effects: Registry<ParticleEffect>,
}

impl Default for Registries {
    fn default() -> Self {
        Self {
            backgrounds: Registry::new(ElementKind::Background),
            buttons: Registry::new(ElementKind::Button),
            sliders: Registry::new(ElementKind::Slider),
            statics: Registry::new(ElementKind::Static),
            texts: Registry::new(ElementKind::Text),
            song_lists: Registry::new(ElementKind::SongList),
            name_grids: Registry::new(ElementKind::NameGrid),
            equalizers: Registry::new(ElementKind::Equalizer),
            playlists: Registry::new(ElementKind::Playlist),
            particle_effects: Registry::new(ElementKind::ParticleEffect),
        }
    }
}

impl Registries {
    pub fn clear(&mut self) {
        self.backgrounds.clear();
        self.buttons.clear();
        self.sliders.clear();
        self.statics.clear();
        self.texts.clear();
        self.song_lists.clear();
        self.name_grids.clear();
        self.equalizers.clear();
        self.playlists.clear();
        self.particle_effects.clear();
    }

    /// Total number of elements across all kinds.
    pub fn len(&self) -> usize {
        self.backgrounds.len()
            + self.buttons.len()
            + self.sliders.len()
            + self.statics.len()
            + self.texts.len()
            + self.song_lists.len()
            + self.name_grids.len()
            + self.equalizers.len()
            + self.playlists.len()
            + self.particle_effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn shared<T: Element>(registry: &Registry<T>, index: usize) -> Option<&dyn Element> {
    registry.get(index).map(|element| element as &dyn Element)
}

fn exclusive<T: Element>(registry: &mut Registry<T>, index: usize) -> Option<&mut dyn Element> {
    registry
        .get_mut(index)
        .map(|element| element as &mut dyn Element)
}

impl ElementSource for Registries {
    fn element(&self, element: ElementRef) -> Option<&dyn Element> {
        let index = element.index;
        match element.kind {
            ElementKind::Background => shared(&self.backgrounds, index),
            ElementKind::Button => shared(&self.buttons, index),
            ElementKind::Slider => shared(&self.sliders, index),
            ElementKind::Static => shared(&self.statics, index),
            ElementKind::Text => shared(&self.texts, index),
            ElementKind::SongList => shared(&self.song_lists, index),
            ElementKind::NameGrid => shared(&self.name_grids, index),
            ElementKind::Equalizer => shared(&self.equalizers, index),
            ElementKind::Playlist => shared(&self.playlists, index),
            ElementKind::ParticleEffect => shared(&self.particle_effects, index),
        }
    }

    fn element_mut(&mut self, element: ElementRef) -> Option<&mut dyn Element> {
        let index = element.index;
        match element.kind {
            ElementKind::Background => exclusive(&mut self.backgrounds, index),
            ElementKind::Button => exclusive(&mut self.buttons, index),
            ElementKind::Slider => exclusive(&mut self.sliders, index),
            ElementKind::Static => exclusive(&mut self.statics, index),
            ElementKind::Text => exclusive(&mut self.texts, index),
            ElementKind::SongList => exclusive(&mut self.song_lists, index),
            ElementKind::NameGrid => exclusive(&mut self.name_grids, index),
            ElementKind::Equalizer => exclusive(&mut self.equalizers, index),
            ElementKind::Playlist => exclusive(&mut self.playlists, index),
            ElementKind::ParticleEffect => exclusive(&mut self.particle_effects, index),
        }
    }
}

/// A widget type that has a registry on every screen.
pub trait RegistryMember: Element + Sized + 'static {
    const KIND: ElementKind;

    fn registry(registries: &Registries) -> &Registry<Self>;

    fn registry_mut(registries: &mut Registries) -> &mut Registry<Self>;
}

macro_rules! registry_member {
    ($ty:ty, $field:ident, $kind:expr) => {
        impl RegistryMember for $ty {
            const KIND: ElementKind = $kind;

            fn registry(registries: &Registries) -> &Registry<Self> {
                &registries.$field
            }

            fn registry_mut(registries: &mut Registries) -> &mut Registry<Self> {
                &mut registries.$field
            }
        }
    };
}

registry_member!(Background, backgrounds, ElementKind::Background);
registry_member!(Button, buttons, ElementKind::Button);
registry_member!(Slider, sliders, ElementKind::Slider);
registry_member!(Static, statics, ElementKind::Static);
registry_member!(Text, texts, ElementKind::Text);
registry_member!(SongList, song_lists, ElementKind::SongList);
registry_member!(NameGrid, name_grids, ElementKind::NameGrid);
registry_member!(Equalizer, equalizers, ElementKind::Equalizer);
registry_member!(Playlist, playlists, ElementKind::Playlist);
registry_member!(ParticleEffect, particle_effects, ElementKind::ParticleEffect);

/// A menu screen.
pub struct Screen {
    name: String,
    interactions: Interactions<Registries>,
}

impl Screen {
    /// Create an empty screen.
    pub fn new(name: impl Into<String>, settings: ScreenSettings) -> Self {
        Self {
            name: name.into(),
            interactions: Interactions::new(Registries::default(), settings),
        }
    }

    /// Create a screen and register everything the provider lays out.
    pub fn build(
        provider: &dyn LayoutProvider,
        settings: ScreenSettings,
        mode: NavigationMode,
    ) -> InteractionResult<Self> {
        let layout = provider.layout()?;
        let mut screen = Self::new(layout.name.clone(), settings);
        screen.populate(layout, mode)?;
        Ok(screen)
    }

    /// Discard every element and register the provider's layout again, as
    /// on a theme reload. Focus returns to the first eligible element.
    pub fn rebuild(
        &mut self,
        provider: &dyn LayoutProvider,
        mode: NavigationMode,
    ) -> InteractionResult<()> {
        let layout = provider.layout()?;
        self.interactions.clear();
        self.interactions.source_mut().clear();
        self.populate(layout, mode)
    }

    fn populate(&mut self, layout: ScreenLayout, mode: NavigationMode) -> InteractionResult<()> {
        for spec in layout.elements {
            let name = spec.name.as_deref();
            match spec.widget {
                WidgetSpec::Background(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Button(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Slider(mut element) => {
                    element.set_visible(spec.visible);
                    if element.selection().is_none() && !element.values().is_empty() {
                        element.set_selection(0);
                    }
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Static(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Text(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::SongList(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::NameGrid(grid) => {
                    let mut element =
                        NameGrid::new(grid.bounds, grid.columns, grid.rows, grid.spacing)
                            .with_names(grid.names);
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Equalizer(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::Playlist(playlist) => {
                    let mut element = Playlist::new(playlist.bounds, playlist.entry_height)
                        .with_entries(playlist.entries);
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
                WidgetSpec::ParticleEffect(mut element) => {
                    element.set_visible(spec.visible);
                    self.add(element, name, mode)?;
                }
            }
        }
        if !self.interactions.is_empty() && !self.is_focus_valid(mode) {
            log::warn!("screen {} has no element that can take focus", self.name);
        }
        log::info!(
            "built screen {} with {} elements",
            self.name,
            self.interactions.len()
        );
        Ok(())
    }

    fn is_focus_valid(&self, mode: NavigationMode) -> bool {
        self.interactions
            .cursor()
            .is_some_and(|position| self.interactions.is_focusable(position, mode))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &ScreenSettings {
        self.interactions.settings()
    }

    pub fn registries(&self) -> &Registries {
        self.interactions.source()
    }

    /// The screen-wide interaction scope.
    pub fn interactions(&self) -> &Interactions<Registries> {
        &self.interactions
    }

    /// Register an element, optionally under a name. Returns its index in
    /// the kind's registry.
    pub fn add<T: RegistryMember>(
        &mut self,
        element: T,
        name: Option<&str>,
        mode: NavigationMode,
    ) -> InteractionResult<usize> {
        let index = T::registry_mut(self.interactions.source_mut()).add(element, name)?;
        self.interactions
            .register(ElementRef::new(T::KIND, index), mode);
        Ok(index)
    }

    pub fn registry<T: RegistryMember>(&self) -> &Registry<T> {
        T::registry(self.interactions.source())
    }

    /// Look up a named element.
    pub fn get<T: RegistryMember>(&self, name: &str) -> InteractionResult<&T> {
        T::registry(self.interactions.source()).by_name(name, &self.name)
    }

    /// Mutable lookup of a named element. Call `check_interaction` after
    /// hiding or disabling it.
    pub fn get_mut<T: RegistryMember>(&mut self, name: &str) -> InteractionResult<&mut T> {
        T::registry_mut(self.interactions.source_mut()).by_name_mut(name, &self.name)
    }

    /// Reference to a named element.
    pub fn element_ref<T: RegistryMember>(&self, name: &str) -> InteractionResult<ElementRef> {
        let index = T::registry(self.interactions.source()).require(name, &self.name)?;
        Ok(ElementRef::new(T::KIND, index))
    }

    pub fn focused(&self) -> Option<ElementRef> {
        self.interactions.focused()
    }

    pub fn focused_element(&self) -> Option<&dyn Element> {
        self.interactions.focused_element()
    }

    pub fn focus_to(&mut self, element: ElementRef) -> bool {
        self.interactions.focus_to(element)
    }

    /// Focus a named element.
    pub fn focus_by_name<T: RegistryMember>(&mut self, name: &str) -> InteractionResult<bool> {
        let element = self.element_ref::<T>(name)?;
        Ok(self.focus_to(element))
    }

    /// Whether the named element holds focus.
    pub fn is_focused<T: RegistryMember>(&self, name: &str) -> bool {
        let registry = T::registry(self.interactions.source());
        registry
            .index_of(name)
            .is_some_and(|index| self.focused() == Some(ElementRef::new(T::KIND, index)))
    }

    pub fn check_interaction(&mut self, mode: NavigationMode) -> bool {
        self.interactions.check_interaction(mode)
    }

    pub fn handle_key(&mut self, event: &KeyEvent, mode: NavigationMode) -> bool {
        self.interactions.handle_key(event, mode)
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent, mode: NavigationMode) -> bool {
        self.interactions.handle_mouse(event, mode)
    }

    /// Backgrounds, painted before `draw_order`.
    pub fn backgrounds(&self) -> impl Iterator<Item = &Background> {
        self.registries()
            .backgrounds
            .iter()
            .filter(|background| background.is_visible())
    }

    pub fn draw_order(&self, mode: NavigationMode) -> Vec<DrawItem> {
        self.interactions.draw_order(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InteractionError;
    use crate::geometry::Bounds;
    use crate::input::Key;
    use std::cell::Cell;

    fn centered(cx: f64, cy: f64) -> Bounds {
        Bounds::new(cx - 25.0, cy - 25.0, 50.0, 50.0, 0.0)
    }

    fn main_menu() -> ScreenLayout {
        ScreenLayout::new("Main")
            .with(
                None,
                WidgetSpec::Background(Background::new(Bounds::new(0.0, 0.0, 1280.0, 720.0, 90.0), "bg")),
            )
            .with(Some("Title"), WidgetSpec::Text(Text::new(centered(640.0, 40.0), "Menu")))
            .with(Some("Sing"), WidgetSpec::Button(Button::new(centered(100.0, 100.0), "Sing")))
            .with(Some("Party"), WidgetSpec::Button(Button::new(centered(300.0, 100.0), "Party")))
            .with(Some("Options"), WidgetSpec::Button(Button::new(centered(100.0, 300.0), "Options")))
    }

    fn build() -> Screen {
        Screen::build(&main_menu(), ScreenSettings::default(), NavigationMode::Normal).unwrap()
    }

    fn selected_count(screen: &Screen) -> usize {
        screen
            .interactions()
            .index()
            .iter()
            .filter_map(|element| screen.registries().element(element))
            .filter(|element| element.is_selected())
            .count()
    }

    #[test]
    fn test_build_focuses_first_button() {
        let screen = build();
        assert_eq!(screen.name(), "Main");
        assert_eq!(screen.interactions().len(), 5);
        assert!(screen.is_focused::<Button>("Sing"));
        assert_eq!(selected_count(&screen), 1);
    }

    #[test]
    fn test_navigation_across_registries() {
        let mut screen = build();
        let mode = NavigationMode::Normal;
        assert!(screen.handle_key(&KeyEvent::new(Key::Right), mode));
        assert!(screen.is_focused::<Button>("Party"));
        assert!(screen.handle_key(&KeyEvent::new(Key::Tab), mode));
        assert!(screen.is_focused::<Button>("Options"));
        assert!(screen.handle_key(&KeyEvent::new(Key::Tab), mode));
        assert!(screen.is_focused::<Button>("Sing"));
        assert_eq!(selected_count(&screen), 1);
    }

    #[test]
    fn test_lookup_errors() {
        let screen = build();
        assert_eq!(screen.get::<Button>("Party").unwrap().label, "Party");
        let err = screen.get::<Slider>("Party").err();
        assert!(matches!(
            err,
            Some(InteractionError::MissingElement { kind: ElementKind::Slider, .. })
        ));
    }

    #[test]
    fn test_focus_by_name() {
        let mut screen = build();
        assert!(screen.focus_by_name::<Button>("Options").unwrap());
        assert!(screen.is_focused::<Button>("Options"));
        assert!(screen.focus_by_name::<Button>("Missing").is_err());
    }

    #[test]
    fn test_hide_then_check_interaction() {
        let mut screen = build();
        screen.focus_by_name::<Button>("Party").unwrap();
        screen
            .get_mut::<Button>("Party")
            .unwrap()
            .set_visible(false);
        assert!(screen.check_interaction(NavigationMode::Normal));
        assert!(screen.is_focused::<Button>("Sing"));
    }

    #[test]
    fn test_rebuild_resets_focus() {
        let mut screen = build();
        screen.focus_by_name::<Button>("Options").unwrap();
        screen.rebuild(&main_menu(), NavigationMode::Normal).unwrap();
        assert_eq!(screen.interactions().len(), 5);
        assert_eq!(screen.registry::<Button>().len(), 3);
        assert!(screen.is_focused::<Button>("Sing"));
    }

    #[test]
    fn test_duplicate_name_fails_build() {
        let layout = main_menu().with(Some("Sing"), WidgetSpec::Button(Button::new(Bounds::default(), "again")));
        let result = Screen::build(&layout, ScreenSettings::default(), NavigationMode::Normal);
        assert!(matches!(result.err(), Some(InteractionError::DuplicateName { .. })));
    }

    #[test]
    fn test_draw_order_skips_background() {
        let screen = build();
        let items = screen.draw_order(NavigationMode::Normal);
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.element.kind != ElementKind::Background));
        assert_eq!(screen.backgrounds().count(), 1);
    }

    #[test]
    fn test_editor_reaches_decorations() {
        let mut screen = build();
        let edit = NavigationMode::EditTheme;
        // Sing -> Party -> Options -> wraps to the backdrop.
        for _ in 0..3 {
            assert!(screen.handle_key(&KeyEvent::new(Key::Tab), edit));
        }
        assert_eq!(screen.focused().map(|element| element.kind), Some(ElementKind::Background));
        assert!(screen.handle_key(&KeyEvent::new(Key::Tab), edit));
        assert!(screen.is_focused::<Text>("Title"));
    }

    #[test]
    fn test_build_from_json() {
        let json = r#"{
            "name": "Options",
            "elements": [
                {"kind": "Button", "name": "Back", "visible": false,
                 "bounds": {"position": {"x": 0.0, "y": 0.0}, "width": 50.0, "height": 50.0}},
                {"kind": "Slider", "name": "Speed", "values": ["Slow", "Fast"],
                 "bounds": {"position": {"x": 100.0, "y": 0.0}, "width": 100.0, "height": 40.0},
                 "arrow_left": {"position": {"x": 80.0, "y": 0.0}, "width": 15.0, "height": 40.0},
                 "arrow_right": {"position": {"x": 205.0, "y": 0.0}, "width": 15.0, "height": 40.0}}
            ]
        }"#;
        let layout = ScreenLayout::from_json(json).unwrap();
        let mut screen =
            Screen::build(&layout, ScreenSettings::default(), NavigationMode::Normal).unwrap();
        assert!(!screen.get::<Button>("Back").unwrap().is_visible());
        assert!(screen.is_focused::<Slider>("Speed"));
        assert_eq!(screen.get::<Slider>("Speed").unwrap().value(), Some("Slow"));
        assert!(screen.handle_key(&KeyEvent::new(Key::Right), NavigationMode::Normal));
        assert_eq!(screen.get::<Slider>("Speed").unwrap().value(), Some("Fast"));
    }

    struct CountingProvider {
        layout: ScreenLayout,
        calls: Cell<usize>,
    }

    impl LayoutProvider for CountingProvider {
        fn layout(&self) -> InteractionResult<ScreenLayout> {
            self.calls.set(self.calls.get() + 1);
            self.layout.layout()
        }
    }

    #[test]
    fn test_provider_read_once_per_build() {
        let provider = CountingProvider {
            layout: main_menu(),
            calls: Cell::new(0),
        };
        let mut screen =
            Screen::build(&provider, ScreenSettings::default(), NavigationMode::Normal).unwrap();
        assert_eq!(provider.calls.get(), 1);
        screen.rebuild(&provider, NavigationMode::Normal).unwrap();
        assert_eq!(provider.calls.get(), 2);
        assert_eq!(screen.interactions().len(), 5);
    }

    #[test]
    fn test_playlist_from_layout() {
        let queue = crate::layout::PlaylistSpec {
            bounds: Bounds::new(600.0, 200.0, 300.0, 80.0, 0.0),
            entry_height: 40.0,
            entries: vec!["A".into(), "B".into(), "C".into()],
        };
        let layout = main_menu().with(Some("Queue"), WidgetSpec::Playlist(queue));
        let mut screen =
            Screen::build(&layout, ScreenSettings::default(), NavigationMode::Normal).unwrap();
        let playlist = screen.get_mut::<Playlist>("Queue").unwrap();
        assert_eq!(playlist.visible_rows(), 2);
        assert!(playlist.handle_key(&KeyEvent::new(Key::Down)));
        assert!(playlist.handle_key(&KeyEvent::new(Key::Down)));
        assert_eq!(playlist.selected_entry(), Some("C"));
        assert_eq!(playlist.offset(), 1);
        // Outside the editor the playlist never takes screen focus.
        assert!(screen.is_focused::<Button>("Sing"));
    }
}
