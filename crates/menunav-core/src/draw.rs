//! Back-to-front paint order.

use crate::focus::Interactions;
use crate::interaction::{ElementRef, ElementSource};
use crate::settings::NavigationMode;
use peniko::Color;

/// One element to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub element: ElementRef,
    pub z: f64,
    /// Theme editor outline around the focused element.
    pub outline: Option<Color>,
}

impl<S: ElementSource> Interactions<S> {
    /// Paintable elements sorted far to near.
    ///
    /// Elements with equal depth keep registration order. The theme editor
    /// also draws hidden elements so they can be found and moved.
    pub fn draw_order(&self, mode: NavigationMode) -> Vec<DrawItem> {
        let outline = self.settings.outline_color();
        let mut items: Vec<DrawItem> = self
            .index
            .iter()
            .enumerate()
            .filter_map(|(position, element)| {
                let widget = self.source.element(element)?;
                if !element.kind.is_paintable() || !(widget.is_visible() || mode.is_edit()) {
                    return None;
                }
                let focused = mode.is_edit() && self.cursor == Some(position);
                Some(DrawItem {
                    element,
                    z: widget.bounds().z,
                    outline: focused.then_some(outline),
                })
            })
            .collect();
        items.sort_by(|a, b| b.z.total_cmp(&a.z));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind};
    use crate::elements::{Background, Button};
    use crate::focus::tests::{boxed, scope};
    use crate::geometry::Bounds;

    fn at_depth(z: f64) -> Box<dyn Element> {
        boxed(Button::new(Bounds::new(0.0, 0.0, 10.0, 10.0, z), ""))
    }

    fn order(items: &[DrawItem]) -> Vec<usize> {
        items.iter().map(|item| item.element.index).collect()
    }

    #[test]
    fn test_far_to_near() {
        let scope = scope(
            vec![at_depth(1.0), at_depth(5.0), at_depth(3.0)],
            NavigationMode::Normal,
        );
        let items = scope.draw_order(NavigationMode::Normal);
        assert_eq!(order(&items), vec![1, 2, 0]);
        assert!(items.iter().all(|item| item.outline.is_none()));
    }

    #[test]
    fn test_equal_depth_is_stable() {
        let scope = scope(
            vec![at_depth(2.0), at_depth(2.0), at_depth(4.0), at_depth(2.0)],
            NavigationMode::Normal,
        );
        let first = scope.draw_order(NavigationMode::Normal);
        assert_eq!(order(&first), vec![2, 0, 1, 3]);
        assert_eq!(first, scope.draw_order(NavigationMode::Normal));
    }

    #[test]
    fn test_background_and_hidden_excluded() {
        let scope = scope(
            vec![
                boxed(Background::new(Bounds::new(0.0, 0.0, 1280.0, 720.0, 50.0), "bg")),
                at_depth(1.0),
                boxed(Button::new(Bounds::default(), "hidden").hidden()),
            ],
            NavigationMode::Normal,
        );
        let items = scope.draw_order(NavigationMode::Normal);
        assert_eq!(order(&items), vec![1]);

        let edit = scope.draw_order(NavigationMode::EditTheme);
        assert_eq!(order(&edit), vec![1, 2]);
        assert!(edit.iter().all(|item| item.element.kind != ElementKind::Background));
    }

    #[test]
    fn test_focused_outlined_in_editor() {
        let scope = scope(vec![at_depth(1.0), at_depth(2.0)], NavigationMode::Normal);
        let items = scope.draw_order(NavigationMode::EditTheme);
        let outlined: Vec<_> = items.iter().filter(|item| item.outline.is_some()).collect();
        assert_eq!(outlined.len(), 1);
        assert_eq!(outlined[0].element.index, 0);
        assert_eq!(outlined[0].outline, Some(Color::from_rgba8(255, 0, 0, 255)));
    }
}
