//! The interaction index: tab order across every registry of a scope.

use crate::element::{Element, ElementKind};
use serde::{Deserialize, Serialize};

/// Reference to one element: its kind and its index in that kind's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub index: usize,
}

impl ElementRef {
    pub fn new(kind: ElementKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Resolves element references for one interaction scope.
///
/// A screen resolves through its typed registries; a composite widget
/// resolves through its own list of child elements.
pub trait ElementSource {
    fn element(&self, element: ElementRef) -> Option<&dyn Element>;

    fn element_mut(&mut self, element: ElementRef) -> Option<&mut dyn Element>;
}

impl ElementSource for Vec<Box<dyn Element>> {
    fn element(&self, element: ElementRef) -> Option<&dyn Element> {
        match self.get(element.index) {
            Some(boxed) if boxed.kind() == element.kind => {
                let element: &dyn Element = &**boxed;
                Some(element)
            }
            _ => None,
        }
    }

    fn element_mut(&mut self, element: ElementRef) -> Option<&mut dyn Element> {
        match self.get_mut(element.index) {
            Some(boxed) if boxed.kind() == element.kind => {
                let element: &mut dyn Element = &mut **boxed;
                Some(element)
            }
            _ => None,
        }
    }
}

/// Ordered, append-only list of element references.
#[derive(Debug, Clone, Default)]
pub struct InteractionIndex {
    entries: Vec<ElementRef>,
}

impl InteractionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its position.
    pub fn push(&mut self, element: ElementRef) -> usize {
        self.entries.push(element);
        self.entries.len() - 1
    }

    pub fn get(&self, position: usize) -> Option<ElementRef> {
        self.entries.get(position).copied()
    }

    /// Position of the first entry referencing `element`.
    pub fn position_of(&self, element: ElementRef) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.entries.iter().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Button, Text};
    use crate::geometry::Bounds;

    #[test]
    fn test_index_order() {
        let mut index = InteractionIndex::new();
        let a = ElementRef::new(ElementKind::Button, 0);
        let b = ElementRef::new(ElementKind::Slider, 0);
        assert_eq!(index.push(a), 0);
        assert_eq!(index.push(b), 1);
        assert_eq!(index.position_of(b), Some(1));
        assert_eq!(index.get(2), None);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![a, b]);
        index.clear();
        assert!(index.is_empty());
    }

    #[test]
    fn test_vec_source_checks_kind() {
        let children: Vec<Box<dyn Element>> = vec![
            Box::new(Button::new(Bounds::default(), "A")),
            Box::new(Text::new(Bounds::default(), "label")),
        ];
        assert!(children.element(ElementRef::new(ElementKind::Button, 0)).is_some());
        assert!(children.element(ElementRef::new(ElementKind::Button, 1)).is_none());
        assert!(children.element(ElementRef::new(ElementKind::Text, 1)).is_some());
        assert!(children.element(ElementRef::new(ElementKind::Text, 5)).is_none());
    }
}
