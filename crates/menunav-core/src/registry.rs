//! Append-only, insertion-ordered registries with optional names.

use crate::element::ElementKind;
use crate::error::{InteractionError, InteractionResult};
use std::collections::HashMap;

/// Ordered collection of one widget kind.
///
/// Indices are stable for the registry's lifetime: there is no removal,
/// only `clear` when a screen reloads its theme.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: ElementKind,
    items: Vec<T>,
    names: HashMap<String, usize>,
}

impl<T> Registry<T> {
    /// Create an empty registry for the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Append an element, optionally under a name. Returns its index.
    pub fn add(&mut self, item: T, name: Option<&str>) -> InteractionResult<usize> {
        let index = self.items.len();
        if let Some(name) = name {
            if self.names.contains_key(name) {
                log::error!("{} element \"{}\" registered twice", self.kind, name);
                return Err(InteractionError::DuplicateName {
                    kind: self.kind,
                    name: name.to_string(),
                });
            }
            self.names.insert(name.to_string(), index);
        }
        self.items.push(item);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Index registered under `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Like `index_of`, but a miss is an error.
    pub fn require(&self, name: &str, screen: &str) -> InteractionResult<usize> {
        self.index_of(name)
            .ok_or_else(|| self.missing(name, screen))
    }

    /// Look up an element by name.
    ///
    /// A miss means the theme and the screen code disagree, so it is
    /// logged before being returned. `screen` is only used for the message.
    pub fn by_name(&self, name: &str, screen: &str) -> InteractionResult<&T> {
        match self.index_of(name).and_then(|i| self.items.get(i)) {
            Some(item) => Ok(item),
            None => Err(self.missing(name, screen)),
        }
    }

    /// Mutable variant of `by_name`.
    pub fn by_name_mut(&mut self, name: &str, screen: &str) -> InteractionResult<&mut T> {
        match self.index_of(name) {
            Some(i) if i < self.items.len() => Ok(&mut self.items[i]),
            _ => Err(self.missing(name, screen)),
        }
    }

    fn missing(&self, name: &str, screen: &str) -> InteractionError {
        log::error!(
            "Can't find {} element \"{}\" in screen {}",
            self.kind,
            name,
            screen
        );
        InteractionError::MissingElement {
            kind: self.kind,
            name: name.to_string(),
            screen: screen.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Drop every element and name.
    pub fn clear(&mut self) {
        self.items.clear();
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_stable_indices() {
        let mut registry = Registry::new(ElementKind::Button);
        assert_eq!(registry.add("a", None).unwrap(), 0);
        assert_eq!(registry.add("b", Some("second")).unwrap(), 1);
        assert_eq!(registry.add("c", None).unwrap(), 2);
        assert_eq!(registry.get(1), Some(&"b"));
        assert_eq!(registry.index_of("second"), Some(1));
        assert_eq!(registry.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lookup_missing_name() {
        let mut registry = Registry::new(ElementKind::Slider);
        registry.add(1, Some("Volume")).unwrap();
        assert_eq!(*registry.by_name("Volume", "Options").unwrap(), 1);

        let err = registry.by_name("Speed", "Options").unwrap_err();
        assert!(matches!(
            err,
            InteractionError::MissingElement { kind: ElementKind::Slider, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Can't find Slider element \"Speed\" in screen Options"
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = Registry::new(ElementKind::Text);
        registry.add(1, Some("Title")).unwrap();
        let err = registry.add(2, Some("Title")).unwrap_err();
        assert!(matches!(err, InteractionError::DuplicateName { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut registry = Registry::new(ElementKind::Static);
        registry.add(1, Some("Logo")).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.index_of("Logo"), None);
    }

    #[test]
    fn test_by_name_mut() {
        let mut registry = Registry::new(ElementKind::Button);
        registry.add(String::from("old"), Some("Ok")).unwrap();
        *registry.by_name_mut("Ok", "Main").unwrap() = String::from("new");
        assert_eq!(registry.get(0).map(String::as_str), Some("new"));
    }
}
