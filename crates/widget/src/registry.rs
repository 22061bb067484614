//! Keep the ordered list of content surfaces the menu can switch to.
use crate::core::Surface;
use crate::core::surface;

use slotmap::{SlotMap, new_key_type};
use smol_str::SmolStr;

new_key_type! {
    /// A unique identifier for a registry [`Item`].
    pub struct Id;
}

/// An entry of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// The title shown in the menu.
    pub label: SmolStr,
    /// The name of the icon shown next to the label, if any.
    pub icon: Option<SmolStr>,
    /// The content surface shown when the entry is selected.
    pub target: Surface,
}

impl Item {
    /// Creates a new [`Item`] with the given label and target surface.
    pub fn new(label: impl Into<SmolStr>, target: Surface) -> Self {
        Self {
            label: label.into(),
            icon: None,
            target,
        }
    }

    /// Sets the icon of the [`Item`].
    #[must_use]
    pub fn icon(mut self, icon: impl Into<SmolStr>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The ordered content entries of a side menu.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    items: SlotMap<Id, Item>,
    order: Vec<Id>,
}

impl Registry {
    /// Creates an empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an [`Item`] and returns its [`Id`].
    pub fn push(&mut self, item: Item) -> Id {
        let id = self.items.insert(item);
        self.order.push(id);
        id
    }

    /// Inserts an [`Item`] at `index`, clamped to the length of the registry.
    pub fn insert(&mut self, index: usize, item: Item) -> Id {
        let id = self.items.insert(item);
        self.order.insert(index.min(self.order.len()), id);
        id
    }

    /// Removes an [`Item`] by its [`Id`].
    pub fn remove(&mut self, id: Id) -> Option<Item> {
        let item = self.items.remove(id)?;

        if let Some(position) = self.position(id) {
            let _ = self.order.remove(position);
        }

        Some(item)
    }

    /// Returns the [`Item`] with the given [`Id`].
    pub fn get(&self, id: Id) -> Option<&Item> {
        self.items.get(id)
    }

    /// Returns the position of an [`Item`] in the menu.
    pub fn position(&self, id: Id) -> Option<usize> {
        self.order.iter().position(|key| *key == id)
    }

    /// Returns the [`Id`] of the first entry targeting the given surface.
    pub fn find(&self, target: surface::Id) -> Option<Id> {
        self.iter()
            .find(|(_, item)| item.target.id == target)
            .map(|(id, _)| id)
    }

    /// Iterate over the entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &Item)> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(*id).map(|item| (*id, item)))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_menu_order() {
        let mut registry = Registry::new();

        let home = registry.push(Item::new("Home", Surface::content()).icon("house"));
        let settings = registry.push(Item::new("Settings", Surface::content()));
        let profile = registry.insert(1, Item::new("Profile", Surface::content()));

        let labels: Vec<_> = registry.iter().map(|(_, item)| item.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Profile", "Settings"]);

        assert_eq!(registry.position(home), Some(0));
        assert_eq!(registry.position(profile), Some(1));
        assert_eq!(registry.position(settings), Some(2));
        assert_eq!(
            registry.get(home).and_then(|item| item.icon.as_deref()),
            Some("house")
        );
    }

    #[test]
    fn test_removed_ids_stay_invalid() {
        let mut registry = Registry::new();
        let first = registry.push(Item::new("First", Surface::content()));
        let second = registry.push(Item::new("Second", Surface::content()));

        assert!(registry.remove(first).is_some());
        assert!(registry.remove(first).is_none());
        assert!(registry.get(first).is_none());

        let third = registry.push(Item::new("Third", Surface::content()));
        assert_ne!(first, third);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position(second), Some(0));
    }

    #[test]
    fn test_insert_past_the_end_appends() {
        let mut registry = Registry::new();
        let _ = registry.push(Item::new("First", Surface::content()));
        let last = registry.insert(10, Item::new("Last", Surface::content()));

        assert_eq!(registry.position(last), Some(1));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_find_by_target() {
        let mut registry = Registry::new();
        let target = Surface::content();
        let id = registry.push(Item::new("Inbox", target));

        assert_eq!(registry.find(target.id), Some(id));
        assert_eq!(registry.find(surface::Id::unique()), None);
    }
}
