#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

use crate::doc::{DocStore, ObjectId};

/// The set of selected object ids.
///
/// Order is not tracked; callers that need an order walk the scene and
/// filter with [`SelectionSet::contains`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ObjectId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: ObjectId) -> bool {
        self.ids.insert(id)
    }

    /// Add `id` if absent, remove it if present. Returns true when it ends up selected.
    pub fn toggle(&mut self, id: ObjectId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Make `ids` the whole selection.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.ids.clear();
        self.ids.extend(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in scene (z) order, skipping any that no longer resolve.
    #[must_use]
    pub fn in_scene_order(&self, doc: &DocStore) -> Vec<ObjectId> {
        doc.iter().map(|o| o.id).filter(|id| self.ids.contains(id)).collect()
    }
}
