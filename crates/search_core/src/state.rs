use crate::{bookmark, SearchItem};

/// Externally observable snapshot: the presentation list and the loading flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub items: Vec<SearchItem>,
    pub loading: bool,
}

/// Mutable state owned by the search container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchModel {
    items: Vec<SearchItem>,
    loading: bool,
    dirty: bool,
}

impl SearchModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SearchState {
        SearchState {
            items: self.items.clone(),
            loading: self.loading,
        }
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether a new snapshot needs publishing, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_search(&mut self) {
        self.loading = true;
        self.dirty = true;
    }

    pub(crate) fn finish_search(&mut self, items: Vec<SearchItem>) {
        self.items = items;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn fail_search(&mut self) {
        self.loading = false;
        self.dirty = true;
    }

    /// Flip the saved flag of the entry with `id`, returning the updated entry.
    pub(crate) fn toggle_saved(&mut self, id: &str) -> Option<SearchItem> {
        if !bookmark::toggle_in_place(&mut self.items, id) {
            return None;
        }
        self.dirty = true;
        self.items.iter().find(|item| item.id == id).cloned()
    }
}
