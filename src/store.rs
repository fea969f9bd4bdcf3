//! Ordered page storage
//!
//! [`PageList`] is the repository every handler goes through instead of
//! scanning the underlying vector ad hoc. Order is significant (it is the
//! visual order of the strip) and ids are unique within the list.
//!
//! Lookups by a missing id are no-ops; callers rely on that for the
//! silent-degradation behavior of the menu handlers.

use crate::types::{Page, PageId, DEFAULT_PAGE_NAMES, DUPLICATE_SUFFIX};

/// Ordered, id-addressable collection of pages
#[derive(Debug, Clone, Default)]
pub struct PageList {
    pages: Vec<Page>,
}

impl PageList {
    /// Create an empty page list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page list seeded with the default startup pages
    pub fn seeded() -> Self {
        Self {
            pages: DEFAULT_PAGE_NAMES.iter().copied().map(Page::new).collect(),
        }
    }

    /// Create a page list from existing pages (mainly for tests)
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate pages in visual order
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Page at a position
    pub fn get_at(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Position of the page with the given id
    pub fn find_index(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Page with the given id
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Whether a page with the given id is present
    pub fn contains(&self, id: PageId) -> bool {
        self.find_index(id).is_some()
    }

    /// Insert a page at `index`, shifting subsequent entries right.
    ///
    /// `index` is clamped to `[0, len]`.
    pub fn insert_at(&mut self, index: usize, page: Page) {
        let index = index.min(self.pages.len());
        tracing::debug!(index, name = %page.name, "inserting page");
        self.pages.insert(index, page);
    }

    /// Remove the page with the given id.
    ///
    /// Returns the removed page, or `None` (leaving the list unchanged)
    /// if no page matches.
    pub fn remove_by_id(&mut self, id: PageId) -> Option<Page> {
        let index = self.find_index(id)?;
        let page = self.pages.remove(index);
        tracing::debug!(index, name = %page.name, "removed page");
        Some(page)
    }

    /// Move the page at `from` so it ends up at position `to`.
    ///
    /// The entry is removed first and then reinserted into the shortened
    /// list. That two-step order determines where an item lands when it is
    /// dragged past itself, so it must not be collapsed into a swap.
    pub fn move_to(&mut self, from: usize, to: usize) {
        if from >= self.pages.len() {
            return;
        }
        let page = self.pages.remove(from);
        let to = to.min(self.pages.len());
        self.pages.insert(to, page);
        tracing::debug!(from, to, "moved page");
    }

    /// Replace the name of the page with the given id.
    ///
    /// No validation is applied; empty and whitespace names are permitted.
    pub fn rename_by_id(&mut self, id: PageId, new_name: impl Into<String>) {
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            page.name = new_name.into();
            tracing::debug!(%id, name = %page.name, "renamed page");
        }
    }

    /// Duplicate the page with the given id, inserting the copy directly
    /// after the original.
    ///
    /// The copy gets a fresh id and the original name with " Copy"
    /// appended. Returns the new page's id, or `None` if the original is
    /// not present.
    pub fn duplicate_after(&mut self, id: PageId) -> Option<PageId> {
        let index = self.find_index(id)?;
        let copy = Page::new(format!("{}{}", self.pages[index].name, DUPLICATE_SUFFIX));
        let copy_id = copy.id;
        self.pages.insert(index + 1, copy);
        tracing::debug!(%id, %copy_id, "duplicated page");
        Some(copy_id)
    }

    /// Names in visual order (test helper)
    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.name.as_str()).collect()
    }
}
