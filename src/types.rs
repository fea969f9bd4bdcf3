//! Core types for the page strip
//!
//! A page is a named entry in the strip. Ids are process-unique and
//! immutable after creation; the display name can change.

use std::sync::atomic::{AtomicU32, Ordering};

/// Global counter for generating unique page IDs
static NEXT_PAGE_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque identifier for a page, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u32);

impl PageId {
    /// Allocate a fresh id, distinct from every id handed out before
    pub fn next() -> Self {
        Self(NEXT_PAGE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page-{}", self.0)
    }
}

/// A single entry in the page strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Unique identifier, immutable after creation
    pub id: PageId,
    /// Display name shown on the page button
    pub name: String,
}

impl Page {
    /// Create a new page with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PageId::next(),
            name: name.into(),
        }
    }
}

/// Names of the pages seeded at startup
pub const DEFAULT_PAGE_NAMES: [&str; 4] = ["Info", "Details", "Other", "Ending"];

/// Name given to pages created by the add controls
pub const NEW_PAGE_NAME: &str = "New Page";

/// Suffix appended to a duplicated page's name
pub const DUPLICATE_SUFFIX: &str = " Copy";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_are_unique() {
        let a = Page::new("A");
        let b = Page::new("B");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_page_new_sets_name() {
        let page = Page::new("Details");
        assert_eq!(page.name, "Details");
    }

    #[test]
    fn test_page_id_display() {
        let id = PageId::next();
        assert!(id.to_string().starts_with("page-"));
    }
}
