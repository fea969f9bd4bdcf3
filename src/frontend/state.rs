//! Shared state and action types for the page strip
//!
//! The strip, the context menu, and the dialogs never mutate state
//! directly. They return `StripAction`s, and [`StripState::apply`] is the
//! single mutation point, run by the app after rendering. This keeps the
//! interaction logic testable without rendering anything.

use egui::Pos2;

use crate::store::PageList;
use crate::types::{Page, PageId, NEW_PAGE_NAME};

/// The open context menu: which page it targets and where it renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    /// Page the menu is bound to
    pub page_id: PageId,
    /// Absolute screen position of the menu's top-left corner,
    /// recomputed each time the menu opens
    pub position: Pos2,
}

/// All UI state owned by the page strip
#[derive(Debug, Clone)]
pub struct StripState {
    /// Ordered pages, mutated only via [`StripState::apply`]
    pub pages: PageList,
    /// The active page. May dangle after the active page is deleted, in
    /// which case no page renders as active.
    pub active_id: PageId,
    /// Last page that received interaction focus
    pub focused_id: Option<PageId>,
    /// Open context menu, or `None` when closed
    pub menu: Option<MenuState>,
}

impl StripState {
    /// Create the startup state: default pages seeded, first page active
    pub fn seeded() -> Self {
        let pages = PageList::seeded();
        let active_id = pages
            .get_at(0)
            .map(|p| p.id)
            .unwrap_or_else(PageId::next);
        Self {
            pages,
            active_id,
            focused_id: None,
            menu: None,
        }
    }

    /// Whether the given page is the active one
    pub fn is_active(&self, id: PageId) -> bool {
        self.active_id == id
    }

    /// The active page, or `None` when `active_id` dangles
    pub fn active_page(&self) -> Option<&Page> {
        self.pages.get(self.active_id)
    }

    /// The page targeted by the open menu, if the menu is open and its
    /// target still exists
    pub fn menu_page(&self) -> Option<&Page> {
        self.menu.and_then(|m| self.pages.get(m.page_id))
    }

    /// Apply a single action.
    ///
    /// Actions are applied synchronously and serially in the order the UI
    /// delivered them.
    pub fn apply(&mut self, action: StripAction) {
        match action {
            StripAction::SetActive(id) => {
                self.active_id = id;
                self.focused_id = Some(id);
            }
            StripAction::AddPageAt(index) => {
                self.pages.insert_at(index, Page::new(NEW_PAGE_NAME));
            }
            StripAction::MovePage { from, to } => {
                self.pages.move_to(from, to);
            }
            StripAction::OpenMenu { page_id, position } => {
                self.menu = Some(MenuState { page_id, position });
            }
            StripAction::CloseMenu => {
                self.menu = None;
            }
            StripAction::RequestRename(_) => {
                // Dialog lifecycle is owned by the app shell.
            }
            StripAction::RenamePage { id, name } => {
                if !name.is_empty() {
                    self.pages.rename_by_id(id, name);
                }
            }
            StripAction::DuplicatePage(id) => {
                self.pages.duplicate_after(id);
                self.menu = None;
            }
            StripAction::DeletePage(id) => {
                // active_id and focused_id are intentionally left alone;
                // deleting the active page leaves them dangling and no
                // page renders as active.
                self.pages.remove_by_id(id);
                self.menu = None;
            }
        }
    }
}

impl Default for StripState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Actions the strip components can emit
///
/// Components return `Vec<StripAction>` instead of mutating state
/// directly. This enables:
/// - Testable interaction logic
/// - Clear separation between rendering and state
/// - Centralized action handling in the app
#[derive(Debug, Clone, PartialEq)]
pub enum StripAction {
    /// Make a page active (also focuses it)
    SetActive(PageId),
    /// Insert a new page at the given position. Used by the trailing add
    /// control (index = len) and the between-pages controls
    /// (index = position + 1).
    AddPageAt(usize),
    /// Move the page at `from` so it lands at position `to`
    MovePage { from: usize, to: usize },
    /// Open the context menu for a page at an absolute position
    OpenMenu { page_id: PageId, position: Pos2 },
    /// Close the context menu
    CloseMenu,
    /// Ask the app to open the rename dialog for a page
    RequestRename(PageId),
    /// Apply a completed rename. Empty names are ignored.
    RenamePage { id: PageId, name: String },
    /// Duplicate a page and close the menu
    DuplicatePage(PageId),
    /// Delete a page and close the menu
    DeletePage(PageId),
}
