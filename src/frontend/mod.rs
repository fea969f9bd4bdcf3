//! Frontend module for the egui UI
//!
//! # Architecture
//!
//! The strip, the context menu, and the rename dialog are components that
//! receive the current [`StripState`] by reference and return
//! [`StripAction`]s. [`PageStripApp`] owns all state, collects the
//! actions each frame, and applies them after rendering. That keeps the
//! interaction logic in one place and testable without a UI.
//!
//! # Main Types
//!
//! - [`PageStripApp`] - Application state implementing [`eframe::App`]
//! - [`StripState`] / [`StripAction`] - UI state and the callback vocabulary
//!
//! # Submodules
//!
//! - `state` - Shared state container and action types
//! - `strip` - The page strip (buttons, add controls, drag-reorder)
//! - `menu` - The floating per-page context menu
//! - `rename` - The modal rename dialog
//! - `widgets` - Small reusable widgets (menu trigger, add slot)

pub mod menu;
pub mod rename;
pub mod state;
pub mod strip;
pub mod widgets;

pub use menu::PageMenu;
pub use rename::RenameDialog;
pub use state::{MenuState, StripAction, StripState};
pub use strip::{DragPayload, PageStrip, MENU_ANCHOR_OFFSET};
pub use widgets::*;

use crate::config::AppState;

/// Main application state for the page strip
pub struct PageStripApp {
    // === Persistent app state (preferences) ===
    app_state: AppState,

    // === Strip state ===
    state: StripState,

    // === Dialogs ===
    rename: RenameDialog,
}

impl PageStripApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= app_state.ui_preferences.font_scale;
        });
        cc.egui_ctx.set_style(style);

        let state = StripState::seeded();
        tracing::info!(pages = state.pages.len(), "seeded page strip");

        Self {
            app_state,
            state,
            rename: RenameDialog::default(),
        }
    }

    /// Build an app directly from strip state (test constructor)
    #[doc(hidden)]
    pub fn with_state(state: StripState) -> Self {
        Self {
            app_state: AppState::default(),
            state,
            rename: RenameDialog::default(),
        }
    }

    /// Current strip state
    pub fn state(&self) -> &StripState {
        &self.state
    }

    /// Whether the rename dialog is currently open
    pub fn is_renaming(&self) -> bool {
        self.rename.is_open()
    }

    /// Handle a single action from any component.
    ///
    /// Rename requests open the dialog; everything else goes straight to
    /// the state.
    pub fn handle_action(&mut self, action: StripAction) {
        match action {
            StripAction::RequestRename(id) => {
                let current = self
                    .state
                    .pages
                    .get(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.rename.open(id, current);
            }
            other => self.state.apply(other),
        }
    }
}

impl eframe::App for PageStripApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // The strip lives in a top panel; the menu anchors below its
        // buttons. While the rename dialog is open the strip is disabled,
        // suspending further edits until the dialog resolves.
        egui::TopBottomPanel::top("page_strip").show(ctx, |ui| {
            ui.add_enabled_ui(!self.rename.is_open(), |ui| {
                actions.extend(PageStrip::show(&self.state, ui));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.active_page() {
                Some(page) => {
                    ui.heading(&page.name);
                }
                None => {
                    // active_id dangles after the active page was deleted.
                    ui.weak("No page selected");
                }
            }
        });

        // Floating context menu, rendered before this frame's actions are
        // applied so the click that opens it can never also close it.
        actions.extend(PageMenu::show(&self.state, ctx));

        actions.extend(self.rename.show(ctx));

        for action in actions {
            self.handle_action(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
