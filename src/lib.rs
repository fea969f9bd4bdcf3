//! # PageStrip-RS: Reorderable Page Strip
//!
//! A small interactive desktop widget: a reorderable page strip with add,
//! rename, duplicate, and delete operations, plus a floating per-page
//! context menu. Pages reorder continuously while dragged over their
//! siblings, using egui's built-in drag-and-drop engine.
//!
//! ## Architecture
//!
//! - **Store**: [`store::PageList`], an ordered id-addressable repository
//! - **State**: [`frontend::StripState`], the full UI state in one struct
//! - **Components**: strip, context menu, and rename dialog return
//!   [`frontend::StripAction`]s instead of mutating state
//! - **Orchestrator**: [`PageStripApp`] applies actions after each frame
//!
//! The page list is ephemeral, seeded fresh at startup. Only UI
//! preferences persist, in the platform data directory under
//! `dev.hxyulin.pagestrip-rs`.
//!
//! ## Example
//!
//! ```ignore
//! use pagestrip_rs::{config::AppState, frontend::PageStripApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!
//!     let native_options = eframe::NativeOptions::default();
//!     eframe::run_native(
//!         "PageStrip",
//!         native_options,
//!         Box::new(|cc| Ok(Box::new(PageStripApp::new(cc, app_state)))),
//!     )
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use app::PageStripApp;
pub use config::AppState;
pub use error::{PageStripError, Result};
pub use frontend::{StripAction, StripState};
pub use store::PageList;
pub use types::{Page, PageId};
