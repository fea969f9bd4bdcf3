//! Modal rename dialog
//!
//! Replaces the classic blocking rename prompt with explicit modal state:
//! the strip is disabled while the dialog is open, so no competing edit
//! can happen until it resolves. Cancelling or submitting an empty name
//! leaves the page untouched.

use egui::{Align2, Context, Key};

use crate::frontend::state::StripAction;
use crate::types::PageId;

/// The page being renamed and the edit in progress
#[derive(Debug)]
struct RenameTarget {
    page_id: PageId,
    current_name: String,
    input: String,
}

/// Modal dialog for renaming a single page
///
/// The app owns one instance and drives it like the other components: it
/// renders while a target is set and returns the actions the interaction
/// produced. Confirming emits [`StripAction::RenamePage`]; cancelling
/// emits nothing.
#[derive(Debug, Default)]
pub struct RenameDialog {
    target: Option<RenameTarget>,
}

impl RenameDialog {
    /// Open the dialog for a page, pre-filling the input with its current
    /// name
    pub fn open(&mut self, page_id: PageId, current_name: impl Into<String>) {
        let current_name = current_name.into();
        self.target = Some(RenameTarget {
            page_id,
            input: current_name.clone(),
            current_name,
        });
    }

    /// Whether the dialog is currently open
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Render the dialog if it is open and return any actions to perform
    pub fn show(&mut self, ctx: &Context) -> Vec<StripAction> {
        let Some(target) = self.target.as_mut() else {
            return Vec::new();
        };

        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new("Rename Page")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Current:");
                    ui.label(&target.current_name);
                });

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("New name:");
                    let response = ui.text_edit_singleline(&mut target.input);

                    // Submit on Enter
                    if response.lost_focus()
                        && ui.input(|i| i.key_pressed(Key::Enter))
                        && !target.input.is_empty()
                    {
                        submitted = true;
                    }
                });

                ui.separator();

                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!target.input.is_empty(), |ui| {
                        if ui.button("Rename").clicked() {
                            submitted = true;
                        }
                    });
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            let action = StripAction::RenamePage {
                id: target.page_id,
                name: std::mem::take(&mut target.input),
            };
            self.target = None;
            vec![action]
        } else {
            if cancelled {
                self.target = None;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_prefills_input_with_current_name() {
        let mut dialog = RenameDialog::default();
        dialog.open(PageId::next(), "Details");

        assert!(dialog.is_open());
        let target = dialog.target.as_ref().unwrap();
        assert_eq!(target.current_name, "Details");
        assert_eq!(target.input, "Details");
    }

    #[test]
    fn test_closed_dialog_emits_nothing() {
        let mut dialog = RenameDialog::default();
        let ctx = Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            assert!(dialog.show(ctx).is_empty());
        });
    }

    #[test]
    fn test_reopening_replaces_target() {
        let mut dialog = RenameDialog::default();
        let first = PageId::next();
        let second = PageId::next();

        dialog.open(first, "Info");
        dialog.open(second, "Other");

        assert_eq!(dialog.target.as_ref().unwrap().page_id, second);
    }
}
