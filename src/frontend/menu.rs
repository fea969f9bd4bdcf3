//! Floating context menu for a single page
//!
//! Renders at the absolute position stored when the menu was opened,
//! bound to exactly one page id supplied by the orchestrator. Any click
//! outside the menu closes it; clicks on the menu's own buttons are by
//! construction not "elsewhere", so an action never races its own
//! dismissal. Immediate mode keeps the close-check scoped to the frames
//! the menu actually renders, so nothing leaks when the app shuts down
//! with the menu open.

use egui::{Color32, Context, Order, RichText};

use crate::frontend::state::{StripAction, StripState};

/// The context menu component
pub struct PageMenu;

impl PageMenu {
    /// Render the menu if it is open and return any actions to perform
    pub fn show(state: &StripState, ctx: &Context) -> Vec<StripAction> {
        let Some(menu) = state.menu else {
            return Vec::new();
        };

        let mut actions = Vec::new();

        let area = egui::Area::new(egui::Id::new("page-context-menu"))
            .fixed_pos(menu.position)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(150.0);

                    // No handler wired up for these two yet; the menu
                    // stays open until a click lands elsewhere.
                    let _ = ui.button("Set as first page");

                    if ui.button("Rename").clicked() {
                        actions.push(StripAction::RequestRename(menu.page_id));
                    }

                    let _ = ui.button("Copy");

                    if ui.button("Duplicate").clicked() {
                        actions.push(StripAction::DuplicatePage(menu.page_id));
                    }

                    ui.separator();

                    if ui
                        .button(
                            RichText::new("Delete").color(Color32::from_rgb(255, 100, 100)),
                        )
                        .clicked()
                    {
                        actions.push(StripAction::DeletePage(menu.page_id));
                    }
                });
            });

        if area.response.clicked_elsewhere() {
            actions.push(StripAction::CloseMenu);
        }

        actions
    }
}
