//! The page strip: one button per page plus add controls
//!
//! Each page button is simultaneously a drag source and a drop target on
//! the same interactive region. Reordering is continuous: hovering a
//! dragged page over a sibling moves it immediately, not on release.
//!
//! The strip never mutates state; it returns the actions the interaction
//! produced and the app applies them after the frame.

use egui::{pos2, Pos2, Rect, RichText, Ui};

use crate::frontend::state::{StripAction, StripState};
use crate::frontend::widgets::{AddSlot, MenuTrigger};
use crate::types::{Page, PageId};

/// Vertical gap between a page button and the menu it opens
pub const MENU_ANCHOR_OFFSET: f32 = 6.0;

/// Payload published to the drag-and-drop engine while a page button is
/// dragged.
///
/// Only the id is carried: the dragged page's current index is recovered
/// from the store at every hover, which keeps it in step with the
/// continuous reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub page_id: PageId,
}

/// Context menu anchor for a page button's on-screen rect: left edge,
/// bottom edge plus a fixed offset.
pub fn menu_anchor(button_rect: Rect) -> Pos2 {
    pos2(button_rect.left(), button_rect.bottom() + MENU_ANCHOR_OFFSET)
}

/// The page strip component
pub struct PageStrip;

impl PageStrip {
    /// Render the strip and return any actions to perform.
    ///
    /// Pages render in sequence order with an [`AddSlot`] strictly between
    /// consecutive pages and one trailing add control after the last page.
    pub fn show(state: &StripState, ui: &mut Ui) -> Vec<StripAction> {
        let mut actions = Vec::new();
        let count = state.pages.len();

        ui.horizontal(|ui| {
            for (index, page) in state.pages.iter().enumerate() {
                page_button(state, page, index, ui, &mut actions);

                // An add slot between this page and the next, never after
                // the last one.
                if index + 1 < count {
                    let slot = AddSlot::new().with_tooltip("Insert page here");
                    if ui.add(slot).clicked() {
                        actions.push(StripAction::AddPageAt(index + 1));
                    }
                }
            }

            if ui.button("+ Add page").clicked() {
                actions.push(StripAction::AddPageAt(count));
            }
        });

        actions
    }
}

/// Render one page button: drag source, drop target, activation, and the
/// menu trigger on the active page.
fn page_button(
    state: &StripState,
    page: &Page,
    index: usize,
    ui: &mut Ui,
    actions: &mut Vec<StripAction>,
) {
    let is_active = state.is_active(page.id);
    let source_id = egui::Id::new(("page-button", page.id));

    // The engine's "is this item being dragged" flag, used for styling.
    let is_dragged = egui::DragAndDrop::payload::<DragPayload>(ui.ctx())
        .is_some_and(|payload| payload.page_id == page.id);

    let payload = DragPayload { page_id: page.id };
    let egui::InnerResponse { inner, response } =
        ui.dnd_drag_source(source_id, payload, |ui| {
            ui.horizontal(|ui| {
                let text = if is_dragged {
                    RichText::new(&page.name).weak()
                } else {
                    RichText::new(&page.name)
                };
                let button = ui.add(egui::Button::new(text).selected(is_active));
                let set_active = button.clicked() || button.gained_focus();

                // Only the active page exposes the menu affordance. Its
                // click opens the menu; it must not re-activate the page.
                let open_menu = is_active
                    && ui
                        .add(MenuTrigger::new().with_tooltip("Page options"))
                        .clicked();

                (set_active, open_menu)
            })
            .inner
        });
    let (set_active, open_menu) = inner;

    if set_active {
        actions.push(StripAction::SetActive(page.id));
    }

    if open_menu {
        actions.push(StripAction::OpenMenu {
            page_id: page.id,
            position: menu_anchor(response.rect),
        });
    }

    // Drop-target role of the same region: a drag hovering this button
    // reorders immediately. Self-hover is a no-op so hovering an item
    // over its own slot never emits a redundant move.
    if let Some(hovered) = response.dnd_hover_payload::<DragPayload>() {
        if hovered.page_id != page.id {
            if let Some(from) = state.pages.find_index(hovered.page_id) {
                actions.push(StripAction::MovePage { from, to: index });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_anchor_hangs_below_left_corner() {
        let rect = Rect::from_min_max(pos2(40.0, 10.0), pos2(120.0, 34.0));
        let anchor = menu_anchor(rect);
        assert_eq!(anchor.x, 40.0);
        assert_eq!(anchor.y, 34.0 + MENU_ANCHOR_OFFSET);
    }
}
