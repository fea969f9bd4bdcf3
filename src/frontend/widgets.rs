//! Custom widgets for the page strip UI
//!
//! # Widgets
//!
//! - [`MenuTrigger`] - The "⋮" affordance shown on the active page button
//! - [`AddSlot`] - The "+" control rendered between consecutive pages

use egui::{Button, Response, Ui, Widget};

/// The secondary affordance on the active page button that opens the
/// context menu.
///
/// This is its own widget, so clicking it never doubles as a click on the
/// page button it sits next to.
pub struct MenuTrigger {
    tooltip: Option<String>,
}

impl MenuTrigger {
    /// Create a new menu trigger
    pub fn new() -> Self {
        Self { tooltip: None }
    }

    /// Add a hover tooltip
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

impl Default for MenuTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MenuTrigger {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.add(Button::new("⋮").small().frame(false));

        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip)
        } else {
            response
        }
    }
}

/// A small "+" control for inserting a page at a specific position
pub struct AddSlot {
    tooltip: Option<String>,
}

impl AddSlot {
    /// Create a new add slot
    pub fn new() -> Self {
        Self { tooltip: None }
    }

    /// Add a hover tooltip
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

impl Default for AddSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for AddSlot {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.add(Button::new("+").small().frame(false));

        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip)
        } else {
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_trigger_tooltip() {
        let trigger = MenuTrigger::new().with_tooltip("Page options");
        assert_eq!(trigger.tooltip.as_deref(), Some("Page options"));
    }

    #[test]
    fn test_add_slot_default_has_no_tooltip() {
        let slot = AddSlot::new();
        assert!(slot.tooltip.is_none());
    }
}
