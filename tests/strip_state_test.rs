//! Integration tests for strip state management
//!
//! These tests validate the action-application logic without rendering
//! anything: components emit `StripAction`s and `StripState::apply` is the
//! single mutation point.

use egui::pos2;
use pagestrip_rs::frontend::{MenuState, StripAction, StripState};
use pagestrip_rs::types::Page;

fn names(state: &StripState) -> Vec<&str> {
    state.pages.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_seeded_state_starts_with_first_page_active() {
    let state = StripState::seeded();
    assert_eq!(names(&state), vec!["Info", "Details", "Other", "Ending"]);
    assert_eq!(state.active_page().unwrap().name, "Info");
    assert!(state.focused_id.is_none());
    assert!(state.menu.is_none());
}

#[test]
fn test_set_active_also_focuses() {
    let mut state = StripState::seeded();
    let id = state.pages.get_at(2).unwrap().id;

    state.apply(StripAction::SetActive(id));

    assert_eq!(state.active_id, id);
    assert_eq!(state.focused_id, Some(id));
}

#[test]
fn test_add_page_at_inserts_new_page() {
    let mut state = StripState::seeded();

    state.apply(StripAction::AddPageAt(2));

    assert_eq!(
        names(&state),
        vec!["Info", "Details", "New Page", "Other", "Ending"]
    );
}

#[test]
fn test_move_page_applies_remove_then_insert() {
    let mut state = StripState::seeded();

    state.apply(StripAction::MovePage { from: 0, to: 2 });

    assert_eq!(names(&state), vec!["Details", "Other", "Info", "Ending"]);
}

#[test]
fn test_open_menu_records_target_and_position() {
    let mut state = StripState::seeded();
    let id = state.pages.get_at(1).unwrap().id;
    let position = pos2(120.0, 48.0);

    state.apply(StripAction::OpenMenu {
        page_id: id,
        position,
    });

    assert_eq!(state.menu, Some(MenuState { page_id: id, position }));
    assert_eq!(state.menu_page().unwrap().name, "Details");
}

#[test]
fn test_close_menu_clears_target() {
    let mut state = StripState::seeded();
    let id = state.pages.get_at(1).unwrap().id;

    state.apply(StripAction::OpenMenu {
        page_id: id,
        position: pos2(0.0, 0.0),
    });
    state.apply(StripAction::CloseMenu);

    assert!(state.menu.is_none());
}

#[test]
fn test_menu_delete_removes_page_and_closes_menu() {
    let mut state = StripState::seeded();
    let other = state.pages.iter().find(|p| p.name == "Other").unwrap().id;

    state.apply(StripAction::OpenMenu {
        page_id: other,
        position: pos2(200.0, 48.0),
    });
    state.apply(StripAction::DeletePage(other));

    assert_eq!(names(&state), vec!["Info", "Details", "Ending"]);
    assert!(state.menu.is_none());
}

#[test]
fn test_menu_duplicate_copies_page_and_closes_menu() {
    let mut state = StripState::seeded();
    let details = state.pages.get_at(1).unwrap().id;

    state.apply(StripAction::OpenMenu {
        page_id: details,
        position: pos2(80.0, 48.0),
    });
    state.apply(StripAction::DuplicatePage(details));

    assert_eq!(
        names(&state),
        vec!["Info", "Details", "Details Copy", "Other", "Ending"]
    );
    assert!(state.menu.is_none());
}

#[test]
fn test_deleting_active_page_leaves_active_id_dangling() {
    // Documents current behavior: active_id keeps referencing the deleted
    // page, so no page renders as active afterwards.
    let mut state = StripState::seeded();
    let info = state.active_id;

    state.apply(StripAction::DeletePage(info));

    assert!(!state.pages.contains(info));
    assert_eq!(state.active_id, info);
    assert!(state.active_page().is_none());
}

#[test]
fn test_rename_with_empty_name_is_ignored() {
    let mut state = StripState::seeded();
    let id = state.pages.get_at(0).unwrap().id;

    state.apply(StripAction::RenamePage {
        id,
        name: String::new(),
    });

    assert_eq!(state.pages.get(id).unwrap().name, "Info");
}

#[test]
fn test_rename_missing_page_is_noop() {
    let mut state = StripState::seeded();
    let stray = Page::new("elsewhere");

    state.apply(StripAction::RenamePage {
        id: stray.id,
        name: "Ghost".to_string(),
    });

    assert_eq!(names(&state), vec!["Info", "Details", "Other", "Ending"]);
}

#[test]
fn test_request_rename_does_not_touch_state() {
    let mut state = StripState::seeded();
    let id = state.pages.get_at(0).unwrap().id;
    let before = names(&state)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    state.apply(StripAction::RequestRename(id));

    assert_eq!(names(&state), before);
    assert!(state.menu.is_none());
}
