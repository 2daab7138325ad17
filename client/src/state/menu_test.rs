use super::*;
use leptos::reactive::owner::Owner;

const CLOSE_TRIGGERS: [CloseTrigger; 4] =
    [CloseTrigger::Overlay, CloseTrigger::NavLink, CloseTrigger::BrandLink, CloseTrigger::CallToAction];

// =============================================================
// Transitions
// =============================================================

#[test]
fn initial_state_is_closed() {
    let state = MenuState::default();
    assert_eq!(state, MenuState::Closed);
    assert!(!state.is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let opened = MenuState::Closed.apply(MenuAction::Toggle);
    assert_eq!(opened, MenuState::Open);
    assert_eq!(opened.apply(MenuAction::Toggle), MenuState::Closed);
}

#[test]
fn close_while_closed_stays_closed() {
    for trigger in CLOSE_TRIGGERS {
        assert_eq!(MenuState::Closed.apply(MenuAction::Close(trigger)), MenuState::Closed);
    }
}

#[test]
fn every_close_trigger_closes_open_menu() {
    for trigger in CLOSE_TRIGGERS {
        assert_eq!(MenuState::Open.apply(MenuAction::Close(trigger)), MenuState::Closed, "{trigger:?}");
    }
}

#[test]
fn last_action_wins() {
    let actions = [
        MenuAction::Toggle,
        MenuAction::Toggle,
        MenuAction::Toggle,
        MenuAction::Close(CloseTrigger::Overlay),
        MenuAction::Toggle,
    ];
    let state = actions.into_iter().fold(MenuState::default(), MenuState::apply);
    assert_eq!(state, MenuState::Open);
}

// =============================================================
// Derived presentation
// =============================================================

#[test]
fn drawer_class_reflects_state() {
    assert_eq!(MenuState::Closed.drawer_class(), "mobile-drawer");
    assert_eq!(MenuState::Open.drawer_class(), "mobile-drawer mobile-drawer--open");
}

#[test]
fn toggle_icon_switches_between_menu_and_close() {
    assert!(MenuState::Closed.toggle_icon().ends_with("/menu-2.svg"));
    assert!(MenuState::Open.toggle_icon().ends_with("/x.svg"));
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(MenuState::Closed.toggle_label(), "Otevřít menu");
    assert_eq!(MenuState::Open.toggle_label(), "Zavřít menu");
}

// =============================================================
// Signal dispatch
// =============================================================

#[test]
fn dispatch_updates_shared_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let menu = RwSignal::new(MenuState::default());
        dispatch(menu, MenuAction::Toggle);
        assert!(menu.get_untracked().is_open());
        dispatch(menu, MenuAction::Close(CloseTrigger::NavLink));
        assert_eq!(menu.get_untracked(), MenuState::Closed);
        dispatch(menu, MenuAction::Close(CloseTrigger::Overlay));
        assert_eq!(menu.get_untracked(), MenuState::Closed);
    });
}
