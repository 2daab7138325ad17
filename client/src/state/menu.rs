//! Mobile navigation menu state.
//!
//! DESIGN
//! ======
//! The drawer is either open or closed; the slide animation is CSS only and
//! never observable here. All transitions go through `MenuState::apply` so
//! each call site names its intent (`Toggle` from the menu button, or
//! `Close` with the trigger that caused it).

use leptos::prelude::*;

use crate::content::icons;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Visibility of the mobile navigation drawer and its backdrop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interaction that dismisses the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Click on the dimmed backdrop.
    Overlay,
    /// Click on a drawer navigation link.
    NavLink,
    /// Click on the brand wordmark inside the drawer.
    BrandLink,
    /// Click on the drawer's contact call-to-action.
    CallToAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Menu button: flips the state. While open it shows the close icon.
    Toggle,
    /// Forces the drawer closed; a no-op when already closed.
    Close(CloseTrigger),
}

impl MenuState {
    /// State after applying `action`.
    #[must_use]
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            MenuAction::Close(_) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Class list for the drawer panel; the modifier drives the slide transform.
    pub fn drawer_class(self) -> &'static str {
        match self {
            Self::Closed => "mobile-drawer",
            Self::Open => "mobile-drawer mobile-drawer--open",
        }
    }

    /// Icon shown on the menu button.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Closed => icons::MENU,
            Self::Open => icons::CLOSE,
        }
    }

    /// Accessible label for the menu button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Otevřít menu",
            Self::Open => "Zavřít menu",
        }
    }
}

/// Apply `action` to the shared menu signal.
pub fn dispatch(menu: RwSignal<MenuState>, action: MenuAction) {
    menu.update(|state| *state = state.apply(action));
}
