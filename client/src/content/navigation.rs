//! In-page navigation links.

use super::{ABOUT_ANCHOR, CONTACT_ANCHOR, SERVICES_ANCHOR};

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// One in-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Section id this link targets, without the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    /// Fragment href (`#anchor`) for the link.
    pub fn href(&self) -> String {
        fragment(self.anchor)
    }
}

/// Header and drawer navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Služby", anchor: SERVICES_ANCHOR },
    NavLink { name: "O nás", anchor: ABOUT_ANCHOR },
    NavLink { name: "Kontakt", anchor: CONTACT_ANCHOR },
];

/// Label of the "contact us" call-to-action shown in the header and drawer.
pub const CONTACT_CTA: &str = "Kontaktujte nás";

/// Build a same-page fragment href from a section id.
pub fn fragment(anchor: &str) -> String {
    format!("#{anchor}")
}
