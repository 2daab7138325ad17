//! Static page content.
//!
//! DESIGN
//! ======
//! Everything the page displays lives here as `&'static` data fixed at
//! compile time. Components only read it; nothing is computed or edited at
//! runtime. Section anchors are the one contract shared between navigation
//! and markup, so they are named constants rather than inline strings.

pub mod company;
pub mod navigation;
pub mod services;

/// Anchor of the services section (`#sluzby`).
pub const SERVICES_ANCHOR: &str = "sluzby";
/// Anchor of the about section (`#o-nas`).
pub const ABOUT_ANCHOR: &str = "o-nas";
/// Anchor of the contact section (`#kontakt`).
pub const CONTACT_ANCHOR: &str = "kontakt";

/// Every section id the page renders, in document order.
pub const SECTION_ANCHORS: &[&str] = &[SERVICES_ANCHOR, ABOUT_ANCHOR, CONTACT_ANCHOR];

macro_rules! tabler_icon {
    ($name:literal) => {
        concat!("https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/", $name, ".svg")
    };
}

/// Hosted Tabler icon URLs used across the page.
pub mod icons {
    pub const MENU: &str = tabler_icon!("menu-2");
    pub const CLOSE: &str = tabler_icon!("x");
    pub const MAIL: &str = tabler_icon!("mail");
    pub const PHONE: &str = tabler_icon!("phone");
    pub const BUILDING: &str = tabler_icon!("building-skyscraper");
    pub const TOOL: &str = tabler_icon!("tool");
    pub const CERTIFICATE: &str = tabler_icon!("certificate");
}

/// Hero background photo.
pub const HERO_IMAGE: &str = "/images/content-1.jpg";
/// Photo next to the about text.
pub const ABOUT_IMAGE: &str = "/images/content-2.jpg";
