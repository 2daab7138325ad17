//! Page section and widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static content from `crate::content`. Only the header
//! and the mobile drawer read shared state (the menu signal provided by the
//! home page through Leptos context).

pub mod about_section;
pub mod brand;
pub mod contact_section;
pub mod hero_section;
pub mod mobile_drawer;
pub mod service_card;
pub mod services_section;
pub mod site_footer;
pub mod site_header;
