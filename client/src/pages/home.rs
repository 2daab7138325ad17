//! Company home page: the only route of the site.

use leptos::prelude::*;

use crate::components::{
    about_section::AboutSection, contact_section::ContactSection, hero_section::HeroSection,
    services_section::ServicesSection, site_footer::SiteFooter, site_header::SiteHeader,
};
use crate::state::menu::MenuState;
use crate::util::environment::initialize_environment;

#[cfg(all(test, feature = "ssr"))]
#[path = "home_test.rs"]
mod home_test;

/// Page shell: owns the mobile menu state and runs the one-time environment
/// setup after the first client-side mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    provide_context(menu);

    // Tracks no signals, so menu changes never re-run it.
    Effect::new(move || {
        initialize_environment();
    });

    view! {
        <div class="page">
            <SiteHeader/>
            <main>
                <HeroSection/>
                <ServicesSection/>
                <AboutSection/>
                <ContactSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
