//! Sticky page header: brand, desktop navigation, CTA, and the mobile menu
//! button.

use leptos::prelude::*;

use crate::components::brand::BrandMark;
use crate::components::mobile_drawer::MobileDrawer;
use crate::content::CONTACT_ANCHOR;
use crate::content::navigation::{CONTACT_CTA, NAV_LINKS, fragment};
use crate::state::menu::{MenuAction, MenuState, dispatch};

/// Header bar. The mobile drawer is rendered inside it so both share the
/// sticky stacking context.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <header class="site-header">
            <div class="container">
                <div class="site-header__bar">
                    <a href="#" class="brand">
                        <BrandMark/>
                    </a>
                    <nav class="site-header__nav">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href() class="site-header__link">
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <a href=fragment(CONTACT_ANCHOR) class="button button--primary site-header__cta">
                        {CONTACT_CTA}
                    </a>
                    <div class="site-header__toggle">
                        <button
                            class="site-header__menu-button"
                            aria-label=move || menu.get().toggle_label()
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| dispatch(menu, MenuAction::Toggle)
                        >
                            <img src=move || menu.get().toggle_icon() alt="Menu" class="icon icon--md"/>
                        </button>
                    </div>
                </div>
            </div>
            <MobileDrawer/>
        </header>
    }
}
