//! Slide-in navigation drawer and its backdrop for narrow viewports.

use leptos::prelude::*;

#[cfg(all(test, feature = "ssr"))]
#[path = "mobile_drawer_test.rs"]
mod mobile_drawer_test;

use crate::components::brand::BrandMark;
use crate::content::CONTACT_ANCHOR;
use crate::content::navigation::{CONTACT_CTA, NAV_LINKS, fragment};
use crate::state::menu::{CloseTrigger, MenuAction, MenuState, dispatch};

/// Drawer panel plus overlay. The overlay only exists while the menu is
/// open; the panel is always rendered and slides via its class modifier.
#[component]
pub fn MobileDrawer() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let close = move |trigger: CloseTrigger| dispatch(menu, MenuAction::Close(trigger));

    view! {
        <Show when=move || menu.get().is_open()>
            <div class="mobile-overlay" on:click=move |_| close(CloseTrigger::Overlay)></div>
        </Show>
        <div class=move || menu.get().drawer_class() aria-hidden=move || (!menu.get().is_open()).to_string()>
            <div class="mobile-drawer__header">
                <a href="#" class="brand brand--small" on:click=move |_| close(CloseTrigger::BrandLink)>
                    <BrandMark/>
                </a>
            </div>
            <nav class="mobile-drawer__nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href()
                                class="mobile-drawer__link"
                                on:click=move |_| close(CloseTrigger::NavLink)
                            >
                                {link.name}
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href=fragment(CONTACT_ANCHOR)
                    class="button button--primary button--block mobile-drawer__cta"
                    on:click=move |_| close(CloseTrigger::CallToAction)
                >
                    {CONTACT_CTA}
                </a>
            </nav>
        </div>
    }
}
