//! Card listing one group of offered services.

use leptos::prelude::*;

#[cfg(all(test, feature = "ssr"))]
#[path = "service_card_test.rs"]
mod service_card_test;

/// Static card: icon and title header, then one checked row per item in the
/// given order. An empty `items` slice renders an empty list.
#[component]
pub fn ServiceCard(icon: &'static str, title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-card__header">
                <img src=icon alt="" class="service-card__icon"/>
                <h3 class="service-card__title">{title}</h3>
            </div>
            <ul class="service-card__items">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="service-card__item">
                                <CheckMarker/>
                                <span>{*item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Check-in-circle glyph preceding every list item.
#[component]
fn CheckMarker() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="service-card__marker"
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
        >
            <path
                fill-rule="evenodd"
                d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                clip-rule="evenodd"
            />
        </svg>
    }
}
