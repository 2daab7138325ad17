//! Services section (`#sluzby`): one card per service group.

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::content::SERVICES_ANCHOR;
use crate::content::services::{SERVICE_GROUPS, SERVICES_HEADING, SERVICES_LEAD};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SERVICES_ANCHOR class="section">
            <div class="container">
                <div class="section__intro">
                    <h2 class="section__heading">{SERVICES_HEADING}</h2>
                    <p class="section__lead">{SERVICES_LEAD}</p>
                </div>
                <div class="services-grid">
                    {SERVICE_GROUPS
                        .iter()
                        .map(|group| view! { <ServiceCard icon=group.icon title=group.title items=group.items/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
