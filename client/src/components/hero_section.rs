//! Hero banner with headline and the two primary calls to action.

use leptos::prelude::*;

use crate::content::company::HERO;
use crate::content::navigation::fragment;
use crate::content::{CONTACT_ANCHOR, HERO_IMAGE, SERVICES_ANCHOR};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop">
                <img src=HERO_IMAGE alt=HERO.image_alt class="hero__image"/>
            </div>
            <div class="container hero__content">
                <h1 class="hero__heading">{HERO.heading}</h1>
                <p class="hero__tagline">{HERO.tagline}</p>
                <p class="hero__lead">{HERO.lead}</p>
                <div class="hero__actions">
                    <a href=fragment(SERVICES_ANCHOR) class="button button--primary button--large">
                        {HERO.primary_cta}
                    </a>
                    <a href=fragment(CONTACT_ANCHOR) class="button button--ghost button--large">
                        {HERO.secondary_cta}
                    </a>
                </div>
            </div>
        </section>
    }
}
