//! About section (`#o-nas`).

use leptos::prelude::*;

use crate::content::company::ABOUT;
use crate::content::{ABOUT_ANCHOR, ABOUT_IMAGE};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=ABOUT_ANCHOR class="section section--white">
            <div class="container about">
                <div class="about__text">
                    <h2 class="section__heading">{ABOUT.heading}</h2>
                    {ABOUT
                        .paragraphs
                        .iter()
                        .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                        .collect_view()}
                </div>
                <div class="about__photo">
                    <img src=ABOUT_IMAGE alt=ABOUT.image_alt class="about__image"/>
                </div>
            </div>
        </section>
    }
}
