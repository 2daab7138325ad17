//! Contact section (`#kontakt`): company details and the executives'
//! phone and email links.

use leptos::prelude::*;

use crate::content::company::{
    ADDRESS, COMPANY_EMAIL, COMPANY_ID, COMPANY_NAME, CONTACT_HEADING, CONTACT_LEAD, EXECUTIVES, Executive,
    mailto_href,
};
use crate::content::{CONTACT_ANCHOR, icons};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=CONTACT_ANCHOR class="section section--muted">
            <div class="container">
                <div class="section__intro">
                    <h2 class="section__heading">{CONTACT_HEADING}</h2>
                    <p class="section__lead">{CONTACT_LEAD}</p>
                </div>
                <div class="contact-card">
                    <div class="contact-card__column">
                        <h3 class="contact-card__heading">"Firemní údaje"</h3>
                        <div>
                            <p class="contact-card__company">{COMPANY_NAME}</p>
                            <p>{ADDRESS}</p>
                            <p>{format!("IČ: {COMPANY_ID}")}</p>
                        </div>
                        <a href=mailto_href(COMPANY_EMAIL) class="contact-link contact-link--accent">
                            <img src=icons::MAIL alt="Email" class="icon icon--sm"/>
                            <span>{COMPANY_EMAIL}</span>
                        </a>
                    </div>
                    <div class="contact-card__column">
                        <h3 class="contact-card__heading">"Jednatelé společnosti"</h3>
                        {EXECUTIVES.iter().map(|person| view! { <ExecutiveContact person=*person/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExecutiveContact(person: Executive) -> impl IntoView {
    view! {
        <div class="executive">
            <p class="executive__name">{person.name}</p>
            <div class="executive__links">
                <a href=person.tel_href() class="contact-link">
                    <img src=icons::PHONE alt="Telefon" class="icon icon--sm"/>
                    {person.phone}
                </a>
                <a href=person.mailto_href() class="contact-link">
                    <img src=icons::MAIL alt="Email" class="icon icon--sm"/>
                    {person.email}
                </a>
            </div>
        </div>
    }
}
