//! Page footer with copyright and author credit.

use leptos::prelude::*;

use crate::content::company::{CREDIT_NAME, CREDIT_URL, copyright_line};
use crate::util::year::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__content">
                <p>{copyright_line(current_year())}</p>
                <p class="site-footer__credit">
                    "Vytvořeno s láskou od "
                    <a href=CREDIT_URL target="_blank" rel="noopener noreferrer">
                        {CREDIT_NAME}
                    </a>
                </p>
            </div>
        </footer>
    }
}
