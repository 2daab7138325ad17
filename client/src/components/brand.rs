//! Company wordmark used in the header and drawer.

use leptos::prelude::*;

use crate::content::company::{BRAND, BRAND_SUFFIX};

#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        {BRAND}
        " "
        <span class="brand__suffix">{BRAND_SUFFIX}</span>
    }
}
