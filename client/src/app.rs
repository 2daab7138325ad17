//! Root application component with routing and the HTML document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::util::environment::DOCUMENT_TITLE;
use crate::util::favicon;

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The favicon link already points at the generated SVG, so no request is
/// made for a static icon; environment initialization rewrites the same
/// element again after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="STAVLAV, s.r.o. - stavební, montážní a revizní práce ve Žďáru nad Sázavou a okolí."
                />
                <FaviconLink/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/stavlav.css"/>
        <Title text=DOCUMENT_TITLE/>

        <Router>
            <Routes fallback=|| "Stránka nenalezena.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// `<link rel="icon">` carrying the inline SVG favicon.
#[component]
pub fn FaviconLink() -> impl IntoView {
    view! { <link rel="icon" type="image/svg+xml" href=favicon::data_uri()/> }
}
