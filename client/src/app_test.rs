use super::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

#[test]
fn favicon_link_inlines_generated_svg() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <FaviconLink/> }.to_html());

    assert!(html.contains(r#"rel="icon""#));
    assert!(html.contains(&format!(r#"href="{}""#, favicon::data_uri())));
    assert!(!html.contains("favicon.ico"));
}
