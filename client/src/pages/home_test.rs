use super::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::content::SECTION_ANCHORS;
use crate::content::navigation::NAV_LINKS;
use crate::content::services::{CONSTRUCTION, INSTALLATIONS, SERVICE_GROUPS};

fn render_home() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <HomePage/> }.to_html())
}

// =============================================================
// Menu initial state
// =============================================================

#[test]
fn menu_starts_closed() {
    let html = render_home();
    assert!(html.contains(r#"class="mobile-drawer""#));
    assert!(!html.contains("mobile-drawer--open"));
    assert!(!html.contains("mobile-overlay"));
    assert!(html.contains("/menu-2.svg"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn every_section_anchor_is_rendered() {
    let html = render_home();
    for anchor in SECTION_ANCHORS {
        assert_eq!(html.matches(&format!(r#"id="{anchor}""#)).count(), 1, "section {anchor}");
    }
}

#[test]
fn nav_hrefs_resolve_to_rendered_sections() {
    let html = render_home();
    for link in NAV_LINKS {
        assert!(html.contains(&format!(r#"href="{}""#, link.href())));
        assert!(html.contains(&format!(r#"id="{}""#, link.anchor)));
    }
}

// =============================================================
// Service content
// =============================================================

#[test]
fn renders_one_card_per_service_group() {
    let html = render_home();
    assert_eq!(html.matches(r#"class="service-card""#).count(), SERVICE_GROUPS.len());
    let total_items: usize = SERVICE_GROUPS.iter().map(|g| g.items.len()).sum();
    assert_eq!(html.matches(r#"class="service-card__item""#).count(), total_items);
}

#[test]
fn group_titles_render_once() {
    let html = render_home();
    for group in SERVICE_GROUPS {
        assert_eq!(html.matches(group.title).count(), 1, "title {}", group.title);
    }
}

#[test]
fn construction_card_lists_items_in_order() {
    let html = render_home();
    let start = html.find(CONSTRUCTION.title).expect("construction card");
    let end = html.find(INSTALLATIONS.title).expect("installations card");
    let card = &html[start..end];

    assert_eq!(card.matches(r#"class="service-card__item""#).count(), 4);

    let positions: Vec<usize> = CONSTRUCTION
        .items
        .iter()
        .map(|item| {
            assert_eq!(card.matches(item).count(), 1, "item {item}");
            card.find(item).expect("item rendered")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "items out of order: {positions:?}");
}

// =============================================================
// Contact links
// =============================================================

#[test]
fn contact_links_are_rendered() {
    let html = render_home();
    for href in [
        "mailto:firma@stavlav.cz",
        "tel:+420733682202",
        "mailto:lavicky@stavlav.cz",
        "tel:+420739971141",
        "mailto:p.lavicky@stavlav.cz",
    ] {
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
}

#[test]
fn footer_credit_opens_in_new_tab() {
    let html = render_home();
    assert!(html.contains(r#"href="https://digitalfusion.cz""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains("Všechna práva vyhrazena."));
}
