use super::*;

#[test]
fn construction_group_lists_four_items_in_order() {
    assert_eq!(CONSTRUCTION.title, "Stavební práce");
    assert_eq!(
        CONSTRUCTION.items,
        [
            "Provádění staveb, jejich změn a odstraňování",
            "Zednické a zámečnické práce",
            "Zemní práce a zakládání staveb",
            "Fasády a dokončovací práce",
        ]
    );
}

#[test]
fn groups_are_in_display_order() {
    let titles: Vec<_> = SERVICE_GROUPS.iter().map(|g| g.title).collect();
    assert_eq!(titles, ["Stavební práce", "Technické instalace", "Revize a projektování"]);
}

#[test]
fn group_titles_are_unique() {
    for (i, a) in SERVICE_GROUPS.iter().enumerate() {
        for b in &SERVICE_GROUPS[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn item_counts_match_offer() {
    let counts: Vec<_> = SERVICE_GROUPS.iter().map(|g| g.items.len()).collect();
    assert_eq!(counts, [4, 3, 5]);
}

#[test]
fn icons_are_hosted_svgs() {
    for group in SERVICE_GROUPS {
        assert!(group.icon.starts_with("https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/"));
        assert!(group.icon.ends_with(".svg"));
    }
    assert!(CONSTRUCTION.icon.ends_with("/building-skyscraper.svg"));
}
