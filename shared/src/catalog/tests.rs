use super::*;

#[test]
fn seeded_catalog_lists_three_places_in_order() {
    let catalog = Catalog::seeded();
    let ids: Vec<&str> = catalog.places().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn seeded_places_carry_complete_display_data() {
    let catalog = Catalog::seeded();
    for place in catalog.places() {
        assert!(!place.title.is_empty());
        assert!(place.price_per_night > 0.0);
        assert!(place.host.is_some());
        assert!(!place.description.is_empty());
        assert_eq!(place.amenities.len(), 8);
        assert!(place.icon.is_some());
    }
}

#[test]
fn place_lookup_by_id() {
    let catalog = Catalog::seeded();
    let cabin = catalog.place("2").unwrap();
    assert_eq!(cabin.title, "Cozy Mountain Cabin");
    assert_eq!(cabin.price_per_night, 100.0);
    assert_eq!(cabin.max_guests, 4);
    assert_eq!(cabin.bedrooms, 2);
    assert_eq!(cabin.bathrooms, 1);
}

#[test]
fn unknown_place_is_none() {
    assert!(Catalog::seeded().place("99").is_none());
}

#[test]
fn seeded_review_counts_per_place() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.reviews("1").len(), 3);
    assert_eq!(catalog.reviews("2").len(), 2);
    assert_eq!(catalog.reviews("3").len(), 2);
}

#[test]
fn seeded_reviews_are_newest_first() {
    let catalog = Catalog::seeded();
    let dates: Vec<&str> = catalog
        .reviews("1")
        .iter()
        .map(|r| r.date.as_str())
        .collect();
    assert_eq!(
        dates,
        ["January 15, 2025", "January 10, 2025", "January 5, 2025"]
    );
}

#[test]
fn unknown_place_has_no_reviews() {
    assert!(Catalog::seeded().reviews("99").is_empty());
}

#[test]
fn add_review_prepends_and_keeps_existing() {
    let mut catalog = Catalog::seeded();
    let before = catalog.reviews("1").len();

    let stored = catalog.add_review("1", 5, "Wonderful stay", "alice");

    let reviews = catalog.reviews("1");
    assert_eq!(reviews.len(), before + 1);
    assert_eq!(reviews[0], stored);
    assert_eq!(reviews[0].author, "alice");
    assert_eq!(reviews[1].author, "Michael Chen");
}

#[test]
fn add_review_stamps_todays_date() {
    let mut catalog = Catalog::empty();
    let stored = catalog.add_review("1", 4, "ok", "bob");
    assert_eq!(stored.date, date::today());
}

#[test]
fn add_review_creates_the_sequence_for_unknown_places() {
    let mut catalog = Catalog::seeded();
    assert!(catalog.reviews("99").is_empty());

    catalog.add_review("99", 3, "fine", "carol");

    assert_eq!(catalog.reviews("99").len(), 1);
    // The listing table itself is untouched.
    assert!(catalog.place("99").is_none());
}

#[test]
fn add_review_clamps_rating_into_range() {
    let mut catalog = Catalog::empty();
    assert_eq!(catalog.add_review("1", 0, "low", "d").rating, 1);
    assert_eq!(catalog.add_review("1", 9, "high", "d").rating, 5);
    assert_eq!(catalog.add_review("1", 3, "mid", "d").rating, 3);
}

#[test]
fn empty_catalog_has_nothing() {
    let catalog = Catalog::empty();
    assert!(catalog.places().is_empty());
    assert!(catalog.reviews("1").is_empty());
}
