//! End-to-end behavior of the catalog store over the seed catalog.

use shopfront::catalog::{categories, seed_products};
use shopfront::{CatalogStore, FilterRefresh, HomeViewModel, ProductId, ViewState};

fn store() -> CatalogStore {
    CatalogStore::new(seed_products(), FilterRefresh::Always)
}

fn id(store: &CatalogStore, name: &str) -> ProductId {
    store.product_id(name).unwrap()
}

fn names(state: &ViewState) -> Vec<&str> {
    state
        .displayed_products()
        .iter()
        .map(|p| p.name.as_str())
        .collect()
}

fn assert_counts_consistent(state: &ViewState) {
    let wishlisted = state.products.iter().filter(|p| p.is_wishlisted).count();
    let in_cart = state.products.iter().filter(|p| p.is_in_cart).count();
    assert_eq!(state.wishlist_count, wishlisted);
    assert_eq!(state.cart_count, in_cart);
}

fn assert_one_view(state: &ViewState) {
    let flags = [
        state.is_home_view(),
        state.is_wishlist_view(),
        state.is_cart_view(),
        state.is_search_view(),
    ];
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
}

#[test]
fn seed_store_starts_home_with_counts() {
    let store = store();
    let state = store.snapshot();

    assert!(state.is_home_view());
    assert!(!state.is_loading);
    assert_eq!(state.products.len(), 7);
    assert_eq!(state.wishlist_count, 3);
    assert_eq!(state.cart_count, 3);
    assert!(state.filtered_products.is_none());
}

#[test]
fn toggle_wishlist_negates_only_that_product() {
    let mut store = store();
    let before = store.snapshot();
    let serum = id(&store, "Luxury Serum");

    let after = store.toggle_wishlist(serum);

    for (old, new) in before.products.iter().zip(&after.products) {
        if old.id == serum {
            assert_eq!(new.is_wishlisted, !old.is_wishlisted);
        } else {
            assert_eq!(new, old);
        }
    }
    assert_eq!(after.wishlist_count, 4);
    assert_counts_consistent(&after);
}

#[test]
fn double_toggle_restores_state() {
    let mut store = store();
    let before = store.snapshot();
    let cream = id(&store, "Premium Face Cream");

    store.toggle_cart(cream);
    let after = store.toggle_cart(cream);

    assert_eq!(*after, *before);
}

#[test]
fn showing_same_view_twice_returns_home() {
    let mut store = store();

    let wishlist = store.show_wishlist();
    assert!(wishlist.is_wishlist_view());
    assert_eq!(
        names(&wishlist),
        vec!["Premium Face Cream", "Vitamin C Cleanser", "Sunscreen SPF 50"]
    );

    let home = store.show_wishlist();
    assert!(home.is_home_view());
    assert!(home.filtered_products.is_none());

    store.show_cart();
    let home = store.show_cart();
    assert!(home.is_home_view());
}

#[test]
fn switching_between_views_stays_exclusive() {
    let mut store = store();

    assert_one_view(&store.show_wishlist());
    let cart = store.show_cart();
    assert_one_view(&cart);
    assert!(cart.is_cart_view());
    assert_eq!(
        names(&cart),
        vec!["Luxury Serum", "Vitamin C Cleanser", "Exfoliating Scrub"]
    );

    assert_one_view(&store.perform_search("serum", Vec::<String>::new()));
    assert_one_view(&store.show_home());
}

#[test]
fn blank_search_is_show_home() {
    let mut searched = store();
    searched.show_cart();
    let blank = searched.perform_search("   ", Vec::<String>::new());

    let mut homed = store();
    homed.show_cart();
    let home = homed.show_home();

    assert_eq!(*blank, *home);
}

#[test]
fn text_search_matches_name_description_and_points() {
    let mut store = store();

    let cream = store.perform_search("cream", Vec::<String>::new());
    assert!(cream.is_search_view());
    assert_eq!(names(&cream), vec!["Premium Face Cream"]);
    assert!(!names(&cream).contains(&"Luxury Serum"));

    let overnight = store.perform_search("OVERNIGHT", Vec::<String>::new());
    assert_eq!(names(&overnight), vec!["Night Recovery Mask"]);

    let facial = store.perform_search("facial", Vec::<String>::new());
    assert_eq!(names(&facial), vec!["Vitamin C Cleanser"]);
}

#[test]
fn tag_search_matches_keyword_table() {
    let mut store = store();

    let skincare = store.perform_search("", ["2"]);
    assert_eq!(names(&skincare), vec!["Premium Face Cream", "Luxury Serum"]);

    let either = store.perform_search("", ["2", "8"]);
    assert_eq!(
        names(&either),
        vec!["Premium Face Cream", "Luxury Serum", "Organic Moisturizer"]
    );

    let both = store.perform_search("face", ["2"]);
    assert_eq!(names(&both), vec!["Premium Face Cream"]);
}

#[test]
fn unmatched_search_shows_empty_results() {
    let mut store = store();
    let state = store.perform_search("xyz-no-match", Vec::<String>::new());

    assert!(state.is_search_view());
    assert!(state.displayed_products().is_empty());

    let view = HomeViewModel::from_state(&state, &categories());
    assert_eq!(view.section_title, "Search Results");
    assert!(view.cards.is_empty());
    assert!(view.empty_state.is_some());
}

#[test]
fn home_round_trip_leaves_no_residue() {
    let mut store = store();
    let initial = store.snapshot();

    store.show_wishlist();
    store.perform_search("serum", ["3"]);
    let home = store.show_home();

    assert_eq!(*home, *initial);
}

#[test]
fn toggle_in_wishlist_view_refreshes_list() {
    let mut store = store();
    store.show_wishlist();

    let cream = id(&store, "Premium Face Cream");
    let state = store.toggle_wishlist(cream);

    assert!(state.is_wishlist_view());
    assert!(!names(&state).contains(&"Premium Face Cream"));
    assert_eq!(state.wishlist_count, 2);
}

#[test]
fn refresh_policies_differ_outside_matching_view() {
    let mut always = CatalogStore::new(seed_products(), FilterRefresh::Always);
    let mut matching = CatalogStore::new(seed_products(), FilterRefresh::MatchingView);

    for store in [&mut always, &mut matching] {
        store.show_wishlist();
        let cleanser = store.product_id("Vitamin C Cleanser").unwrap();
        store.toggle_cart(cleanser);
    }

    // Wishlist membership is unchanged, only the cart flag differs.
    assert_eq!(always.snapshot().displayed_products().len(), 3);
    assert_eq!(matching.snapshot().displayed_products().len(), 3);

    let always_cleanser = always
        .snapshot()
        .displayed_products()
        .iter()
        .find(|p| p.name == "Vitamin C Cleanser")
        .map(|p| p.is_in_cart);
    let matching_cleanser = matching
        .snapshot()
        .displayed_products()
        .iter()
        .find(|p| p.name == "Vitamin C Cleanser")
        .map(|p| p.is_in_cart);

    assert_eq!(always_cleanser, Some(false));
    assert_eq!(matching_cleanser, Some(true));
}

#[test]
fn subscribers_see_each_dispatch() {
    let mut store = store();
    let mut updates = store.subscribe();

    store.show_cart();
    assert!(updates.has_changed().unwrap());
    assert!(updates.borrow_and_update().is_cart_view());

    store.show_cart();
    store.show_wishlist();
    assert!(updates.borrow_and_update().is_wishlist_view());
    assert!(!updates.has_changed().unwrap());
}

#[test]
fn unknown_product_name_does_not_resolve() {
    let store = store();
    assert!(store.product_id("Nonexistent").is_none());
}
