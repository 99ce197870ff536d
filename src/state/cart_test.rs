use super::*;
use crate::util::storage::MemoryStore;

fn game(id: &str, price: f64) -> Game {
    Game {
        id: id.to_owned(),
        name: format!("Game {id}"),
        genre: "Action".to_owned(),
        description: "A test game.".to_owned(),
        image: format!("/images/{id}.webp"),
        price,
        is_new: false,
    }
}

// =============================================================
// Add / remove / query
// =============================================================

#[test]
fn add_item_appends_in_insertion_order() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.0));
    cart.add_item(game("2", 20.0));
    let ids: Vec<&str> = cart.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn add_item_with_existing_id_is_a_no_op() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.0));
    let before = cart.clone();
    cart.add_item(game("1", 99.0));
    assert_eq!(cart, before);
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn remove_item_drops_matching_id_only() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.0));
    cart.add_item(game("2", 20.0));
    cart.remove_item("1");
    assert!(!cart.contains("1"));
    assert!(cart.contains("2"));
}

#[test]
fn remove_item_is_a_no_op_for_absent_id() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.0));
    cart.remove_item("missing");
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn contains_is_false_after_remove_regardless_of_prior_presence() {
    let mut cart = CartState::default();
    cart.remove_item("1");
    assert!(!cart.contains("1"));

    cart.add_item(game("1", 10.0));
    cart.remove_item("1");
    assert!(!cart.contains("1"));
}

#[test]
fn remove_all_empties_the_cart() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.0));
    cart.add_item(game("2", 20.0));
    cart.remove_all();
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn total_price_is_zero_for_empty_cart() {
    assert_eq!(CartState::default().total_price(), 0.0);
}

#[test]
fn total_price_sums_item_prices() {
    let mut cart = CartState::default();
    cart.add_item(game("1", 10.5));
    cart.add_item(game("2", 20.25));
    assert_eq!(cart.total_price(), 30.75);
}

#[test]
fn cart_lifecycle_scenario() {
    let mut cart = CartState::default();

    cart.add_item(game("1", 59.99));
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), 59.99);

    cart.add_item(game("1", 59.99));
    assert_eq!(cart.total_items(), 1);

    cart.remove_item("1");
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn persist_then_load_round_trips_ids_order_and_fields() {
    let store = MemoryStore::default();
    let mut cart = CartState::default();
    cart.add_item(game("2", 20.0));
    cart.add_item(game("1", 10.0));
    cart.persist_to(&store);

    let reloaded = CartState::load_from(&store);
    assert_eq!(reloaded, cart);
}

#[test]
fn load_from_empty_store_yields_empty_cart() {
    let store = MemoryStore::default();
    let cart = CartState::load_from(&store);
    assert!(cart.items.is_empty());
}

#[test]
fn load_from_corrupt_slot_yields_empty_cart() {
    let store = MemoryStore::default();
    store.write(CART_STORAGE_KEY, "definitely not json");
    let cart = CartState::load_from(&store);
    assert!(cart.items.is_empty());
}

#[test]
fn every_mutation_persists_the_new_state() {
    let store = MemoryStore::default();
    let mut cart = CartState::default();

    cart.add_item(game("1", 10.0));
    cart.persist_to(&store);
    assert_eq!(CartState::load_from(&store).total_items(), 1);

    cart.remove_item("1");
    cart.persist_to(&store);
    assert_eq!(CartState::load_from(&store).total_items(), 0);
}
