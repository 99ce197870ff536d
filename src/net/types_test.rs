use super::*;

fn sample_payload() -> &'static str {
    r#"{
        "games": [
            {
                "id": "g-1",
                "name": "Star Drift",
                "genre": "Racing",
                "description": "Zero-gravity racing league.",
                "image": "/images/star-drift.webp",
                "price": 59.99,
                "isNew": true
            }
        ],
        "availableFilters": ["Action", "Racing"],
        "totalPages": 4,
        "currentPage": 1
    }"#
}

#[test]
fn games_page_deserializes_camel_case_fields() {
    let page: GamesPage = serde_json::from_str(sample_payload()).unwrap();
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.available_filters, vec!["Action", "Racing"]);
    assert_eq!(page.games.len(), 1);

    let game = &page.games[0];
    assert_eq!(game.id, "g-1");
    assert_eq!(game.genre, "Racing");
    assert_eq!(game.price, 59.99);
    assert!(game.is_new);
}

#[test]
fn game_serializes_is_new_as_camel_case() {
    let game = Game {
        id: "g-2".to_owned(),
        name: "Night Harvest".to_owned(),
        genre: "Strategy".to_owned(),
        description: "Moonlit farming empire.".to_owned(),
        image: "/images/night-harvest.webp".to_owned(),
        price: 19.5,
        is_new: false,
    };
    let raw = serde_json::to_string(&game).unwrap();
    assert!(raw.contains(r#""isNew":false"#));
    assert!(!raw.contains("is_new"));
}
