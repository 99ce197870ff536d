//! Cart line item card with a remove control.

use leptos::prelude::*;

use crate::net::types::Game;

/// A single cart line: image, genre, name, description, price, and the
/// remove "✕" button.
#[component]
pub fn CartGameCard(game: Game, on_remove: Callback<()>) -> impl IntoView {
    let genre = game.genre.to_uppercase();
    let name = game.name.clone();
    let description = game.description.clone();
    let image = game.image.clone();
    let price = game.price;

    view! {
        <div class="cart-game-card">
            <img class="cart-game-card__image" src=image alt=name.clone()/>

            <div class="cart-game-card__body">
                <p class="cart-game-card__genre">{genre}</p>
                <h3 class="cart-game-card__name">{name}</h3>
                <p class="cart-game-card__description">{description}</p>
                <p class="cart-game-card__price">{format!("${price}")}</p>
            </div>

            <button
                class="cart-game-card__remove"
                on:click=move |_| on_remove.run(())
                aria-label="Remove item"
                title="Remove item"
            >
                "✕"
            </button>
        </div>
    }
}
