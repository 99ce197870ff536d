//! Catalog card for a single game with a cart toggle.
//!
//! DESIGN
//! ======
//! The toggle button label and styling derive from live cart membership, so
//! every card stays in sync with mutations made anywhere in the app.

#[cfg(test)]
#[path = "game_card_test.rs"]
mod game_card_test;

use leptos::prelude::*;

use crate::net::types::Game;
use crate::state::cart::{self, CartState};

/// Label for the cart toggle button given current membership.
fn toggle_label(in_cart: bool) -> &'static str {
    if in_cart { "REMOVE FROM CART" } else { "ADD TO CART" }
}

/// A catalog card: image, optional "New" badge, genre, name, price, and the
/// add/remove cart toggle.
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let cart_signal = expect_context::<RwSignal<CartState>>();
    let id = game.id.clone();
    let in_cart = Memo::new(move |_| cart_signal.with(|cart| cart.contains(&id)));

    let is_new = game.is_new;
    let genre = game.genre.to_uppercase();
    let name = game.name.clone();
    let image = game.image.clone();
    let price = game.price;
    let on_toggle = move |_| cart::toggle_in_cart(cart_signal, &game);

    view! {
        <div class="game-card">
            <div class="game-card__media">
                <img class="game-card__image" src=image alt=name.clone()/>
                <Show when=move || is_new>
                    <span class="game-card__badge">"New"</span>
                </Show>
            </div>

            <div class="game-card__body">
                <h3 class="game-card__genre">{genre}</h3>

                <div class="game-card__title-row">
                    <h3 class="game-card__name">{name}</h3>
                    <p class="game-card__price">{format!("${price}")}</p>
                </div>

                <button
                    class="btn game-card__toggle"
                    class:game-card__toggle--in-cart=move || in_cart.get()
                    on:click=on_toggle
                >
                    {move || toggle_label(in_cart.get())}
                </button>
            </div>
        </div>
    }
}
