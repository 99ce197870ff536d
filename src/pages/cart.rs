//! Cart page with line items and the order summary.

use leptos::prelude::*;

use crate::components::cart_game_card::CartGameCard;
use crate::components::cart_header::CartHeader;
use crate::components::order_summary::OrderSummary;
use crate::state::cart::{self, CartState};

/// Cart page — header, removable line items, and the order summary.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart_signal = expect_context::<RwSignal<CartState>>();

    view! {
        <main class="cart-page">
            <CartHeader/>

            <div class="cart-page__layout">
                <div class="cart-page__items">
                    {move || {
                        cart_signal
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                let on_remove = Callback::new(move |()| {
                                    cart::remove_from_cart(cart_signal, &id);
                                });
                                view! { <CartGameCard game=item on_remove=on_remove/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <OrderSummary/>
            </div>
        </main>
    }
}
