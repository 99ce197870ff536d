//! Cart page header with back navigation and live item count.

use leptos::prelude::*;

use crate::components::order_summary::items_count_label;
use crate::state::cart::CartState;

/// Back link to the catalog plus the cart heading and item count.
#[component]
pub fn CartHeader() -> impl IntoView {
    let cart_signal = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="cart-header">
            <a class="cart-header__back" href="/">
                <svg class="cart-header__back-icon" viewBox="0 0 20 20" aria-hidden="true">
                    <line x1="16" y1="10" x2="4" y2="10"></line>
                    <polyline points="9,5 4,10 9,15"></polyline>
                </svg>
                <span>"Back to Catalog"</span>
            </a>

            <div class="cart-header__heading">
                <h1 class="cart-header__title">"Your Cart"</h1>
                <p class="cart-header__count">
                    {move || items_count_label(cart_signal.with(CartState::total_items))}
                </p>
            </div>
        </div>
    }
}
