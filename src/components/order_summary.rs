//! Order summary panel with totals and the checkout entry point.
//!
//! The "Checkout" button is an entry point only; no checkout flow or backend
//! contract exists behind it.

#[cfg(test)]
#[path = "order_summary_test.rs"]
mod order_summary_test;

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Format an amount for display with two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Item-count line for the summary and cart header.
pub fn items_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_owned()
    } else {
        format!("{count} items")
    }
}

/// Summary panel: item count, per-item rows, order total, checkout stub.
#[component]
pub fn OrderSummary() -> impl IntoView {
    let cart_signal = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="order-summary">
            <div class="order-summary__panel">
                <h2 class="order-summary__title">"Order Summary"</h2>
                <p class="order-summary__count">
                    {move || items_count_label(cart_signal.with(CartState::total_items))}
                </p>

                <div class="order-summary__rows">
                    {move || {
                        cart_signal
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="order-summary__row">
                                        <p class="order-summary__row-name">{item.name.clone()}</p>
                                        <p class="order-summary__row-price">
                                            {format_price(item.price)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="order-summary__divider"></div>

                <div class="order-summary__total-row">
                    <p class="order-summary__total-label">"Order Total"</p>
                    <p class="order-summary__total">
                        {move || format_price(cart_signal.with(CartState::total_price))}
                    </p>
                </div>
            </div>

            <button class="btn btn--primary order-summary__checkout">"Checkout"</button>
        </div>
    }
}
