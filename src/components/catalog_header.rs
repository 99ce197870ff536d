//! Catalog header with the genre filter dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The select writes straight to the `genre` query parameter; choosing "All"
//! submits an empty value, which removes the key. The catalog page reacts to
//! the URL change, so this component never touches catalog state directly.

use leptos::prelude::*;

use crate::util::query_params::use_url_query_params;

/// Header row: "Top Sellers" heading and the genre select.
#[component]
pub fn CatalogHeader(selected: Signal<String>, filters: Signal<Vec<String>>) -> impl IntoView {
    let params = use_url_query_params();

    view! {
        <div class="catalog-header">
            <h1 class="catalog-header__title">"Top Sellers"</h1>

            <div class="catalog-header__filter">
                <h2 class="catalog-header__filter-label">"Genre"</h2>
                <select
                    class="catalog-header__select"
                    prop:value=move || selected.get()
                    on:change=move |ev| {
                        params.set_params(&[("genre", Some(event_target_value(&ev)))]);
                    }
                >
                    <option value="">"All"</option>
                    {move || {
                        filters
                            .get()
                            .into_iter()
                            .map(|genre| view! { <option value=genre.clone()>{genre.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
        </div>
    }
}
