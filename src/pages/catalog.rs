//! Catalog page listing games with genre filter and incremental pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The selected genre lives in the URL query
//! string; changing it resets the grid and refetches from page one, while
//! "See more" appends follow-up pages until the server reports none remain.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::catalog_header::CatalogHeader;
use crate::components::game_card::GameCard;
use crate::state::catalog::CatalogState;

/// Genre filter currently encoded in the URL; absent or empty means all.
fn selected_genre(raw: Option<String>) -> Option<String> {
    raw.filter(|genre| !genre.is_empty())
}

/// Label for the pagination button while a follow-up page loads.
fn see_more_label(fetching_more: bool) -> &'static str {
    if fetching_more { "Loading..." } else { "See more →" }
}

/// Catalog page — genre-filtered grid of game cards with a "See more"
/// continuation button. A fetch failure renders an error message in place of
/// new results.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let query = use_query_map();
    let genre = Memo::new(move |_| selected_genre(query.with(|params| params.get("genre"))));
    let catalog = RwSignal::new(CatalogState::default());

    // Initial load, re-run from page one whenever the genre changes.
    Effect::new(move || {
        let genre = genre.get();
        catalog.update(CatalogState::begin_reload);
        fetch_page(catalog, genre, 1);
    });

    let on_see_more = move |_| {
        let Some(page) = catalog.with_untracked(CatalogState::next_page) else {
            return;
        };
        catalog.update(CatalogState::begin_fetch_more);
        fetch_page(catalog, genre.get_untracked(), page);
    };

    view! {
        <main class="catalog-page">
            <CatalogHeader
                selected=Signal::derive(move || genre.get().unwrap_or_default())
                filters=Signal::derive(move || catalog.get().available_filters.clone())
            />

            <div class="catalog-page__content">
                <Show when=move || catalog.get().error.is_some()>
                    <p class="catalog-page__error">
                        {move || catalog.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !catalog.get().loading
                    fallback=move || view! { <p class="catalog-page__loading">"Loading..."</p> }
                >
                    <div class="catalog-page__grid">
                        {move || {
                            catalog
                                .get()
                                .games
                                .into_iter()
                                .map(|game| view! { <GameCard game=game/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || catalog.get().has_next_page()>
                    <button
                        class="btn btn--primary catalog-page__see-more"
                        disabled=move || catalog.get().fetching_more
                        on:click=on_see_more
                    >
                        {move || see_more_label(catalog.get().fetching_more)}
                    </button>
                </Show>
            </div>
        </main>
    }
}

/// Request `page` for `genre` and fold the outcome into `catalog`.
fn fetch_page(catalog: RwSignal<CatalogState>, genre: Option<String>, page: u32) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_games(genre.as_deref(), Some(page)).await {
            Ok(fetched) => catalog.update(|state| state.apply_page(fetched)),
            Err(message) => {
                log::error!("catalog fetch failed: {message}");
                catalog.update(|state| state.apply_error(message));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (catalog, genre, page);
    }
}
