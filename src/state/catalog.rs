//! Catalog browsing state for the storefront grid.
//!
//! DESIGN
//! ======
//! Pages accumulate: a genre change resets the state and refetches from page
//! one, while "See more" appends the next page to the games already shown.
//! Separating this from the cart keeps purchase state independent of
//! navigation inventory.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Game, GamesPage};

/// Accumulated catalog state driving the grid, filter, and pagination UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub games: Vec<Game>,
    pub available_filters: Vec<String>,
    pub total_pages: u32,
    pub current_page: u32,
    pub loading: bool,
    pub fetching_more: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Drop accumulated pages and enter the initial loading state.
    pub fn begin_reload(&mut self) {
        *self = Self {
            loading: true,
            ..Self::default()
        };
    }

    /// Mark a follow-up page request as in flight.
    pub fn begin_fetch_more(&mut self) {
        self.fetching_more = true;
    }

    /// Merge a fetched page: the first page replaces the grid, later pages
    /// append to it. Pagination metadata always tracks the latest response.
    pub fn apply_page(&mut self, page: GamesPage) {
        self.loading = false;
        self.fetching_more = false;
        self.error = None;
        if page.current_page <= 1 {
            self.games = page.games;
        } else {
            self.games.extend(page.games);
        }
        self.available_filters = page.available_filters;
        self.total_pages = page.total_pages;
        self.current_page = page.current_page;
    }

    /// Record a failed fetch; the page renders `error` instead of the grid.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.fetching_more = false;
        self.error = Some(message);
    }

    /// Whether another page can be requested.
    ///
    /// Compares against the server-reported `totalPages`, which is known to
    /// drift from the true page count while a genre filter is active. The
    /// continuation check inherits that inaccuracy.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Next page number to request, when one remains.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next_page().then_some(self.current_page + 1)
    }
}
