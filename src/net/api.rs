//! REST helper for the remote game catalog.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stub returning an error since the catalog endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network, non-2xx status, malformed body) collapses
//! into one display message for the calling view; a `message` field in the
//! error body wins over the generic fallback. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GamesPage;

#[cfg(any(test, feature = "csr"))]
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch games";

#[cfg(any(test, feature = "csr"))]
fn games_endpoint(genre: Option<&str>, page: Option<u32>) -> String {
    use leptos_router::params::ParamsMap;

    use crate::util::query_params::href_with_params;

    let mut params = ParamsMap::new();
    if let Some(genre) = genre {
        params.insert("genre".to_owned(), genre.to_owned());
    }
    if let Some(page) = page {
        params.insert("page".to_owned(), page.to_string());
    }
    href_with_params("/games", &params)
}

#[cfg(any(test, feature = "csr"))]
fn error_message_from_body(body: Option<serde_json::Value>) -> String {
    body.as_ref()
        .and_then(|value| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| FETCH_FAILED_MESSAGE.to_owned(), str::to_owned)
}

/// Fetch one catalog page from `GET /games`, optionally filtered by `genre`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the server
/// responds with a non-success status.
pub async fn get_games(genre: Option<&str>, page: Option<u32>) -> Result<GamesPage, String> {
    #[cfg(feature = "csr")]
    {
        let url = games_endpoint(genre, page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| FETCH_FAILED_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(error_message_from_body(body));
        }
        resp.json::<GamesPage>()
            .await
            .map_err(|_| FETCH_FAILED_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (genre, page);
        Err("catalog fetch is only available in the browser".to_owned())
    }
}
