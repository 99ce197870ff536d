//! Read and rewrite the current page's query string.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected catalog genre lives in the URL, not in component state, so
//! filters survive reloads and shared links. Reads always re-derive from the
//! live router state; writes rewrite the query string through a client-side
//! navigation that keeps the scroll position.

#[cfg(test)]
#[path = "query_params_test.rs"]
mod query_params_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use leptos_router::params::ParamsMap;

/// Handle over the current page's query string, bound to the router.
#[derive(Clone)]
pub struct UrlQueryParams {
    query: Memo<ParamsMap>,
    pathname: Memo<String>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

/// Bind a [`UrlQueryParams`] handle to the surrounding router context.
pub fn use_url_query_params() -> UrlQueryParams {
    let location = use_location();
    let navigate = use_navigate();
    UrlQueryParams {
        query: use_query_map(),
        pathname: location.pathname,
        navigate: Rc::new(move |to, options| navigate(to, options)),
    }
}

impl UrlQueryParams {
    /// Current value for `key`, or `None` when absent. Reads track the
    /// router state reactively.
    pub fn param_value(&self, key: &str) -> Option<String> {
        self.query.with(|params| params.get(key))
    }

    /// Independent snapshot of all current key/value pairs; mutating it does
    /// not affect later reads.
    pub fn all_params(&self) -> ParamsMap {
        self.query.get()
    }

    /// Apply `changes` to the query string and navigate to the rewritten
    /// URL on the same pathname. `None` and `""` remove their key, any other
    /// value overwrites it; keys not mentioned are left untouched. The
    /// navigation keeps the current scroll position.
    pub fn set_params(&self, changes: &[(&str, Option<String>)]) {
        let mut params = self.query.get_untracked();
        apply_param_changes(&mut params, changes);
        let target = href_with_params(&self.pathname.get_untracked(), &params);
        (self.navigate)(&target, preserve_scroll_options());
    }

    /// Remove `key` from the query string.
    pub fn remove_param(&self, key: &str) {
        self.set_params(&[(key, None)]);
    }
}

/// Merge `changes` into `params`: `None` or an empty string removes the key,
/// any other value is set as its string form.
pub fn apply_param_changes(params: &mut ParamsMap, changes: &[(&str, Option<String>)]) {
    for (key, value) in changes {
        params.remove(key);
        if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
            params.insert((*key).to_owned(), value.to_owned());
        }
    }
}

/// Build a navigation target for `pathname` carrying `params`.
pub fn href_with_params(pathname: &str, params: &ParamsMap) -> String {
    let query = params.to_query_string();
    let query = query.strip_prefix('?').unwrap_or(&query);
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Navigation options for query rewrites: a plain push that suppresses the
/// scroll-position reset.
pub fn preserve_scroll_options() -> NavigateOptions {
    NavigateOptions {
        scroll: false,
        ..NavigateOptions::default()
    }
}
