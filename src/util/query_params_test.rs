use super::*;

fn params_from(pairs: &[(&str, &str)]) -> ParamsMap {
    let mut params = ParamsMap::new();
    for (key, value) in pairs {
        params.insert((*key).to_owned(), (*value).to_owned());
    }
    params
}

// =============================================================
// apply_param_changes
// =============================================================

#[test]
fn setting_a_new_key_from_empty_produces_just_that_param() {
    let mut params = ParamsMap::new();
    apply_param_changes(&mut params, &[("genre", Some("Action".to_owned()))]);
    assert_eq!(params.get("genre").as_deref(), Some("Action"));
    assert_eq!(href_with_params("/", &params), "/?genre=Action");
}

#[test]
fn setting_overwrites_existing_value() {
    let mut params = params_from(&[("genre", "Action"), ("page", "2")]);
    apply_param_changes(&mut params, &[("genre", Some("Racing".to_owned()))]);
    assert_eq!(params.get("genre").as_deref(), Some("Racing"));
    assert_eq!(params.get("page").as_deref(), Some("2"));
}

#[test]
fn none_removes_the_key() {
    let mut params = params_from(&[("genre", "Action"), ("page", "2")]);
    apply_param_changes(&mut params, &[("genre", None)]);
    assert_eq!(params.get("genre"), None);
    assert_eq!(params.get("page").as_deref(), Some("2"));
}

#[test]
fn empty_string_removes_the_key_like_none() {
    let mut params = params_from(&[("genre", "Action")]);
    apply_param_changes(&mut params, &[("genre", Some(String::new()))]);
    assert_eq!(params.get("genre"), None);
}

#[test]
fn removing_an_absent_key_is_a_no_op() {
    let mut params = params_from(&[("page", "2")]);
    apply_param_changes(&mut params, &[("genre", None)]);
    assert_eq!(params.get("page").as_deref(), Some("2"));
}

#[test]
fn multiple_changes_apply_in_one_pass() {
    let mut params = params_from(&[("genre", "Action")]);
    apply_param_changes(
        &mut params,
        &[
            ("genre", None),
            ("page", Some("3".to_owned())),
            ("sort", Some("price".to_owned())),
        ],
    );
    assert_eq!(params.get("genre"), None);
    assert_eq!(params.get("page").as_deref(), Some("3"));
    assert_eq!(params.get("sort").as_deref(), Some("price"));
}

// =============================================================
// href_with_params
// =============================================================

#[test]
fn href_without_params_is_the_bare_pathname() {
    let params = ParamsMap::new();
    assert_eq!(href_with_params("/", &params), "/");
}

#[test]
fn href_drops_query_once_last_param_is_removed() {
    let mut params = params_from(&[("genre", "Action")]);
    apply_param_changes(&mut params, &[("genre", None)]);
    assert_eq!(href_with_params("/", &params), "/");
}

#[test]
fn href_keeps_untouched_params_in_place() {
    let mut params = params_from(&[("genre", "Action"), ("page", "2")]);
    apply_param_changes(&mut params, &[("page", Some("3".to_owned()))]);
    let href = href_with_params("/", &params);
    assert!(href.contains("genre=Action"));
    assert!(href.contains("page=3"));
}

// =============================================================
// Navigation options
// =============================================================

#[test]
fn query_rewrites_preserve_scroll_and_history() {
    let options = preserve_scroll_options();
    assert!(!options.scroll);
    assert!(!options.replace);
}
