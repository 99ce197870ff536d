//! Static storefront footer.

use leptos::prelude::*;

/// Footer with the brand logo linking home.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <a class="footer__brand" href="/">
                <img class="footer__logo" src="/logo.svg" alt="GamerShop"/>
            </a>
        </footer>
    }
}
