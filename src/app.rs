//! Root application component with routing and the shared cart context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::cart::CartPage;
use crate::pages::catalog::CatalogPage;
use crate::state::cart::CartState;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads the persisted cart once at startup, provides it via context, and
/// sets up client-side routing between the catalog and the cart.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::load_from(&BrowserStorage));
    provide_context(cart);

    view! {
        <Stylesheet id="leptos" href="/pkg/gamershop.css"/>
        <Title text="GamerShop"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CatalogPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
            </Routes>
            <Footer/>
        </Router>
    }
}
