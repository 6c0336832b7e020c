use dioxus::prelude::*;

use ui::{Layout, PRODUCT_NAME};
use views::{Analysis, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/analysis")]
        Analysis {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "{PRODUCT_NAME}" }

        Router::<Route> {}
    }
}

/// Router layout putting every page inside the shared `Layout` chrome.
#[component]
fn SiteLayout() -> Element {
    let current = use_route::<Route>();
    tracing::debug!(route = %current, "rendering page");

    rsx! {
        Layout { Outlet::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use std::str::FromStr;
    use ui::NAV_LINKS;

    #[test]
    fn every_nav_link_is_a_route() {
        for link in NAV_LINKS {
            let route = Route::from_str(link.href)
                .unwrap_or_else(|err| panic!("{} is not routable: {err}", link.href));
            assert_eq!(route.to_string(), link.href);
        }
    }

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(Route::from_str("/analysis").ok(), Some(Route::Analysis {}));
        assert!(Route::from_str("/settings").is_err());
    }
}
