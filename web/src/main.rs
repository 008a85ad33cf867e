use dioxus::prelude::*;

use ui::components::site_navbar::{register_links, LinkBuilder};
use ui::components::SiteNavbar;
use ui::views::{
    About, Blog, Career, Contact, Features, Home, Industries, ServiceDetail, Services,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/services/:slug")]
    ServiceDetail { slug: String },
    #[route("/features")]
    Features {},
    #[route("/blog")]
    Blog {},
    #[route("/career")]
    Career {},
    #[route("/industries")]
    Industries {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Link builder handed to the `ui` crate so it can emit routed links
/// without knowing this crate's `Route` enum.
///
/// Every destination in the nav dataset parses into a typed route (pinned
/// by a test below); an unknown path falls back to Home rather than
/// panicking mid-render.
fn routed_link(to: &'static str, class: &'static str, body: Element) -> Element {
    let target = to.parse::<Route>().unwrap_or(Route::Home {});
    rsx! {
        Link { to: target, class: "{class}", {body} }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_links(LinkBuilder { build: routed_link });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout shell: reads the current path from the router on every render
/// (including client-side navigations) and hands it to the navbar as a
/// plain string prop, so the header stays a pure function of the path.
#[component]
fn SiteShell() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        SiteNavbar { current_path }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_match_their_declarations() {
        let cases: [(Route, &str); 8] = [
            (Route::Home {}, "/"),
            (Route::About {}, "/about"),
            (Route::Services {}, "/services"),
            (Route::Features {}, "/features"),
            (Route::Blog {}, "/blog"),
            (Route::Career {}, "/career"),
            (Route::Industries {}, "/industries"),
            (Route::Contact {}, "/contact"),
        ];
        for (route, path) in cases {
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn every_nav_destination_resolves_to_a_typed_route() {
        let mut destinations: Vec<&str> = ui::nav::NAV_ENTRIES
            .iter()
            .map(|e| e.target_path)
            .collect();
        destinations.push(ui::nav::VIEW_ALL_SOLUTIONS.target_path);
        destinations.push(ui::nav::VIEW_ALL_INDUSTRIES.target_path);
        destinations.push(ui::nav::CTA_PATH);

        for path in destinations {
            let parsed = path
                .parse::<Route>()
                .unwrap_or_else(|_| panic!("nav destination `{path}` has no route"));
            // Links must point at the dataset path verbatim.
            assert_eq!(parsed.to_string(), path);
        }
    }

    #[test]
    fn service_subroutes_resolve_under_services() {
        let parsed: Route = "/services/enterprise".parse().expect("service subroute");
        assert_eq!(
            parsed,
            Route::ServiceDetail {
                slug: "enterprise".into()
            }
        );
        assert_eq!(
            ui::nav::active_target(&ui::nav::NAV_ENTRIES, &parsed.to_string()),
            Some("/services")
        );
    }
}
