use dioxus::prelude::*;

use crate::nav::{
    PanelLink, INDUSTRY_ITEMS, SOLUTION_ITEMS, VIEW_ALL_INDUSTRIES, VIEW_ALL_SOLUTIONS,
};

use super::icons::{ArrowUpRight, StarTile};
use super::site_navbar::site_link;

/// Hover-revealed panel anchored under the services entry.
///
/// Hidden by default and shown by CSS while the pointer or focus is on the
/// trigger or on the panel itself. The solution and industry items are
/// informational labels without destinations; only the two view-all links
/// navigate.
#[component]
pub fn MegaPanel() -> Element {
    rsx! {
        div { class: "navbar__panel",
            div { class: "navbar__panel-grid",
                div { class: "navbar__panel-col navbar__panel-col--solutions",
                    div { class: "navbar__panel-heading", "SOLUTIONS" }
                    ul { class: "navbar__panel-items navbar__panel-items--grid",
                        for item in SOLUTION_ITEMS.iter() {
                            PanelItem { key: "{item}", label: *item }
                        }
                    }
                    {view_all(VIEW_ALL_SOLUTIONS)}
                }
                div { class: "navbar__panel-col navbar__panel-col--industries",
                    div { class: "navbar__panel-heading", "INDUSTRIES" }
                    ul { class: "navbar__panel-items",
                        for item in INDUSTRY_ITEMS.iter() {
                            PanelItem { key: "{item}", label: *item }
                        }
                    }
                    {view_all(VIEW_ALL_INDUSTRIES)}
                }
            }
        }
    }
}

#[component]
fn PanelItem(label: &'static str) -> Element {
    rsx! {
        li { class: "navbar__panel-item",
            span { class: "navbar__panel-tile", StarTile {} }
            span { class: "navbar__panel-label", "{label}" }
        }
    }
}

fn view_all(link: PanelLink) -> Element {
    site_link(
        link.target_path,
        "navbar__panel-viewall",
        rsx! {
            "{link.label}"
            ArrowUpRight {}
        },
    )
}
