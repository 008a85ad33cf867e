use dioxus::prelude::*;

use crate::nav::SOLUTION_ITEMS;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "page page-services",
            h1 { "Services" }
            ul { class: "page-services__list",
                for item in SOLUTION_ITEMS.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}

/// Detail page for a single service; exists so `/services/<slug>` routes
/// resolve and keep the Services entry highlighted.
#[component]
pub fn ServiceDetail(slug: String) -> Element {
    rsx! {
        section { class: "page page-service-detail",
            h1 { "{slug}" }
        }
    }
}
