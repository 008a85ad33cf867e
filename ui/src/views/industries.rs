use dioxus::prelude::*;

use crate::nav::INDUSTRY_ITEMS;

#[component]
pub fn Industries() -> Element {
    rsx! {
        section { class: "page page-industries",
            h1 { "Industries" }
            ul { class: "page-industries__list",
                for item in INDUSTRY_ITEMS.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}
