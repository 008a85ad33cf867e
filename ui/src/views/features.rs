use dioxus::prelude::*;

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "page page-features",
            h1 { "Features" }
        }
    }
}
