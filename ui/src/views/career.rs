use dioxus::prelude::*;

#[component]
pub fn Career() -> Element {
    rsx! {
        section { class: "page page-career",
            h1 { "Career" }
        }
    }
}
