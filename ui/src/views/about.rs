use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About Us" }
        }
    }
}
