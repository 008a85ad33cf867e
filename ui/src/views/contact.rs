use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            h1 { "Contact Us" }
        }
    }
}
