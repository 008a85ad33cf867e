use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    rsx! {
        section { class: "page page-blog",
            h1 { "Blog" }
        }
    }
}
