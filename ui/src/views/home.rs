use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Mayora Infotech" }
            p { "Engineering partners for platform migration, growth and managed services." }
        }
    }
}
