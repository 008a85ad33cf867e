//! Inline SVG icons used by the header. Stroke icons inherit
//! `currentColor` so hover color changes apply without extra rules.

use dioxus::prelude::*;

/// Chevron next to the services trigger; rotated 180° by CSS while the
/// menu is hovered or focused.
#[component]
pub fn Chevron() -> Element {
    rsx! {
        svg {
            class: "navbar__chevron",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { d: "M6 9l6 6 6-6" }
        }
    }
}

/// Diagonal arrow used by the CTA button and the panel view-all links.
#[component]
pub fn ArrowUpRight() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { d: "M7 17L17 7" }
            path { d: "M8 7h9v9" }
        }
    }
}

#[component]
pub fn StarTile() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M12 3l2.12 4.29L19 8l-3.5 3.41L16.24 17 12 14.9 7.76 17l.74-5.59L5 8l4.88-.71L12 3z" }
        }
    }
}
