use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::nav::{self, NavEntry, CTA_PATH, NAV_ENTRIES};

use super::icons::{ArrowUpRight, Chevron};
use super::mega_panel::MegaPanel;

// Navbar stylesheet; all hover/transition behavior lives there.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const BRAND_LOGO: Asset = asset!("/assets/images/mayora-logo.png");

/// Platforms can register a `LinkBuilder` providing routed `Link` elements,
/// so this crate never needs to know each platform's `Route` enum.
///
/// The builder receives the destination path (verbatim from the nav
/// dataset), the class list, and the already-built link body, and returns
/// a `Link` wrapping that body.
///
/// Wiring a platform crate:
/// 1. Define `fn routed_link(to: &'static str, class: &'static str, body:
///    Element) -> Element` that resolves `to` against the platform's
///    `Route` enum and returns `Link { to: ..., class, {body} }`.
/// 2. Call `ui::components::site_navbar::register_links(...)` before
///    rendering the root (e.g. at the top of `App()`).
///
/// If no builder is registered (non-routed contexts), the navbar degrades
/// to plain anchor elements instead of failing.
pub struct LinkBuilder {
    pub build: fn(to: &'static str, class: &'static str, body: Element) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

pub(crate) fn site_link(to: &'static str, class: &'static str, body: Element) -> Element {
    match LINK_BUILDER.get() {
        Some(builder) => (builder.build)(to, class, body),
        None => rsx! {
            a { class: "{class}", href: "{to}", {body} }
        },
    }
}

#[cfg(debug_assertions)]
fn log_navbar_render(path: &str, active: Option<&str>) {
    // Lightweight render trace for diagnosing active-highlight issues.
    println!("[nav] navbar render path={path} active={active:?}");
}

/// Site header: brand, nav links with active highlight, services mega
/// panel, and the contact CTA.
///
/// `current_path` is supplied by the hosting shell on every render
/// (including client-side navigations); the header itself reads no router
/// state, which keeps it a pure function of its prop. An empty or
/// malformed path renders every entry inactive.
#[component]
pub fn SiteNavbar(current_path: String) -> Element {
    let active = nav::active_target(&NAV_ENTRIES, &current_path);

    #[cfg(debug_assertions)]
    log_navbar_render(&current_path, active);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            div { class: "navbar__inner",
                {site_link("/", "navbar__brand", rsx! {
                    img {
                        class: "navbar__logo",
                        src: BRAND_LOGO,
                        alt: "Mayora Infotech logo",
                        width: "160",
                        height: "40",
                    }
                })}

                // Nav + CTA grouped so they sit close together.
                div { class: "navbar__right",
                    nav { class: "navbar__links",
                        for entry in NAV_ENTRIES.iter() {
                            NavItem {
                                key: "{entry.target_path}",
                                entry: *entry,
                                active: active == Some(entry.target_path),
                            }
                        }
                    }

                    {site_link(CTA_PATH, "navbar__cta", rsx! {
                        span { class: "navbar__cta-label", "Contact Us" }
                        span { class: "navbar__cta-icon", ArrowUpRight {} }
                    })}
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, active: bool) -> Element {
    let link_class = match (entry.has_panel, active) {
        (true, true) => "navbar__link navbar__menu-trigger navbar__link--active",
        (true, false) => "navbar__link navbar__menu-trigger",
        (false, true) => "navbar__link navbar__link--active",
        (false, false) => "navbar__link",
    };

    if entry.has_panel {
        // The wrapping div carries the hover bridge and anchors the panel;
        // hover/focus on either the trigger or the panel keeps it open.
        rsx! {
            div { class: "navbar__menu",
                {site_link(entry.target_path, link_class, rsx! {
                    "{entry.label}"
                    Chevron {}
                })}
                MegaPanel {}
            }
        }
    } else {
        site_link(entry.target_path, link_class, rsx!("{entry.label}"))
    }
}
