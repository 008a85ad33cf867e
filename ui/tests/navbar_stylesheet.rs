#![cfg(test)]
//! Lint for the navbar stylesheet. The mega panel's reveal behavior is
//! pure CSS, so a refactor that drops a selector would silently break it
//! only at runtime. This embeds the stylesheet and asserts the rules the
//! components rely on are still present.
//!
//! If you intentionally rename a class, update both the component markup
//! and this list.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[test]
fn stylesheet_exists_and_is_not_empty() {
    assert!(
        !NAVBAR_CSS.trim().is_empty(),
        "navbar stylesheet appears to be empty"
    );
}

#[test]
fn stylesheet_contains_required_selectors() {
    let required = [
        ".navbar__inner",
        ".navbar__link:hover",
        ".navbar__link--active",
        ".navbar__cta",
        ".navbar__panel",
    ];
    for token in required {
        assert!(
            NAVBAR_CSS.contains(token),
            "expected selector `{token}` missing from navbar stylesheet"
        );
    }
}

#[test]
fn panel_stays_open_from_trigger_to_panel() {
    // The panel must open on trigger hover/focus, stay open while hovered
    // itself, and the menu wrapper must carry the hover bridge that covers
    // the gap between trigger and panel.
    let required = [
        ".navbar__menu:hover .navbar__panel",
        ".navbar__menu:focus-within .navbar__panel",
        ".navbar__panel:hover",
        ".navbar__menu::before",
    ];
    for token in required {
        assert!(
            NAVBAR_CSS.contains(token),
            "expected selector `{token}` missing: panel reveal would flicker or never open"
        );
    }
}
