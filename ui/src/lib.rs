//! Shared UI crate for the Mayora Infotech marketing site. The navigation
//! data, active-route matching and header components all live here so the
//! platform crate only has to supply a route table.

pub mod nav;
pub mod views;

pub mod components {
    pub mod icons;

    // Hover-revealed services panel (components/mega_panel.rs)
    pub mod mega_panel;
    pub use mega_panel::MegaPanel;

    // Site header (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::register_links;
    pub use site_navbar::LinkBuilder;
    pub use site_navbar::SiteNavbar;
}
