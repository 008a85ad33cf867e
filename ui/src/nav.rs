//! Navigation data and active-route matching for the site header.
//!
//! Everything here is a pure function of the current path string, so the
//! navbar can be exercised in tests without a live router. The dataset is
//! fixed: entries render in declared order, paths are unique, and exactly
//! one entry owns the expandable services panel.

/// One top-level navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// Destination route, always rooted at `/`. Rendered links use this
    /// value verbatim (no trailing-slash normalization, no encoding).
    pub target_path: &'static str,
    /// Whether this entry anchors the hover-revealed mega panel.
    pub has_panel: bool,
}

/// A navigable link inside the mega panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLink {
    pub label: &'static str,
    pub target_path: &'static str,
}

/// The site's navigation, in display order.
pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry {
        label: "Home",
        target_path: "/",
        has_panel: false,
    },
    NavEntry {
        label: "About Us",
        target_path: "/about",
        has_panel: false,
    },
    NavEntry {
        label: "Services",
        target_path: "/services",
        has_panel: true,
    },
    NavEntry {
        label: "Features",
        target_path: "/features",
        has_panel: false,
    },
    NavEntry {
        label: "Blog",
        target_path: "/blog",
        has_panel: false,
    },
    NavEntry {
        label: "Career",
        target_path: "/career",
        has_panel: false,
    },
];

/// Solution entries shown in the panel's SOLUTIONS column. Informational
/// only; they carry no destination of their own.
pub const SOLUTION_ITEMS: [&str; 9] = [
    "Platform Migration",
    "Growth Services",
    "OnePress",
    "Staff Augmentation",
    "SnapWP – Headless",
    "Artificial Intelligence",
    "Managed Services",
    "Quality Engineering",
    "Discovery & Consultation",
];

/// Industry entries shown in the panel's INDUSTRIES column. Informational
/// only, same as the solution items.
pub const INDUSTRY_ITEMS: [&str; 3] = [
    "Digital Publication/Media",
    "Automotive",
    "Conglomerates",
];

pub const VIEW_ALL_SOLUTIONS: PanelLink = PanelLink {
    label: "VIEW ALL SOLUTIONS",
    target_path: "/services",
};

pub const VIEW_ALL_INDUSTRIES: PanelLink = PanelLink {
    label: "VIEW ALL INDUSTRIES",
    target_path: "/industries",
};

/// Destination of the call-to-action button.
pub const CTA_PATH: &str = "/contact";

/// Whether `current_path` falls under this entry.
///
/// The root entry matches only the root path exactly; otherwise every
/// route would highlight Home as a prefix. All other entries match by
/// prefix so a sub-route like `/services/web` still highlights Services.
pub fn entry_matches(entry: &NavEntry, current_path: &str) -> bool {
    if entry.target_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(entry.target_path)
    }
}

/// The `target_path` of the single entry to highlight for `current_path`.
///
/// A path that is empty or not rooted at `/` (e.g. the component rendered
/// outside a routed context) highlights nothing rather than failing.
/// Should the dataset ever grow overlapping paths, the longest matching
/// prefix wins; the shipped flat path set never has more than one match.
pub fn active_target<'a>(entries: &'a [NavEntry], current_path: &str) -> Option<&'a str> {
    if !current_path.starts_with('/') {
        return None;
    }
    entries
        .iter()
        .filter(|entry| entry_matches(entry, current_path))
        .max_by_key(|entry| entry.target_path.len())
        .map(|entry| entry.target_path)
}
