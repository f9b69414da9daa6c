//! # Cuisine Catalog
//!
//! The dropdown entries and their display icons. Keywords are sent to the
//! places search verbatim, so `Fast_food` keeps its odd casing.

/// Icon used when a keyword has no catalog entry.
pub const DEFAULT_ICON: &str = "🍽️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuisine {
    pub label: &'static str,
    pub keyword: &'static str,
    pub icon: &'static str,
}

pub const CATALOG: &[Cuisine] = &[
    Cuisine { label: "Italian", keyword: "italian", icon: "🍕" },
    Cuisine { label: "Chinese", keyword: "chinese", icon: "🥡" },
    Cuisine { label: "Indian", keyword: "indian", icon: "🍛" },
    Cuisine { label: "Mexican", keyword: "mexican", icon: "🌮" },
    Cuisine { label: "Japanese", keyword: "japanese", icon: "🍣" },
    Cuisine { label: "Sweet Dish", keyword: "dessert", icon: "🍰" },
    Cuisine { label: "Fast Food", keyword: "Fast_food", icon: "🍟" },
];

/// Exact, case-sensitive lookup by search keyword.
pub fn find(keyword: &str) -> Option<&'static Cuisine> {
    CATALOG.iter().find(|c| c.keyword == keyword)
}

/// Display icon for a keyword, falling back to [`DEFAULT_ICON`].
pub fn icon_for(keyword: &str) -> &'static str {
    find(keyword).map(|c| c.icon).unwrap_or(DEFAULT_ICON)
}

/// Dropdown label for a keyword; unknown keywords are shown as-is.
pub fn label_for(keyword: &str) -> &str {
    find(keyword).map(|c| c.label).unwrap_or(keyword)
}
