//! App Configuration
//!
//! Per-page settings read from the `<body>` element's data attributes.

use leptos::prelude::*;

/// TheMealDB public v1 endpoint
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

pub const HOME_PAGE: &str = "index.html";
pub const LISTING_PAGE: &str = "meals.html";
pub const DETAIL_PAGE: &str = "meal-details.html";

/// Categories sampled by the listing page when no filter is given
pub const SAMPLE_CATEGORIES: usize = 6;
/// Meals taken from each sampled category
pub const SAMPLE_PER_CATEGORY: usize = 3;

/// Which page the controller drives, from `<body data-page="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    Home,
    Listing,
    Detail,
}

impl PageRole {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim() {
            "home" => Some(Self::Home),
            "listing" => Some(Self::Listing),
            "detail" => Some(Self::Detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub role: PageRole,
    /// API base URL without trailing slash
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            role: PageRole::Home,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from the raw `data-page` and `data-api-base` attribute values
    pub fn from_markers(page: Option<&str>, api_base: Option<&str>) -> Self {
        let role = match page.and_then(PageRole::from_marker) {
            Some(role) => role,
            None => {
                log::warn!("[Config] Unknown page marker {:?}, falling back to home", page);
                PageRole::Home
            }
        };
        let api_base = api_base
            .map(|b| b.trim().trim_end_matches('/'))
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        Self { role, api_base }
    }

    /// Read the markers off the current document's `<body>`
    pub fn from_document() -> Self {
        let Some(body) = document().body() else {
            log::warn!("[Config] Document has no <body>, using defaults");
            return Self::default();
        };
        let page = body.get_attribute("data-page");
        let api_base = body.get_attribute("data-api-base");
        Self::from_markers(page.as_deref(), api_base.as_deref())
    }
}
