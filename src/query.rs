//! Query String Utilities
//!
//! Reading parameters from the page URL and building outbound page URLs.

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{DETAIL_PAGE, LISTING_PAGE};

/// Characters escaped by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parsed `?key=value&...` pairs, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = search
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `name`, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value for `name`; blank counts as absent
    pub fn get_trimmed(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Query parameters of the current document location
pub fn current_params() -> QueryParams {
    match window().location().search() {
        Ok(search) => QueryParams::parse(&search),
        Err(e) => {
            log::error!("[Query] Cannot read location.search: {:?}", e);
            QueryParams::default()
        }
    }
}

/// Look up a single parameter of the current page URL
pub fn get_param(name: &str) -> Option<String> {
    current_params().get(name).map(str::to_string)
}

// ========================
// Outbound URLs
// ========================

pub fn category_url(category: &str) -> String {
    format!("{}?category={}", LISTING_PAGE, encode_component(category))
}

pub fn search_url(query: &str) -> String {
    format!("{}?search={}", LISTING_PAGE, encode_component(query))
}

pub fn detail_url(id: &str) -> String {
    format!("{}?id={}", DETAIL_PAGE, encode_component(id))
}

/// Where a search form submission should go, `None` if it should be ignored
pub fn search_destination(raw_input: &str) -> Option<String> {
    let query = raw_input.trim();
    if query.is_empty() {
        return None;
    }
    Some(search_url(query))
}

/// Navigate the browser to `url`
pub fn navigate(url: &str) {
    log::debug!("[Nav] -> {}", url);
    if let Err(e) = window().location().set_href(url) {
        log::error!("[Nav] Navigation to {} failed: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_params() {
        let params = QueryParams::parse("?category=Seafood&id=52772");
        assert_eq!(params.get("category"), Some("Seafood"));
        assert_eq!(params.get("id"), Some("52772"));
        assert_eq!(params.get("search"), None);
    }

    #[test]
    fn test_parse_decodes_and_keeps_first() {
        let params = QueryParams::parse("search=fish+%26+chips&search=other&flag");
        assert_eq!(params.get("search"), Some("fish & chips"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(QueryParams::parse("").get("id"), None);
    }

    #[test]
    fn test_get_trimmed_treats_blank_as_absent() {
        let params = QueryParams::parse("?category=%20%20&search=%20pie%20");
        assert_eq!(params.get_trimmed("category"), None);
        assert_eq!(params.get_trimmed("search").as_deref(), Some("pie"));
    }

    #[test]
    fn test_outbound_urls_escape_values() {
        assert_eq!(category_url("Side Dish"), "meals.html?category=Side%20Dish");
        assert_eq!(detail_url("52772"), "meal-details.html?id=52772");
        assert_eq!(search_url("mac & cheese"), "meals.html?search=mac%20%26%20cheese");
    }

    #[test]
    fn test_search_destination() {
        assert_eq!(search_destination("  "), None);
        assert_eq!(search_destination(""), None);
        assert_eq!(search_destination("chicken").as_deref(), Some("meals.html?search=chicken"));
        assert_eq!(search_destination("  beef ").as_deref(), Some("meals.html?search=beef"));
    }
}
