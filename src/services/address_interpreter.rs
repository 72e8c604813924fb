//! Address bar input interpretation.
//!
//! Decides whether raw address-bar text is a search query or a web address and
//! turns it into an absolute URL. The rules are deliberately simple string
//! checks: no DNS, no TLD list, no URL parsing.
//!
//! Search text is appended to the search prefix verbatim, without percent
//! encoding. The engine decides what to do with spaces or reserved characters.

use tracing::debug;

use crate::types::settings::GeneralSettings;

/// What a piece of address-bar input resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A search-engine query URL built from the raw input.
    Search(String),
    /// A web address, with `https://` added when no `http` prefix was typed.
    Url(String),
}

impl NavigationTarget {
    pub fn url(&self) -> &str {
        match self {
            NavigationTarget::Search(url) | NavigationTarget::Url(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            NavigationTarget::Search(url) | NavigationTarget::Url(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, NavigationTarget::Search(_))
    }
}

/// Prepends `https://` unless `url` already starts with `http`.
pub fn with_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Turns address-bar text into a URL to load.
#[derive(Debug, Clone)]
pub struct AddressInterpreter {
    search_url: String,
}

impl AddressInterpreter {
    /// Creates an interpreter that builds search URLs as `search_url + input`.
    pub fn new(search_url: &str) -> Self {
        Self {
            search_url: search_url.to_string(),
        }
    }

    pub fn from_settings(general: &GeneralSettings) -> Self {
        Self::new(&general.search_url)
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Classifies and normalizes `input`. Returns `None` for empty input.
    ///
    /// The order of checks matters:
    /// 1. a space, or no dot at all, means search (so `"a.b c"` is a search);
    /// 2. otherwise anything not starting with `http` gets `https://`;
    /// 3. otherwise the input is used as typed.
    ///
    /// A lone `"."` therefore becomes `https://.`.
    pub fn interpret(&self, input: &str) -> Option<NavigationTarget> {
        if input.is_empty() {
            return None;
        }

        let target = if input.contains(' ') || !input.contains('.') {
            NavigationTarget::Search(format!("{}{}", self.search_url, input))
        } else {
            NavigationTarget::Url(with_scheme(input))
        };

        debug!(input, url = target.url(), search = target.is_search(), "interpreted address input");
        Some(target)
    }
}

impl Default for AddressInterpreter {
    fn default() -> Self {
        Self::from_settings(&GeneralSettings::default())
    }
}
