//! Document retriever adapters
//!
//! - [`TavilyRetriever`]: Tavily search/extract API (default, needs a key)
//! - `DuckDuckGoRetriever`: keyless fallback, behind the `duckduckgo` feature
//!
//! Both share the same query routing: a query that names URLs is read
//! directly, anything else goes to search.

#[cfg(feature = "duckduckgo")]
pub mod duckduckgo;
#[cfg(feature = "duckduckgo")]
mod page;
pub mod tavily;

#[cfg(feature = "duckduckgo")]
pub use duckduckgo::DuckDuckGoRetriever;
pub use tavily::TavilyRetriever;

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'`]+"#).expect("URL pattern is valid"));

/// How a retriever should treat a free-text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRoute {
    /// Read these pages directly
    Extract(Vec<String>),
    /// Query scoped to one website; served by search
    Map,
    /// Plain web search
    Search,
}

impl QueryRoute {
    /// Classify a query by case-insensitive substring tests.
    ///
    /// `http` or `www.` selects extraction, `site:` or `website` selects
    /// mapping, anything else is a search. A query that mentions `http`
    /// without a parseable URL falls back to search.
    pub fn classify(query: &str) -> Self {
        let lower = query.to_lowercase();
        if lower.contains("http") || lower.contains("www.") {
            let urls = extract_urls(query);
            if urls.is_empty() {
                QueryRoute::Search
            } else {
                QueryRoute::Extract(urls)
            }
        } else if lower.contains("site:") || lower.contains("website") {
            QueryRoute::Map
        } else {
            QueryRoute::Search
        }
    }
}

/// Find `http(s)://` URLs in free text, trimming trailing punctuation.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')']))
        .filter(|url| url.len() > "https://".len())
        .map(str::to_string)
        .collect()
}
