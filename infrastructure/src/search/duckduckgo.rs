//! DuckDuckGo retriever: zero-configuration alternative to Tavily.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/),
//! which needs no API key but returns abstracts and related topics rather
//! than full result listings. Each populated section becomes a
//! [`Document`]:
//!
//! - **Abstract**: `AbstractURL`, `Heading`, `AbstractText`
//! - **Definition**: `DefinitionURL`, `DefinitionSource`, `Definition`
//! - **Related topics**: `FirstURL` and `Text` (nested groups flattened)
//!
//! Queries that name URLs fetch those pages instead.

use super::QueryRoute;
use super::page::fetch_page;
use crate::error::ConfigError;
use async_trait::async_trait;
use research_application::ports::document_retriever::{DocumentRetriever, RetrievalError};
use research_domain::Document;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// DuckDuckGo Instant Answer API endpoint (no API key required).
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

const USER_AGENT: &str = "ResearchAssistant/0.1 (+https://duckduckgo.com/api)";

/// Document retriever backed by the DuckDuckGo Instant Answer API
pub struct DuckDuckGoRetriever {
    client: reqwest::Client,
    api_url: String,
}

impl DuckDuckGoRetriever {
    pub fn new(timeout_secs: u64) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_url: DDG_API_URL.to_string(),
        })
    }

    /// Point the adapter at a different endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn instant_answer(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        info!(query, "Using DuckDuckGo instant answer");
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    RetrievalError::ConnectionError(e.to_string())
                } else {
                    RetrievalError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RetrievalError::RequestFailed(format!(
                "Search API returned error: {}",
                response.status()
            )));
        }

        // The API answers with `application/x-javascript`, so parse the text.
        let text = response
            .text()
            .await
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))?;

        Ok(documents_from_answer(&body, max_results))
    }

    async fn fetch_pages(&self, urls: Vec<String>, max_results: usize) -> Vec<Document> {
        info!(urls = ?urls, "Fetching pages directly");
        let mut documents = Vec::new();
        for url in urls.into_iter().take(max_results) {
            match fetch_page(&self.client, &url).await {
                Ok(doc) => documents.push(doc),
                Err(e) => warn!(url = %url, "Page fetch failed: {}", e),
            }
        }
        documents
    }
}

fn non_empty<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value[key].as_str().filter(|s| !s.trim().is_empty())
}

/// Convert an Instant Answer response into documents, best sections first.
fn documents_from_answer(data: &Value, max_results: usize) -> Vec<Document> {
    let mut documents = Vec::new();

    if let (Some(text), Some(url)) = (
        non_empty(data, "AbstractText"),
        non_empty(data, "AbstractURL"),
    ) {
        let title = non_empty(data, "Heading")
            .or_else(|| non_empty(data, "AbstractSource"))
            .unwrap_or(url);
        documents.push(Document::new(url, title, text));
    }

    if let (Some(text), Some(url)) = (
        non_empty(data, "Definition"),
        non_empty(data, "DefinitionURL"),
    ) {
        let source = non_empty(data, "DefinitionSource").unwrap_or("Definition");
        documents.push(Document::new(url, source, text));
    }

    let mut topics = Vec::new();
    if let Some(items) = data["RelatedTopics"].as_array() {
        collect_topics(items, &mut topics);
    }
    documents.extend(topics);

    documents.truncate(max_results);
    documents
}

fn collect_topics(items: &[Value], out: &mut Vec<Document>) {
    for item in items {
        if let Some(group) = item["Topics"].as_array() {
            collect_topics(group, out);
        } else if let (Some(text), Some(url)) = (non_empty(item, "Text"), non_empty(item, "FirstURL"))
        {
            let title = text.split(" - ").next().unwrap_or(text);
            out.push(Document::new(url, title, text));
        }
    }
}

#[async_trait]
impl DocumentRetriever for DuckDuckGoRetriever {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        match QueryRoute::classify(query) {
            QueryRoute::Extract(urls) => Ok(self.fetch_pages(urls, max_results).await),
            QueryRoute::Map | QueryRoute::Search => self.instant_answer(query, max_results).await,
        }
    }
}
