//! Tavily retriever.
//!
//! Uses the REST endpoints `/search` and `/extract`. Query routing follows
//! [`QueryRoute`]: URL queries go to extract, everything else to search.
//! Site-scoped queries have no dedicated endpoint and are searched.

use super::QueryRoute;
use crate::config::FileSearchConfig;
use crate::error::ConfigError;
use async_trait::async_trait;
use research_application::ports::document_retriever::{DocumentRetriever, RetrievalError};
use research_domain::Document;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

const EXTRACTED_TITLE: &str = "Extracted Content";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    results: Vec<ExtractHit>,
}

#[derive(Debug, Deserialize)]
struct ExtractHit {
    #[serde(default)]
    url: String,
    title: Option<String>,
    raw_content: Option<String>,
    content: Option<String>,
}

impl From<SearchHit> for Document {
    fn from(hit: SearchHit) -> Self {
        Document::new(hit.url, hit.title, hit.content)
    }
}

impl From<ExtractHit> for Document {
    fn from(hit: ExtractHit) -> Self {
        Document::new(
            hit.url,
            hit.title.unwrap_or_else(|| EXTRACTED_TITLE.to_string()),
            hit.raw_content.or(hit.content).unwrap_or_default(),
        )
    }
}

/// Document retriever backed by the Tavily API
pub struct TavilyRetriever {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    search_depth: String,
}

impl TavilyRetriever {
    /// Build the adapter from config, resolving the API key.
    pub fn from_config(config: &FileSearchConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| ConfigError::MissingCredential {
                provider: "Tavily".to_string(),
                env_var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &FileSearchConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            search_depth: config.search_depth.clone(),
        })
    }

    async fn post(&self, endpoint: &str, body: Value) -> Result<reqwest::Response, RetrievalError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    RetrievalError::ConnectionError(e.to_string())
                } else {
                    RetrievalError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RetrievalError::RequestFailed(format!(
                "Tavily {} returned HTTP {}: {}",
                endpoint, status, text
            )));
        }
        Ok(response)
    }

    async fn run_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        info!(query, "Using Tavily search");
        let body = json!({
            "query": query,
            "max_results": max_results,
            "search_depth": self.search_depth,
            "include_raw_content": false,
            "include_answer": false,
            "include_images": false,
        });

        let parsed: SearchResponse = self
            .post("search", body)
            .await?
            .json()
            .await
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))?;

        Ok(parsed.results.into_iter().map(Document::from).collect())
    }

    async fn run_extract(
        &self,
        urls: Vec<String>,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        info!(urls = ?urls, "Using Tavily extract");
        let parsed: ExtractResponse = self
            .post("extract", json!({ "urls": urls }))
            .await?
            .json()
            .await
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))?;

        Ok(parsed
            .results
            .into_iter()
            .take(max_results)
            .map(Document::from)
            .collect())
    }
}

#[async_trait]
impl DocumentRetriever for TavilyRetriever {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        match QueryRoute::classify(query) {
            QueryRoute::Extract(urls) => self.run_extract(urls, max_results).await,
            QueryRoute::Map => {
                debug!(query, "Site-scoped query, using search");
                self.run_search(query, max_results).await
            }
            QueryRoute::Search => self.run_search(query, max_results).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn retriever_for(server: &MockServer) -> TavilyRetriever {
        let config = FileSearchConfig {
            base_url: server.uri(),
            ..Default::default()
        };
        TavilyRetriever::with_api_key(&config, "tvly-test").unwrap()
    }

    #[tokio::test]
    async fn test_plain_query_uses_advanced_search() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tvly-test"))
            .and(body_partial_json(json!({
                "query": "rust async runtimes",
                "max_results": 3,
                "search_depth": "advanced",
                "include_answer": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "url": "https://tokio.rs", "title": "Tokio", "content": "An async runtime", "score": 0.9 },
                    { "url": "https://async.rs", "title": "async-std" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let docs = retriever_for(&server)
            .search("rust async runtimes", 3)
            .await
            .unwrap();

        assert_eq!(
            docs,
            vec![
                Document::new("https://tokio.rs", "Tokio", "An async runtime"),
                Document::new("https://async.rs", "async-std", ""),
            ]
        );
    }

    #[tokio::test]
    async fn test_url_query_uses_extract() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/extract"))
            .and(body_partial_json(json!({ "urls": ["https://example.com/post"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "url": "https://example.com/post", "raw_content": "Full page text" }
                ],
                "failed_results": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let docs = retriever_for(&server)
            .search("Summarize https://example.com/post", 5)
            .await
            .unwrap();

        assert_eq!(
            docs,
            vec![Document::new(
                "https://example.com/post",
                "Extracted Content",
                "Full page text"
            )]
        );
    }

    #[tokio::test]
    async fn test_site_query_falls_back_to_search() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let docs = retriever_for(&server)
            .search("site:docs.rs serde", 5)
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(432).set_body_string("plan limit"))
            .mount(&server)
            .await;

        let err = retriever_for(&server).search("q", 5).await.unwrap_err();
        assert!(matches!(err, RetrievalError::RequestFailed(msg) if msg.contains("plan limit")));
    }

    #[test]
    fn test_extract_hit_prefers_raw_content() {
        let hit = ExtractHit {
            url: "u".to_string(),
            title: Some("Page".to_string()),
            raw_content: None,
            content: Some("summary".to_string()),
        };
        assert_eq!(Document::from(hit), Document::new("u", "Page", "summary"));
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = FileSearchConfig {
            api_key_env: "RESEARCH_TEST_UNSET_TAVILY_KEY".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TavilyRetriever::from_config(&config),
            Err(ConfigError::MissingCredential { .. })
        ));
    }
}
