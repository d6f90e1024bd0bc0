//! Fetch a web page and reduce it to readable text.

use research_application::ports::document_retriever::RetrievalError;
use research_domain::Document;
use scraper::{ElementRef, Html, Node, Selector};

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Tags whose entire subtree is ignored
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Download `url` and turn it into a [`Document`].
///
/// HTML is stripped to text; other content types are kept as-is.
pub(crate) async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<Document, RetrievalError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            RetrievalError::ConnectionError(format!("Failed to fetch {}: {}", url, e))
        } else {
            RetrievalError::RequestFailed(format!("Failed to fetch {}: {}", url, e))
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RetrievalError::RequestFailed(format!(
            "HTTP error fetching {}: {} {}",
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    if response.content_length().unwrap_or(0) > MAX_BODY_SIZE as u64 {
        return Err(RetrievalError::InvalidResponse(format!(
            "Response from {} exceeds {} bytes",
            url, MAX_BODY_SIZE
        )));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response
        .bytes()
        .await
        .map_err(|e| RetrievalError::InvalidResponse(format!("Failed to read body: {}", e)))?;
    if body.len() > MAX_BODY_SIZE {
        return Err(RetrievalError::InvalidResponse(format!(
            "Response from {} exceeds {} bytes",
            url, MAX_BODY_SIZE
        )));
    }
    let body = String::from_utf8_lossy(&body);

    if content_type.contains("text/html") || content_type.contains("application/xhtml") {
        let title = page_title(&body).unwrap_or_else(|| url.to_string());
        Ok(Document::new(url, title, html_to_text(&body)))
    } else {
        Ok(Document::new(url, url, body.into_owned()))
    }
}

/// Contents of the `<title>` element, if present and non-blank
pub(crate) fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let raw = document.select(&selector).next()?.text().collect::<String>();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

/// Extract readable text from HTML, stripping tags, scripts, and styles
pub(crate) fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    let parts = match body {
        Some(body) => collect_element_text(body),
        None => collect_element_text(document.root_element()),
    };

    clean_whitespace(&parts.join(" "))
}

fn collect_element_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse runs of spaces and keep at most two consecutive newlines
fn clean_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_whitespace = false;
    let mut newline_count = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
            prev_was_whitespace = true;
        } else if ch.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
            }
            prev_was_whitespace = true;
            newline_count = 0;
        } else {
            result.push(ch);
            prev_was_whitespace = false;
            newline_count = 0;
        }
    }

    result.trim().to_string()
}
