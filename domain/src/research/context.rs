//! Context Builder: ranks documents and renders a bounded prompt context.
//!
//! No relevance score comes back from retrieval, so ranking uses content
//! length (longest first) as a proxy for depth of coverage. The top
//! `max_sources` documents are rendered as numbered blocks whose ordinals
//! match the `[Source N]` citations requested from the model.

use super::document::Document;
use crate::core::string::truncate_chars;

/// Default number of documents that make it into the context.
pub const DEFAULT_MAX_SOURCES: usize = 7;

/// Default per-document content budget, in characters.
pub const DEFAULT_MAX_CHARS_PER_SOURCE: usize = 4000;

/// Rendered context plus the documents it cites, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchContext {
    pub text: String,
    pub cited: Vec<Document>,
}

impl ResearchContext {
    /// Number of `Source N` blocks in the context.
    pub fn len(&self) -> usize {
        self.cited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cited.is_empty()
    }
}

/// Deterministic ranking and truncation policy for synthesis context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextBuilder {
    max_sources: usize,
    max_chars_per_source: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            max_sources: DEFAULT_MAX_SOURCES,
            max_chars_per_source: DEFAULT_MAX_CHARS_PER_SOURCE,
        }
    }
}

impl ContextBuilder {
    pub fn new(max_sources: usize, max_chars_per_source: usize) -> Self {
        Self {
            max_sources,
            max_chars_per_source,
        }
    }

    pub fn max_sources(&self) -> usize {
        self.max_sources
    }

    pub fn max_chars_per_source(&self) -> usize {
        self.max_chars_per_source
    }

    /// Rank by content length descending and keep the top `max_sources`.
    ///
    /// The sort is stable, so equal-length documents keep their input order.
    pub fn select<'a>(&self, documents: &'a [Document]) -> Vec<&'a Document> {
        let mut ranked: Vec<&Document> = documents.iter().collect();
        ranked.sort_by_key(|doc| std::cmp::Reverse(doc.content_len()));
        ranked.truncate(self.max_sources);
        ranked
    }

    /// Build the context block for `documents`.
    ///
    /// Returns `None` when there is nothing to cite, so callers never send
    /// an empty context to the model.
    pub fn build(&self, documents: &[Document]) -> Option<ResearchContext> {
        if documents.is_empty() {
            return None;
        }

        let selected = self.select(documents);
        let blocks: Vec<String> = selected
            .iter()
            .enumerate()
            .map(|(i, doc)| self.render_block(i + 1, doc))
            .collect();

        Some(ResearchContext {
            text: blocks.join("\n\n"),
            cited: selected.into_iter().cloned().collect(),
        })
    }

    fn render_block(&self, ordinal: usize, doc: &Document) -> String {
        format!(
            "Source {}: {}\nURL: {}\nContent: {}",
            ordinal,
            doc.title,
            doc.url,
            truncate_chars(&doc.content, self.max_chars_per_source)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_len(url: &str, len: usize) -> Document {
        Document::new(url, format!("Title {}", url), "x".repeat(len))
    }

    #[test]
    fn test_empty_input_has_no_context() {
        assert!(ContextBuilder::default().build(&[]).is_none());
    }

    #[test]
    fn test_single_document_block() {
        let docs = vec![Document::new("a.com", "T", "4")];
        let context = ContextBuilder::default().build(&docs).unwrap();
        assert_eq!(context.text, "Source 1: T\nURL: a.com\nContent: 4");
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_blocks_ranked_by_length_and_separated() {
        let docs = vec![
            Document::new("short.com", "Short", "ab"),
            Document::new("long.com", "Long", "abcdef"),
        ];
        let context = ContextBuilder::default().build(&docs).unwrap();
        assert_eq!(
            context.text,
            "Source 1: Long\nURL: long.com\nContent: abcdef\n\n\
             Source 2: Short\nURL: short.com\nContent: ab"
        );
        assert_eq!(context.cited[0].url, "long.com");
    }

    #[test]
    fn test_top_seven_selected() {
        let docs: Vec<Document> = (0..10)
            .map(|i| doc_with_len(&format!("{}.com", i), (i + 1) * 10))
            .collect();
        let builder = ContextBuilder::default();
        let selected = builder.select(&docs);
        assert_eq!(selected.len(), 7);

        // No selected document is shorter than any excluded one
        let min_selected = selected.iter().map(|d| d.content_len()).min().unwrap();
        let max_excluded = docs
            .iter()
            .filter(|d| !selected.iter().any(|s| s.url == d.url))
            .map(|d| d.content_len())
            .max()
            .unwrap();
        assert!(min_selected >= max_excluded);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let docs = vec![
            doc_with_len("first.com", 5),
            doc_with_len("second.com", 5),
            doc_with_len("third.com", 5),
        ];
        let selected = ContextBuilder::new(2, 100).select(&docs);
        let urls: Vec<_> = selected.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["first.com", "second.com"]);
    }

    #[test]
    fn test_content_truncated_to_budget() {
        let docs = vec![doc_with_len("big.com", 5000)];
        let context = ContextBuilder::default().build(&docs).unwrap();
        let content = context.text.split("Content: ").nth(1).unwrap();
        assert_eq!(content.chars().count(), 4000);
        // The cited document itself is not modified
        assert_eq!(context.cited[0].content_len(), 5000);
    }

    #[test]
    fn test_truncation_is_char_based() {
        let docs = vec![Document::new("jp.com", "JP", "あ".repeat(10))];
        let context = ContextBuilder::new(7, 4).build(&docs).unwrap();
        assert!(context.text.ends_with("Content: ああああ"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs: Vec<Document> = (0..9)
            .map(|i| doc_with_len(&format!("{}.com", i), 100 - (i % 3)))
            .collect();
        let builder = ContextBuilder::default();
        assert_eq!(builder.build(&docs), builder.build(&docs));
    }
}
