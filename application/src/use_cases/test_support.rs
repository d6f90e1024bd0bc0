//! Fake ports shared by the use case tests.

use crate::ports::document_retriever::{DocumentRetriever, RetrievalError};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use research_domain::Document;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted reply for [`ScriptedGenerator`]
pub(crate) enum Reply {
    Text(String),
    Fail(String),
}

/// Generator that returns scripted replies in order and records prompts.
///
/// Once the script is exhausted it keeps returning `fallback`.
pub(crate) struct ScriptedGenerator {
    replies: Mutex<VecDeque<Reply>>,
    fallback: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: String::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with the same text
    pub(crate) fn echo(text: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: text.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(e)) => Err(GenerationError::RequestFailed(e)),
            None => Ok(self.fallback.clone()),
        }
    }
}

/// Retriever with canned results per query and a call log.
///
/// Queries without an entry return `default`; queries listed in
/// `failing` return an error.
pub(crate) struct CannedRetriever {
    results: HashMap<String, Vec<Document>>,
    failing: Vec<String>,
    default: Vec<Document>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl CannedRetriever {
    pub(crate) fn new() -> Self {
        Self {
            results: HashMap::new(),
            failing: Vec::new(),
            default: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with(mut self, query: &str, docs: Vec<Document>) -> Self {
        self.results.insert(query.to_string(), docs);
        self
    }

    pub(crate) fn failing(mut self, query: &str) -> Self {
        self.failing.push(query.to_string());
        self
    }

    pub(crate) fn with_default(mut self, docs: Vec<Document>) -> Self {
        self.default = docs;
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentRetriever for CannedRetriever {
    fn name(&self) -> &str {
        "canned"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Document>, RetrievalError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        if self.failing.iter().any(|q| q == query) {
            return Err(RetrievalError::ConnectionError("unreachable".to_string()));
        }
        Ok(self
            .results
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }
}

pub(crate) fn doc(url: &str, content: &str) -> Document {
    Document::new(url, format!("Title of {}", url), content)
}
