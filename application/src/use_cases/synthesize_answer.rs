//! Answer Synthesizer
//!
//! Builds the ranked, truncated context and asks the model for an
//! integrated answer citing `[Source N]`.

use crate::ports::text_generator::{TextGenerator, generate_or_empty};
use research_domain::{ContextBuilder, Document, NO_SOURCES_ANSWER, PromptTemplate, Query};
use std::sync::Arc;
use tracing::{debug, info};

pub struct AnswerSynthesizer {
    generator: Arc<dyn TextGenerator>,
    context_builder: ContextBuilder,
}

impl AnswerSynthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>, context_builder: ContextBuilder) -> Self {
        Self {
            generator,
            context_builder,
        }
    }

    /// Produce the answer for `query` from `documents`.
    ///
    /// With no documents the fixed fallback answer is returned and the
    /// model is not called. Otherwise the model output is returned
    /// verbatim, including an empty string if generation failed.
    pub async fn synthesize(&self, query: &Query, documents: &[Document]) -> String {
        let Some(context) = self.context_builder.build(documents) else {
            info!("No sources to synthesize from");
            return NO_SOURCES_ANSWER.to_string();
        };

        debug!(
            cited = context.len(),
            context_chars = context.text.len(),
            "Context built"
        );

        let prompt = PromptTemplate::synthesis(query.content(), &context.text);
        generate_or_empty(self.generator.as_ref(), &prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Reply, ScriptedGenerator, doc};

    fn query(text: &str) -> Query {
        Query::try_new(text).unwrap()
    }

    #[tokio::test]
    async fn test_no_documents_skips_model() {
        let generator = Arc::new(ScriptedGenerator::echo("should not be used"));
        let synthesizer = AnswerSynthesizer::new(generator.clone(), ContextBuilder::default());

        let answer = synthesizer.synthesize(&query("q"), &[]).await;

        assert_eq!(answer, "I couldn't find any relevant sources.");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_returned_verbatim() {
        let generator = Arc::new(ScriptedGenerator::echo("  Four [Source 1]  "));
        let synthesizer = AnswerSynthesizer::new(generator.clone(), ContextBuilder::default());

        let answer = synthesizer
            .synthesize(&query("What is 2+2?"), &[doc("a.com", "4")])
            .await;

        assert_eq!(answer, "  Four [Source 1]  ");
        let prompt = &generator.prompts()[0];
        assert!(prompt.contains("What is 2+2?"));
        assert!(prompt.contains("Source 1: Title of a.com\nURL: a.com\nContent: 4"));
    }

    #[tokio::test]
    async fn test_context_limited_to_budget() {
        let generator = Arc::new(ScriptedGenerator::echo("answer"));
        let synthesizer = AnswerSynthesizer::new(generator.clone(), ContextBuilder::new(2, 3));
        let docs = vec![
            doc("short.com", "x"),
            doc("long.com", "yyyyyyyy"),
            doc("mid.com", "zzzz"),
        ];

        synthesizer.synthesize(&query("q"), &docs).await;

        let prompt = &generator.prompts()[0];
        assert!(prompt.contains("Source 1: Title of long.com\nURL: long.com\nContent: yyy\n"));
        assert!(prompt.contains("Source 2: Title of mid.com\nURL: mid.com\nContent: zzz\n"));
        assert!(!prompt.contains("short.com"));
    }

    #[tokio::test]
    async fn test_generation_failure_yields_empty_answer() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Fail(
            "timeout".to_string(),
        )]));
        let synthesizer = AnswerSynthesizer::new(generator, ContextBuilder::default());

        let answer = synthesizer
            .synthesize(&query("q"), &[doc("a.com", "content")])
            .await;

        assert_eq!(answer, "");
    }
}
