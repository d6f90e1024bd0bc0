//! Prompt templates for the research flow

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt sent with every generation request
    pub fn system() -> &'static str {
        "You are a helpful research assistant."
    }

    /// Prompt asking the model to split a question into `count` sub-questions
    pub fn decomposition(query: &str, count: usize) -> String {
        format!(
            r#"You are an expert research planner. The user has asked a complex question.
Break this down into {count} specific, distinct SUB-QUESTIONS that cover different angles of the topic.

GUIDELINES:
- Do NOT generate SEO keywords. Generate full, natural language questions.
- Ensure the questions cover different aspects (e.g., economic, technical, historical).

Example for "AI in Healthcare":
What are the specific applications of AI in diagnostic radiology?
What are the privacy concerns regarding patient data in AI systems?
How does AI impact healthcare workforce employment statistics?

User Question: {query}

Return ONLY the {count} sub-questions, one per line."#
        )
    }

    /// Prompt asking the model for a cited answer over the rendered context
    pub fn synthesis(query: &str, context: &str) -> String {
        format!(
            r#"You are a senior research analyst. Provide a comprehensive answer to the user's question based on the provided sources.

User Question: {query}

Available Sources:
{context}

Instructions:
- Synthesize the data; do not just list summaries.
- If the topic is complex, break your answer down into sections with headers.
- Cite specific sources using [Source N] notation.
- If sources disagree, explicitly mention the conflict.

Your Answer:"#
        )
    }
}
