//! Text generator adapters
//!
//! Every supported model endpoint speaks the OpenAI chat completion
//! protocol, so a single adapter covers OpenRouter, OpenAI and local
//! servers. The endpoint is chosen through `[llm] base_url`.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatGenerator;
