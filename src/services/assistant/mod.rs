//! Recommendation assistant
//!
//! Turns a free-text question into a recommendation drawn from the tool catalog:
//! intent analysis, candidate retrieval, selection and markdown composition, with the
//! language model consulted for general questions, empty results and reasoning
//! enrichment. See [`RecommendationOrchestrator`] for the control flow.

pub mod composer;
pub mod fallback;
pub mod intent;
pub mod keywords;
pub mod orchestrator;
pub mod prompts;
pub mod ranker;
pub mod reasoning;
pub mod responses;
pub mod retriever;
pub mod suggestions;

pub use orchestrator::{AskRequest, AssistantError, RecommendationOrchestrator};
pub use suggestions::Suggestion;
