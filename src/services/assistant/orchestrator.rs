use crate::configuration::AssistantSettings;
use crate::connectors::{ConnectorError, LanguageModelConnector, ToolCatalogConnector};
use crate::models::{
    Category, CategoryOrder, ChatMessage, RecommendationResult, SearchFilters, Sources, ToolQuery,
    UserIntent,
};
use crate::services::assistant::fallback::keep_on_failure;
use crate::services::assistant::ranker::Selection;
use crate::services::assistant::{
    composer, intent, prompts, ranker, reasoning, responses, retriever,
};
use chrono::Utc;
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

/// Steps of one recommendation run, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classify,
    GeneralLlm,
    Retrieve,
    NoResultsLlm,
    RankAndCompose,
    Error,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Classify => "classify",
            Stage::GeneralLlm => "general_llm",
            Stage::Retrieve => "retrieve",
            Stage::NoResultsLlm => "no_results_llm",
            Stage::RankAndCompose => "rank_and_compose",
            Stage::Error => "error",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("catalog retrieval failed: {0}")]
    Retrieval(#[from] ConnectorError),
}

/// One question as received from the HTTP layer, already validated.
#[derive(Debug, Clone, Default)]
pub struct AskRequest {
    pub question: String,
    pub context: Vec<ChatMessage>,
    pub filters: SearchFilters,
}

pub struct RecommendationOrchestrator {
    catalog: Arc<dyn ToolCatalogConnector>,
    llm: Arc<dyn LanguageModelConnector>,
    settings: AssistantSettings,
}

impl RecommendationOrchestrator {
    pub fn new(
        catalog: Arc<dyn ToolCatalogConnector>,
        llm: Arc<dyn LanguageModelConnector>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            catalog,
            llm,
            settings,
        }
    }

    /// Answer a question. Never fails: every error, panic included, ends in the fixed
    /// error response.
    #[tracing::instrument(
        name = "Answer assistant question",
        skip_all,
        fields(question_chars = request.question.chars().count(), turns = request.context.len())
    )]
    pub async fn ask(&self, request: &AskRequest) -> RecommendationResult {
        match AssertUnwindSafe(self.run(request)).catch_unwind().await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                tracing::error!(stage = %Stage::Error, "Recommendation failed: {}", err);
                responses::error()
            }
            Err(_) => {
                tracing::error!(stage = %Stage::Error, "Recommendation pipeline panicked");
                responses::error()
            }
        }
    }

    async fn run(&self, request: &AskRequest) -> Result<RecommendationResult, AssistantError> {
        let intent = intent::analyze(&request.question);
        tracing::debug!(
            stage = %Stage::Classify,
            categories = ?intent.categories,
            priority = ?intent.priority,
            general = intent.is_general_question,
            "Question classified"
        );
        let history = self.recent_history(&request.context);

        if intent.is_general_question && self.llm.is_available() {
            return Ok(self.answer_general(&request.question, history).await);
        }

        tracing::debug!(stage = %Stage::Retrieve, "Retrieving candidates");
        let (candidates, categories) = tokio::try_join!(
            retriever::retrieve(
                self.catalog.as_ref(),
                &intent,
                &request.filters,
                self.settings.candidate_limit,
            ),
            self.catalog.list_categories(CategoryOrder::default()),
        )?;

        match ranker::select(&candidates, self.settings.max_alternatives) {
            Some(selection) => Ok(self
                .recommend(&request.question, &intent, selection, &categories, history)
                .await),
            None if self.llm.is_available() => {
                self.advise_without_match(&request.question, &intent, history)
                    .await
            }
            None => {
                tracing::info!("No candidate matched the question");
                Ok(responses::no_results())
            }
        }
    }

    fn recent_history<'a>(&self, context: &'a [ChatMessage]) -> &'a [ChatMessage] {
        let skip = context.len().saturating_sub(self.settings.history_turns);
        &context[skip..]
    }

    async fn answer_general(&self, question: &str, history: &[ChatMessage]) -> RecommendationResult {
        tracing::debug!(stage = %Stage::GeneralLlm, provider = %self.llm.name(), "Asking language model");
        match self
            .llm
            .generate(question, history, Some(prompts::GENERAL_SYSTEM_PROMPT))
            .await
        {
            Ok(text) => responses::general_answer(text, self.llm.name()),
            Err(err) => {
                tracing::warn!("General answer unavailable, falling back: {}", err);
                responses::no_results()
            }
        }
    }

    async fn advise_without_match(
        &self,
        question: &str,
        intent: &UserIntent,
        history: &[ChatMessage],
    ) -> Result<RecommendationResult, AssistantError> {
        tracing::debug!(stage = %Stage::NoResultsLlm, "No candidates, asking language model");
        let context = self
            .catalog
            .query(&ToolQuery::published(self.settings.context_tools))
            .await?;

        let prompt = prompts::catalog_advice(question, intent, &context);
        Ok(
            match self
                .llm
                .generate(&prompt, history, Some(prompts::CATALOG_SYSTEM_PROMPT))
                .await
            {
                Ok(text) => responses::catalog_advice(text, self.llm.name()),
                Err(err) => {
                    tracing::warn!("Catalog advice unavailable, falling back: {}", err);
                    responses::no_results()
                }
            },
        )
    }

    async fn recommend(
        &self,
        question: &str,
        intent: &UserIntent,
        selection: Selection<'_>,
        categories: &[Category],
        history: &[ChatMessage],
    ) -> RecommendationResult {
        let Selection {
            primary,
            alternatives,
        } = selection;
        tracing::debug!(
            stage = %Stage::RankAndCompose,
            primary = %primary.name,
            alternatives = alternatives.len(),
            "Composing recommendation"
        );

        let mut reasoning = reasoning::build(intent, primary, alternatives, categories);
        let mut external = vec![];

        if self.settings.enrich_reasoning && self.llm.is_available() {
            let prompt = prompts::enrichment(question, primary, alternatives, &reasoning);
            let outcome = keep_on_failure(
                reasoning,
                Duration::from_secs(self.settings.enrichment_timeout_secs),
                self.llm
                    .generate(&prompt, history, Some(prompts::ENRICHMENT_SYSTEM_PROMPT)),
            )
            .await;
            if outcome.is_updated() {
                external.push(self.llm.name().to_string());
            }
            reasoning = outcome.into_inner();
        }

        let action_suggestion = reasoning::action_suggestion(primary);
        let answer = composer::compose(question, primary, alternatives, &reasoning, &action_suggestion);

        RecommendationResult {
            answer,
            primary: Some(composer::summarize(primary)),
            alternatives: alternatives.iter().map(composer::summarize).collect(),
            reasoning,
            action_suggestion,
            follow_up_questions: reasoning::follow_up_questions(intent, primary, alternatives),
            sources: Sources {
                internal: true,
                apis: vec!["tools".to_string(), "categories".to_string()],
                external,
            },
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::{InMemoryToolCatalog, MockLanguageModel};
    use crate::models::{PricingModel, Tool, ToolStatus};
    use async_trait::async_trait;
    use uuid::Uuid;

    fn marketing_tool(name: &str, rating: f64) -> Tool {
        Tool {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: Some(format!("{} automatise votre marketing digital", name)),
            category_slug: Some("marketing".to_string()),
            pricing_model: Some(PricingModel::Freemium),
            overall_rating: rating,
            status: ToolStatus::Published,
            ..Default::default()
        }
    }

    fn marketing_catalog() -> Arc<InMemoryToolCatalog> {
        let tools = vec![
            marketing_tool("Echo", 3.5),
            marketing_tool("Alpha", 4.9),
            marketing_tool("Delta", 3.9),
            marketing_tool("Bravo", 4.7),
            marketing_tool("Charlie", 4.2),
        ];
        let categories = vec![Category {
            id: Uuid::new_v4(),
            name: "Marketing".to_string(),
            slug: "marketing".to_string(),
            description: None,
            sort_order: 1,
            is_active: true,
        }];
        Arc::new(InMemoryToolCatalog::new(tools, categories))
    }

    fn orchestrator(
        catalog: Arc<dyn ToolCatalogConnector>,
        llm: Arc<dyn LanguageModelConnector>,
    ) -> RecommendationOrchestrator {
        RecommendationOrchestrator::new(catalog, llm, AssistantSettings::default())
    }

    fn ask(question: &str) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            ..Default::default()
        }
    }

    const MARKETING_QUESTION: &str = "Quel est le meilleur outil IA pour le marketing digital ?";

    #[tokio::test]
    async fn marketing_question_yields_primary_and_three_alternatives() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::unavailable()));
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;

        let primary = result.primary.expect("primary tool");
        assert_eq!(primary.name, "Alpha");
        assert_eq!(primary.overall_rating, 4.9);
        let ratings: Vec<f64> = result.alternatives.iter().map(|t| t.overall_rating).collect();
        assert_eq!(ratings, vec![4.7, 4.2, 3.9]);
        assert_eq!(
            result.answer.lines().filter(|l| l.starts_with("| **")).count(),
            4
        );
        assert!(result.sources.internal);
        assert_eq!(result.sources.apis, vec!["tools", "categories"]);
        assert!(result.sources.external.is_empty());
        assert!(result.reasoning.contains("votre besoin en marketing"));
        assert!(result.follow_up_questions.len() <= 3);
    }

    #[tokio::test]
    async fn catalog_only_answers_are_deterministic() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::unavailable()));
        let first = assistant.ask(&ask(MARKETING_QUESTION)).await;
        let second = assistant.ask(&ask(MARKETING_QUESTION)).await;

        assert_eq!(first.answer, second.answer);
        assert_eq!(first.primary, second.primary);
        assert_eq!(first.alternatives, second.alternatives);
        assert_eq!(first.follow_up_questions, second.follow_up_questions);
    }

    #[tokio::test]
    async fn enrichment_replaces_reasoning_and_cites_provider() {
        let llm = Arc::new(MockLanguageModel::replying("Alpha est idéal pour votre équipe."));
        let assistant = orchestrator(marketing_catalog(), llm.clone());
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;

        assert_eq!(result.reasoning, "Alpha est idéal pour votre équipe.");
        assert!(result.answer.contains("Alpha est idéal pour votre équipe."));
        assert_eq!(result.sources.external, vec!["mock"]);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_enrichment_keeps_deterministic_reasoning() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::failing()));
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;

        assert_eq!(result.primary.map(|p| p.name), Some("Alpha".to_string()));
        assert!(result.reasoning.starts_with("Alpha est l'outil le plus adapté"));
        assert!(result.sources.external.is_empty());
    }

    #[tokio::test]
    async fn general_question_goes_to_language_model() {
        let llm = Arc::new(MockLanguageModel::replying("Bonjour ! Je vous aide à choisir."));
        let assistant = orchestrator(marketing_catalog(), llm.clone());
        let result = assistant.ask(&ask("bonjour")).await;

        assert!(result.primary.is_none());
        assert_eq!(result.answer, "Bonjour ! Je vous aide à choisir.");
        assert!(!result.sources.internal);
        assert_eq!(result.sources.external, vec!["mock"]);
        assert_eq!(llm.prompts(), vec!["bonjour".to_string()]);
    }

    #[tokio::test]
    async fn failing_general_answer_degrades_to_no_results() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::failing()));
        let result = assistant.ask(&ask("bonjour")).await;

        assert!(result.primary.is_none());
        assert_eq!(result.answer, responses::NO_RESULTS_MESSAGE);
        assert_eq!(result.follow_up_questions.len(), 3);
    }

    #[tokio::test]
    async fn unmatched_question_without_llm_is_no_results() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::unavailable()));
        let result = assistant
            .ask(&ask("je cherche un logiciel de comptabilité pour mon cabinet"))
            .await;

        assert!(result.primary.is_none());
        assert!(result.alternatives.is_empty());
        assert!(result.sources.internal);
        assert!(result.sources.external.is_empty());
    }

    #[tokio::test]
    async fn unmatched_question_asks_llm_with_catalog_context() {
        let llm = Arc::new(MockLanguageModel::replying("Essayez plutôt Alpha."));
        let assistant = orchestrator(marketing_catalog(), llm.clone());
        let result = assistant
            .ask(&ask("je cherche un logiciel de comptabilité pour mon cabinet"))
            .await;

        assert!(result.primary.is_none());
        assert_eq!(result.answer, "Essayez plutôt Alpha.");
        assert_eq!(result.sources.apis, vec!["tools"]);
        assert_eq!(result.sources.external, vec!["mock"]);
        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("- Alpha"));
        assert!(prompt.find("- Alpha") < prompt.find("- Echo"));
    }

    #[tokio::test]
    async fn failing_catalog_advice_degrades_to_no_results() {
        let llm = Arc::new(MockLanguageModel::failing());
        let assistant = orchestrator(marketing_catalog(), llm.clone());
        let result = assistant
            .ask(&ask("je cherche un logiciel de comptabilité pour mon cabinet"))
            .await;

        assert_eq!(llm.call_count(), 1);
        assert!(result.primary.is_none());
        assert_eq!(result.answer, responses::NO_RESULTS_MESSAGE);
        assert_eq!(result.action_suggestion, responses::NO_RESULTS_ACTION);
        assert!(result.sources.external.is_empty());
    }

    struct BrokenCatalog;

    #[async_trait]
    impl ToolCatalogConnector for BrokenCatalog {
        async fn query(&self, _query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError> {
            Err(ConnectorError::ServiceUnavailable("catalog offline".to_string()))
        }

        async fn list_categories(
            &self,
            _order: CategoryOrder,
        ) -> Result<Vec<Category>, ConnectorError> {
            Ok(vec![])
        }
    }

    /// Tools are served but the category list cannot be read.
    struct CategoriesOffline(Arc<InMemoryToolCatalog>);

    #[async_trait]
    impl ToolCatalogConnector for CategoriesOffline {
        async fn query(&self, query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError> {
            self.0.query(query).await
        }

        async fn list_categories(
            &self,
            _order: CategoryOrder,
        ) -> Result<Vec<Category>, ConnectorError> {
            Err(ConnectorError::Database("relation \"category\" does not exist".to_string()))
        }
    }

    struct PanickingCatalog;

    #[async_trait]
    impl ToolCatalogConnector for PanickingCatalog {
        async fn query(&self, _query: &ToolQuery) -> Result<Vec<Tool>, ConnectorError> {
            panic!("index out of range")
        }

        async fn list_categories(
            &self,
            _order: CategoryOrder,
        ) -> Result<Vec<Category>, ConnectorError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn retrieval_failure_yields_error_response() {
        let assistant = orchestrator(Arc::new(BrokenCatalog), Arc::new(MockLanguageModel::failing()));
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;

        assert_eq!(result.answer, responses::ERROR_MESSAGE);
        assert!(result.primary.is_none());
        assert_eq!(result.sources, Sources::default());
        assert!(!result.answer.contains("catalog offline"));
    }

    #[tokio::test]
    async fn category_list_failure_yields_error_response() {
        let assistant = orchestrator(
            Arc::new(CategoriesOffline(marketing_catalog())),
            Arc::new(MockLanguageModel::unavailable()),
        );
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;

        assert_eq!(result.answer, responses::ERROR_MESSAGE);
        assert!(result.primary.is_none());
        assert!(result.alternatives.is_empty());
        assert!(!result.answer.contains("does not exist"));
    }

    #[tokio::test]
    async fn panic_in_pipeline_yields_error_response() {
        let assistant = orchestrator(
            Arc::new(PanickingCatalog),
            Arc::new(MockLanguageModel::unavailable()),
        );
        let result = assistant.ask(&ask(MARKETING_QUESTION)).await;
        assert_eq!(result.answer, responses::ERROR_MESSAGE);
    }

    #[test]
    fn history_is_limited_to_recent_turns() {
        let assistant = orchestrator(marketing_catalog(), Arc::new(MockLanguageModel::unavailable()));
        let context: Vec<ChatMessage> = (0..15)
            .map(|i| ChatMessage::user(format!("tour {}", i)))
            .collect();
        let recent = assistant.recent_history(&context);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].content, "tour 5");
    }
}
