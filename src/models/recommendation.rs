use crate::models::PricingModel;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

/// A tool as shown in an answer: display price and strength badges already computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub tagline: Option<String>,
    pub pricing_model: Option<PricingModel>,
    pub price: String,
    pub overall_rating: f64,
    pub strengths: Vec<String>,
    pub website_url: Option<String>,
}

/// Which subsystems contributed to an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sources {
    pub internal: bool,
    pub apis: Vec<String>,
    pub external: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Markdown shown to the user.
    pub answer: String,
    pub primary: Option<ToolSummary>,
    pub alternatives: Vec<ToolSummary>,
    pub reasoning: String,
    pub action_suggestion: String,
    pub follow_up_questions: Vec<String>,
    pub sources: Sources,
    pub timestamp: DateTime<Utc>,
}
