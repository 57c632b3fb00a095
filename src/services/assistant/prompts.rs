use crate::models::{Tool, UserIntent};
use crate::services::assistant::composer::format_price;

pub const GENERAL_SYSTEM_PROMPT: &str = "Tu es l'assistant d'un annuaire d'outils d'intelligence artificielle. \
Réponds en français, de façon claire et concise, en markdown. \
Si la question porte sur le choix d'un outil, invite l'utilisateur à préciser son besoin.";

pub const CATALOG_SYSTEM_PROMPT: &str = "Tu es l'assistant d'un annuaire d'outils d'intelligence artificielle. \
Réponds en français, en markdown. Appuie-toi uniquement sur les outils listés dans le contexte \
et n'invente ni outil ni tarif.";

pub const ENRICHMENT_SYSTEM_PROMPT: &str = "Tu rédiges la justification d'une recommandation d'outil. \
Réponds en français, en un seul paragraphe de trois à cinq phrases, sans titre ni liste. \
Ne cite aucun outil absent du contexte.";

fn tool_line(tool: &Tool) -> String {
    let mut line = format!(
        "- {} ({}, {:.1}/5)",
        tool.name,
        format_price(tool.pricing_model, tool.starting_price.as_deref()),
        tool.overall_rating
    );
    if let Some(pitch) = tool.tagline.as_deref().or(tool.description.as_deref()) {
        line.push_str(" : ");
        line.push_str(pitch.trim());
    }
    line
}

/// Advice request grounded in the best-rated part of the catalog.
pub fn catalog_advice(question: &str, intent: &UserIntent, context: &[Tool]) -> String {
    let mut prompt = format!("Question de l'utilisateur : {}\n\n", question.trim());
    if !intent.categories.is_empty() {
        prompt.push_str(&format!(
            "Domaines détectés : {}\n\n",
            intent.categories.join(", ")
        ));
    }
    prompt.push_str(
        "Aucun outil du catalogue ne correspond exactement. Voici les outils les mieux notés :\n",
    );
    for tool in context {
        prompt.push_str(&tool_line(tool));
        prompt.push('\n');
    }
    prompt.push_str(
        "\nConseille l'utilisateur à partir de ces outils, ou explique comment affiner sa recherche.",
    );
    prompt
}

/// Rewrite request for the deterministic reasoning paragraph.
pub fn enrichment(question: &str, primary: &Tool, alternatives: &[Tool], reasoning: &str) -> String {
    let mut prompt = format!(
        "Question de l'utilisateur : {}\n\nOutil recommandé :\n{}\n",
        question.trim(),
        tool_line(primary)
    );
    if !alternatives.is_empty() {
        prompt.push_str("\nAlternatives :\n");
        for tool in alternatives {
            prompt.push_str(&tool_line(tool));
            prompt.push('\n');
        }
    }
    prompt.push_str(&format!(
        "\nJustification actuelle : {}\n\nReformule et enrichis cette justification.",
        reasoning
    ));
    prompt
}
