//! Markdown rendering of a recommendation.

use crate::models::{PricingModel, Tool, ToolSummary};

const STRENGTH_THRESHOLD: f64 = 4.5;
const MAX_STRENGTHS: usize = 4;
const PREVIEW_STRENGTHS: usize = 3;
const EMPTY_CELL: &str = "—";

pub fn format_price(pricing_model: Option<PricingModel>, starting_price: Option<&str>) -> String {
    match pricing_model {
        Some(PricingModel::Free) => "Gratuit".to_string(),
        Some(PricingModel::Freemium) => "Freemium (version gratuite disponible)".to_string(),
        Some(PricingModel::Paid) => match starting_price.map(str::trim).filter(|p| !p.is_empty()) {
            Some(price) => format!("À partir de {}", price),
            None => "Payant".to_string(),
        },
        Some(PricingModel::Enterprise) => "Sur devis".to_string(),
        Some(PricingModel::ApiBased) => "Facturation à l'usage (API)".to_string(),
        None => "Prix non spécifié".to_string(),
    }
}

fn tool_price(tool: &Tool) -> String {
    format_price(tool.pricing_model, tool.starting_price.as_deref())
}

fn format_rating(rating: f64) -> String {
    format!("{:.1}/5", rating)
}

/// Up to four badges, in fixed priority order, each gated by its own threshold.
pub fn strengths(tool: &Tool) -> Vec<String> {
    let high = |score: Option<f64>| score.map_or(false, |s| s >= STRENGTH_THRESHOLD);

    let integrations = tool.integrations.len();
    let candidates = [
        (high(Some(tool.overall_rating)), "Très bien noté".to_string()),
        (high(tool.ease_of_use_score), "Facile à prendre en main".to_string()),
        (high(tool.performance_score), "Hautes performances".to_string()),
        (high(tool.value_for_money_score), "Excellent rapport qualité-prix".to_string()),
        (tool.api_available, "API disponible".to_string()),
        (tool.open_source, "Open source".to_string()),
        (tool.gdpr_compliant, "Conforme RGPD".to_string()),
        (integrations > 0, format!("{} intégrations", integrations)),
    ];

    candidates
        .into_iter()
        .filter(|(met, _)| *met)
        .map(|(_, label)| label)
        .take(MAX_STRENGTHS)
        .collect()
}

pub fn summarize(tool: &Tool) -> ToolSummary {
    ToolSummary {
        id: tool.id,
        name: tool.name.clone(),
        slug: tool.slug.clone(),
        tagline: tool.tagline.clone(),
        pricing_model: tool.pricing_model,
        price: tool_price(tool),
        overall_rating: tool.overall_rating,
        strengths: strengths(tool),
        website_url: tool.website_url.clone(),
    }
}

/// Collapse whitespace, capitalise the first letter and make sure it reads as a question.
/// A question made only of question marks is returned as typed.
pub fn reformulate_question(question: &str) -> String {
    let collapsed = question.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let mut text: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => return String::new(),
    };

    let trimmed_len = text.trim_end_matches(&['?', ' '][..]).len();
    if trimmed_len == 0 {
        return collapsed;
    }
    text.truncate(trimmed_len);
    text.push_str(" ?");
    text
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn table_row(tool: &Tool) -> String {
    let badges = strengths(tool);
    let top = badges.first().map(String::as_str).unwrap_or(EMPTY_CELL);
    let preview = if badges.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        badges
            .iter()
            .take(PREVIEW_STRENGTHS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let link = tool
        .website_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| format!("[Site officiel]({})", url))
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    format!(
        "| **{}** | {} | {} | {} | {} | {} |",
        escape_cell(&tool.name),
        escape_cell(top),
        format_rating(tool.overall_rating),
        escape_cell(&preview),
        escape_cell(&tool_price(tool)),
        link
    )
}

/// Comparison table over `[primary, ...alternatives]`: one data row per tool.
pub fn comparison_table(primary: &Tool, alternatives: &[Tool]) -> String {
    let mut lines = vec![
        "| Outil | Point fort | Note | Atouts | Prix | Lien |".to_string(),
        "| --- | --- | --- | --- | --- | --- |".to_string(),
    ];
    lines.extend(std::iter::once(primary).chain(alternatives).map(table_row));
    lines.join("\n")
}

/// Full markdown answer. The comparison table is present iff there is at least one
/// alternative.
pub fn compose(
    question: &str,
    primary: &Tool,
    alternatives: &[Tool],
    reasoning: &str,
    action_suggestion: &str,
) -> String {
    let mut sections = vec![format!("## {}", reformulate_question(question))];

    let mut primary_block = vec![
        format!("### Notre recommandation : {}", primary.name),
        format!(
            "**Prix :** {} · **Note :** {}",
            tool_price(primary),
            format_rating(primary.overall_rating)
        ),
    ];
    let badges = strengths(primary);
    if !badges.is_empty() {
        primary_block.push(
            badges
                .iter()
                .map(|badge| format!("`{}`", badge))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    sections.push(primary_block.join("\n"));

    sections.push(reasoning.trim().to_string());

    if !alternatives.is_empty() {
        let list = alternatives
            .iter()
            .enumerate()
            .map(|(i, tool)| {
                format!(
                    "{}. **{}** · {} · {}",
                    i + 1,
                    tool.name,
                    tool_price(tool),
                    format_rating(tool.overall_rating)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("### Alternatives à considérer\n{}", list));
        sections.push(format!(
            "### Tableau comparatif\n{}",
            comparison_table(primary, alternatives)
        ));
    }

    sections.push(format!("**Suggestion :** {}", action_suggestion.trim()));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tool(name: &str, rating: f64) -> Tool {
        Tool {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            overall_rating: rating,
            pricing_model: Some(PricingModel::Freemium),
            website_url: Some(format!("https://{}.example", name.to_lowercase())),
            ..Default::default()
        }
    }

    fn data_rows(markdown: &str) -> usize {
        markdown.lines().filter(|line| line.starts_with("| **")).count()
    }

    #[test]
    fn every_pricing_model_has_a_stable_label() {
        for model in PricingModel::ALL {
            let label = format_price(Some(model), None);
            assert!(!label.is_empty());
            assert_eq!(label, format_price(Some(model), None));
        }
        assert_eq!(format_price(None, None), "Prix non spécifié");
        assert_eq!(format_price(Some(PricingModel::Free), None), "Gratuit");
        assert_eq!(format_price(Some(PricingModel::Enterprise), None), "Sur devis");
        assert_eq!(
            format_price(Some(PricingModel::ApiBased), None),
            "Facturation à l'usage (API)"
        );
    }

    #[test]
    fn paid_uses_starting_price_when_present() {
        assert_eq!(
            format_price(Some(PricingModel::Paid), Some("29 €/mois")),
            "À partir de 29 €/mois"
        );
        assert_eq!(format_price(Some(PricingModel::Paid), Some("  ")), "Payant");
        assert_eq!(format_price(Some(PricingModel::Paid), None), "Payant");
    }

    #[test]
    fn strengths_follow_priority_and_cap_at_four() {
        let mut t = tool("Full", 4.8);
        t.ease_of_use_score = Some(4.6);
        t.performance_score = Some(4.0);
        t.value_for_money_score = Some(4.5);
        t.api_available = true;
        t.open_source = true;
        t.integrations = vec!["Slack".to_string()];

        assert_eq!(
            strengths(&t),
            vec![
                "Très bien noté",
                "Facile à prendre en main",
                "Excellent rapport qualité-prix",
                "API disponible"
            ]
        );
    }

    #[test]
    fn integrations_badge_shows_count() {
        let mut t = tool("Hub", 3.0);
        t.integrations = vec!["Slack".to_string(), "Gmail".to_string()];
        assert_eq!(strengths(&t), vec!["2 intégrations"]);
    }

    #[test]
    fn question_is_reformulated_as_heading() {
        assert_eq!(
            reformulate_question("  quel   crm choisir  "),
            "Quel crm choisir ?"
        );
        assert_eq!(reformulate_question("Quel CRM ??"), "Quel CRM ?");
        assert_eq!(reformulate_question(""), "");
    }

    #[test]
    fn punctuation_only_question_is_kept_as_typed() {
        assert_eq!(reformulate_question("?"), "?");
        assert_eq!(reformulate_question("  ? ?  "), "? ?");

        let markdown = compose("?", &tool("Alpha", 4.9), &[], "Parce que.", "Essayez-le.");
        assert!(markdown.starts_with("## ?\n"));
    }

    #[test]
    fn table_has_one_row_per_shown_tool() {
        let primary = tool("Alpha", 4.9);
        let alternatives = vec![tool("Beta", 4.7), tool("Gamma", 4.2), tool("Delta", 3.9)];
        let markdown = compose("quel outil ?", &primary, &alternatives, "Parce que.", "Essayez-le.");

        assert!(markdown.contains("### Tableau comparatif"));
        assert_eq!(data_rows(&markdown), 4);
        assert!(markdown.starts_with("## Quel outil ?"));
        assert!(markdown.trim_end().ends_with("**Suggestion :** Essayez-le."));
    }

    #[test]
    fn no_table_without_alternatives() {
        let markdown = compose("quel outil ?", &tool("Alpha", 4.9), &[], "Parce que.", "Essayez-le.");
        assert!(!markdown.contains("Tableau comparatif"));
        assert!(!markdown.contains("Alternatives"));
        assert_eq!(data_rows(&markdown), 0);
    }

    #[test]
    fn sections_come_in_order() {
        let primary = tool("Alpha", 4.9);
        let alternatives = vec![tool("Beta", 4.7)];
        let markdown = compose("quel outil ?", &primary, &alternatives, "Le raisonnement.", "Fin.");

        let heading = markdown.find("## Quel outil ?").unwrap();
        let recommendation = markdown.find("### Notre recommandation : Alpha").unwrap();
        let reasoning = markdown.find("Le raisonnement.").unwrap();
        let list = markdown.find("1. **Beta**").unwrap();
        let table = markdown.find("| Outil |").unwrap();
        let suggestion = markdown.find("**Suggestion :**").unwrap();
        assert!(heading < recommendation);
        assert!(recommendation < reasoning);
        assert!(reasoning < list);
        assert!(list < table);
        assert!(table < suggestion);
    }

    #[test]
    fn pipes_in_names_do_not_break_the_table() {
        let primary = tool("A|B", 4.9);
        let alternatives = vec![tool("C", 4.0)];
        let table = comparison_table(&primary, &alternatives);
        assert!(table.contains("**A\\|B**"));
    }
}
