use crate::models::{BusinessSize, Category, PricingModel, Priority, Tool, UserIntent};

const MAX_LISTED_INTEGRATIONS: usize = 3;
const MAX_FOLLOW_UPS: usize = 3;

fn category_label(slug: &str, categories: &[Category]) -> String {
    categories
        .iter()
        .find(|category| category.slug == slug)
        .map(|category| category.name.to_lowercase())
        .unwrap_or_else(|| slug.replace('-', " "))
}

fn priority_sentence(priority: Priority, primary: &Tool) -> Option<String> {
    match priority {
        Priority::Price => Some(match primary.value_for_money_score {
            Some(score) => format!(
                "Il offre le meilleur rapport qualité-prix de notre sélection ({:.1}/5).",
                score
            ),
            None => "Il offre le meilleur rapport qualité-prix de notre sélection.".to_string(),
        }),
        Priority::EaseOfUse => Some(match primary.ease_of_use_score {
            Some(score) => format!(
                "C'est l'option la plus simple à prendre en main (facilité d'utilisation : {:.1}/5).",
                score
            ),
            None => "C'est l'option la plus simple à prendre en main.".to_string(),
        }),
        Priority::Performance => Some(match primary.performance_score {
            Some(score) => format!("Il se distingue par ses performances ({:.1}/5).", score),
            None => "Il se distingue par ses performances.".to_string(),
        }),
        Priority::Integration if !primary.integrations.is_empty() => Some(format!(
            "Il s'intègre notamment avec {}.",
            primary
                .integrations
                .iter()
                .take(MAX_LISTED_INTEGRATIONS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        )),
        Priority::Integration if primary.api_available => {
            Some("Son API permet de le connecter à vos outils existants.".to_string())
        }
        Priority::Integration | Priority::Features => Some(format!(
            "Il obtient la meilleure note globale de notre sélection ({:.1}/5).",
            primary.overall_rating
        )),
    }
}

/// Deterministic explanation of why `primary` was picked.
pub fn build(
    intent: &UserIntent,
    primary: &Tool,
    alternatives: &[Tool],
    categories: &[Category],
) -> String {
    let mut sentences = vec![];

    let focus = intent
        .categories
        .iter()
        .map(|slug| category_label(slug, categories))
        .collect::<Vec<_>>();
    if focus.is_empty() {
        sentences.push(format!(
            "{} est l'outil le plus adapté à votre demande.",
            primary.name
        ));
    } else {
        sentences.push(format!(
            "{} est l'outil le plus adapté à votre besoin en {}.",
            primary.name,
            focus.join(" et ")
        ));
    }

    sentences.extend(priority_sentence(intent.priority, primary));

    if let Some(pitch) = primary
        .tagline
        .as_deref()
        .or(primary.description.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        sentences.push(pitch.to_string());
    }

    match intent.business_size {
        Some(BusinessSize::Startup) => {
            sentences.push("Il convient aux startups qui veulent démarrer rapidement.".to_string())
        }
        Some(BusinessSize::Sme) => {
            sentences.push("C'est une solution adaptée aux besoins des PME.".to_string())
        }
        Some(BusinessSize::Enterprise) => sentences.push(
            "Il sait répondre aux exigences d'une grande entreprise.".to_string(),
        ),
        None => {}
    }

    match alternatives.len() {
        0 => {}
        1 => sentences.push("Nous avons aussi retenu une alternative pour comparer.".to_string()),
        n => sentences.push(format!(
            "Nous avons aussi retenu {} alternatives pour comparer.",
            n
        )),
    }

    sentences.join(" ")
}

pub fn action_suggestion(primary: &Tool) -> String {
    let name = &primary.name;
    let mut suggestion = match primary.pricing_model {
        Some(PricingModel::Free) | Some(PricingModel::Freemium) => format!(
            "Créez un compte gratuit sur {} et testez-le sur un cas concret.",
            name
        ),
        Some(PricingModel::Paid) => format!(
            "Demandez un essai de {} avant de vous engager et comparez-le aux alternatives.",
            name
        ),
        Some(PricingModel::Enterprise) => format!(
            "Contactez l'équipe commerciale de {} pour obtenir un devis adapté.",
            name
        ),
        Some(PricingModel::ApiBased) => format!(
            "Estimez votre volume d'utilisation puis testez l'API de {} sur un prototype.",
            name
        ),
        None => format!("Consultez la fiche de {} pour vérifier ses conditions.", name),
    };

    if let Some(url) = primary.website_url.as_deref().filter(|url| !url.is_empty()) {
        suggestion.push_str(&format!(" Site officiel : {}", url));
    }
    suggestion
}

/// Questions that would fill in whatever the intent left open.
pub fn follow_up_questions(intent: &UserIntent, primary: &Tool, alternatives: &[Tool]) -> Vec<String> {
    let mut questions = vec![];

    if let Some(first) = alternatives.first() {
        questions.push(format!(
            "Voulez-vous une comparaison détaillée entre {} et {} ?",
            primary.name, first.name
        ));
    }
    if intent.pricing_preference.is_none() {
        questions.push("Quel budget prévoyez-vous pour cet outil ?".to_string());
    }
    if intent.business_size.is_none() {
        questions.push("Quelle est la taille de votre équipe ou de votre entreprise ?".to_string());
    }
    if intent.priority != Priority::Integration {
        questions.push("Avec quels outils existants doit-il s'intégrer ?".to_string());
    }
    questions.push("Souhaitez-vous uniquement des outils conformes au RGPD ?".to_string());

    questions.truncate(MAX_FOLLOW_UPS);
    questions
}
