//! Canned and LLM-only results. None of these can fail.

use crate::models::{RecommendationResult, Sources};
use chrono::Utc;

pub const NO_RESULTS_MESSAGE: &str = "Je n'ai trouvé aucun outil correspondant à votre recherche dans notre catalogue. \
Essayez de reformuler votre question ou d'élargir vos critères (catégorie, budget, fonctionnalités).";

pub const NO_RESULTS_ACTION: &str =
    "Parcourez les catégories du catalogue ou précisez votre besoin principal.";

pub const NO_RESULTS_FOLLOW_UPS: [&str; 3] = [
    "Quel est le principal problème que vous souhaitez résoudre ?",
    "Dans quel domaine cherchez-vous un outil (marketing, ventes, design...) ?",
    "Avez-vous un budget ou un modèle de prix préféré ?",
];

pub const ERROR_MESSAGE: &str = "Désolé, une erreur s'est produite lors du traitement de votre question. \
Veuillez réessayer dans quelques instants.";

pub const ERROR_ACTION: &str = "Réessayez dans quelques instants.";

pub const ERROR_FOLLOW_UPS: [&str; 3] = [
    "Quels outils recommandez-vous pour le marketing ?",
    "Quel CRM choisir pour une petite entreprise ?",
    "Quels sont les meilleurs outils gratuits de design ?",
];

pub const GENERAL_ACTION: &str =
    "Décrivez un besoin précis pour que je vous recommande les outils les plus adaptés du catalogue.";

pub const GENERAL_FOLLOW_UPS: [&str; 3] = [
    "Quel outil IA me conseillez-vous pour mon activité ?",
    "Quels sont les outils les mieux notés du moment ?",
    "Existe-t-il des outils gratuits pour débuter ?",
];

fn owned(questions: [&str; 3]) -> Vec<String> {
    questions.iter().map(|q| q.to_string()).collect()
}

/// Fixed answer when nothing in the catalog matches and no LLM advice is available.
pub fn no_results() -> RecommendationResult {
    RecommendationResult {
        answer: NO_RESULTS_MESSAGE.to_string(),
        primary: None,
        alternatives: vec![],
        reasoning: NO_RESULTS_MESSAGE.to_string(),
        action_suggestion: NO_RESULTS_ACTION.to_string(),
        follow_up_questions: owned(NO_RESULTS_FOLLOW_UPS),
        sources: Sources {
            internal: true,
            apis: vec![],
            external: vec![],
        },
        timestamp: Utc::now(),
    }
}

/// Terminal answer for any failure that escaped the degraded paths.
pub fn error() -> RecommendationResult {
    RecommendationResult {
        answer: ERROR_MESSAGE.to_string(),
        primary: None,
        alternatives: vec![],
        reasoning: String::new(),
        action_suggestion: ERROR_ACTION.to_string(),
        follow_up_questions: owned(ERROR_FOLLOW_UPS),
        sources: Sources::default(),
        timestamp: Utc::now(),
    }
}

/// General-knowledge answer produced by the language model alone.
pub fn general_answer(text: String, provider: &str) -> RecommendationResult {
    RecommendationResult {
        answer: text.clone(),
        primary: None,
        alternatives: vec![],
        reasoning: text,
        action_suggestion: GENERAL_ACTION.to_string(),
        follow_up_questions: owned(GENERAL_FOLLOW_UPS),
        sources: Sources {
            internal: false,
            apis: vec![],
            external: vec![provider.to_string()],
        },
        timestamp: Utc::now(),
    }
}

/// Advice grounded in the top of the catalog when no candidate matched.
pub fn catalog_advice(text: String, provider: &str) -> RecommendationResult {
    RecommendationResult {
        answer: text.clone(),
        primary: None,
        alternatives: vec![],
        reasoning: text,
        action_suggestion: NO_RESULTS_ACTION.to_string(),
        follow_up_questions: owned(NO_RESULTS_FOLLOW_UPS),
        sources: Sources {
            internal: true,
            apis: vec!["tools".to_string()],
            external: vec![provider.to_string()],
        },
        timestamp: Utc::now(),
    }
}
