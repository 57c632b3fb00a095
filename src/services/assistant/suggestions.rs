use serde_derive::Serialize;

/// Example question offered to users who do not know where to start.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub category: &'static str,
    pub question: &'static str,
    pub description: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 6] = [
    Suggestion {
        category: "marketing",
        question: "Quel est le meilleur outil IA pour le marketing digital ?",
        description: "Automatisation, emailing et réseaux sociaux",
    },
    Suggestion {
        category: "sales",
        question: "Quel CRM choisir pour une PME ?",
        description: "Gestion de la relation client et du pipeline commercial",
    },
    Suggestion {
        category: "content",
        question: "Quel outil gratuit pour rédiger des articles de blog ?",
        description: "Rédaction et génération de contenu",
    },
    Suggestion {
        category: "design",
        question: "Quel outil de design facile à utiliser pour mes visuels ?",
        description: "Création graphique assistée par IA",
    },
    Suggestion {
        category: "customer-support",
        question: "Quel chatbot pour automatiser mon support client ?",
        description: "Service client et réponses automatiques",
    },
    Suggestion {
        category: "general",
        question: "Qu'est-ce que l'intelligence artificielle générative ?",
        description: "Questions générales sur l'IA",
    },
];

pub fn list() -> Vec<Suggestion> {
    SUGGESTIONS.to_vec()
}
