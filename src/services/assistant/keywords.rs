//! Static keyword tables behind intent analysis.
//!
//! Triggers are matched against the normalized (lowercased, trimmed, straight
//! apostrophe) question: single words against whole words, plural or feminine endings
//! allowed, and multi-word phrases as substrings. Order inside each table is significant
//! wherever the first match wins.

use crate::models::{BusinessSize, PricingModel, Priority};

/// Category slug -> trigger phrases. Every matching category is kept, in table order.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "marketing",
        &[
            "marketing",
            "seo",
            "publicité",
            "campagne",
            "réseaux sociaux",
            "social media",
            "emailing",
            "newsletter",
            "growth",
        ],
    ),
    (
        "sales",
        &[
            "crm",
            "vente",
            "commercial",
            "prospection",
            "lead",
            "pipeline",
            "sales",
        ],
    ),
    (
        "customer-support",
        &[
            "support client",
            "service client",
            "chatbot",
            "ticket",
            "helpdesk",
            "customer support",
        ],
    ),
    (
        "content",
        &[
            "rédaction",
            "contenu",
            "copywriting",
            "article",
            "blog",
            "écriture",
            "writing",
        ],
    ),
    (
        "design",
        &["design", "graphisme", "logo", "illustration", "maquette", "image", "photo"],
    ),
    (
        "video",
        &["vidéo", "video", "montage", "sous-titre", "podcast", "audio", "voix"],
    ),
    (
        "development",
        &[
            "développement",
            "developpement",
            "développeur",
            "programmation",
            "code",
            "devops",
            "coding",
        ],
    ),
    (
        "productivity",
        &[
            "productivité",
            "productivite",
            "organisation",
            "réunion",
            "prise de notes",
            "agenda",
            "gestion de projet",
            "automatisation",
        ],
    ),
    (
        "data-analytics",
        &[
            "données",
            "donnees",
            "analyse",
            "analytics",
            "tableau de bord",
            "dashboard",
            "reporting",
            "data",
        ],
    ),
    (
        "hr",
        &[
            "ressources humaines",
            "recrutement",
            "recruiting",
            "candidat",
            "onboarding",
            "paie",
        ],
    ),
    (
        "finance",
        &[
            "comptabilité",
            "comptabilite",
            "facturation",
            "finance",
            "trésorerie",
            "dépenses",
        ],
    ),
];

/// First match wins: "freemium" must be tested before "free".
pub const PRICING_KEYWORDS: &[(PricingModel, &[&str])] = &[
    (
        PricingModel::Freemium,
        &["freemium", "version gratuite", "essai gratuit", "free trial"],
    ),
    (
        PricingModel::Free,
        &["gratuit", "gratuite", "free", "sans frais", "sans payer"],
    ),
    (
        PricingModel::ApiBased,
        &[
            "à l'usage",
            "a l'usage",
            "pay as you go",
            "par requête",
            "par appel",
            "usage-based",
        ],
    ),
    (
        PricingModel::Enterprise,
        &["sur devis", "licence entreprise", "enterprise plan"],
    ),
    (
        PricingModel::Paid,
        &["payant", "abonnement", "premium", "paid", "licence"],
    ),
];

pub const BUSINESS_SIZE_KEYWORDS: &[(BusinessSize, &[&str])] = &[
    (
        BusinessSize::Startup,
        &[
            "startup",
            "start-up",
            "freelance",
            "indépendant",
            "independant",
            "solopreneur",
            "petite équipe",
        ],
    ),
    (
        BusinessSize::Sme,
        &[
            "pme",
            "tpe",
            "petite entreprise",
            "moyenne entreprise",
            "small business",
        ],
    ),
    (
        BusinessSize::Enterprise,
        &[
            "grande entreprise",
            "grand groupe",
            "grand compte",
            "multinationale",
            "enterprise",
            "corporate",
        ],
    ),
];

/// Evaluated in this order; `features` is the fallback.
pub const PRIORITY_KEYWORDS: &[(Priority, &[&str])] = &[
    (
        Priority::Price,
        &[
            "prix",
            "tarif",
            "coût",
            "pas cher",
            "moins cher",
            "budget",
            "économique",
            "economique",
            "rapport qualité",
            "abordable",
            "cheap",
            "price",
        ],
    ),
    (
        Priority::EaseOfUse,
        &[
            "facile",
            "simple",
            "intuitif",
            "intuitive",
            "prise en main",
            "débutant",
            "debutant",
            "sans code",
            "no-code",
            "nocode",
            "easy",
        ],
    ),
    (
        Priority::Performance,
        &[
            "performant",
            "performance",
            "rapide",
            "puissant",
            "fiable",
            "précis",
            "scalable",
            "fast",
        ],
    ),
    (
        Priority::Integration,
        &[
            "intégration",
            "integration",
            "intégrer",
            "integrer",
            "connecter",
            "connecteur",
            "compatible",
            "synchroniser",
            "zapier",
        ],
    ),
];

/// Questions about AI as a topic rather than about a tool.
pub const GENERAL_AI_PHRASES: &[&str] = &[
    "qu'est-ce que l'ia",
    "qu'est ce que l'ia",
    "qu'est-ce que l'intelligence artificielle",
    "c'est quoi l'ia",
    "c'est quoi l'intelligence artificielle",
    "définition de l'ia",
    "definition de l'ia",
    "comment fonctionne l'ia",
    "comment marche l'ia",
    "histoire de l'ia",
    "éthique",
    "ethique",
    "biais de l'ia",
    "dangers de l'ia",
    "risques de l'ia",
    "avenir de l'ia",
    "futur de l'ia",
    "impact de l'ia",
    "tendances",
    "différence entre l'ia",
    "what is ai",
    "what is artificial intelligence",
    "how does ai work",
    "ai ethics",
    "future of ai",
    "ai trends",
];

pub const GREETING_PHRASES: &[&str] = &[
    "bonjour",
    "bonsoir",
    "salut",
    "coucou",
    "hello",
    "qui es-tu",
    "qui es tu",
    "tu es qui",
    "qui êtes-vous",
    "qui etes-vous",
    "que sais-tu faire",
    "que peux-tu faire",
    "comment ça va",
    "comment ca va",
    "merci",
    "aide-moi",
    "aidez-moi",
    "help me",
    "who are you",
    "what can you do",
    "good morning",
];

pub const TOOL_NOUNS: &[&str] = &[
    "outil",
    "solution",
    "plateforme",
    "logiciel",
    "application",
    "app",
    "service",
    "saas",
    "tool",
    "software",
    "platform",
];

pub const EXPLANATION_VERBS: &[&str] = &[
    "comment",
    "pourquoi",
    "qu'est-ce",
    "qu'est ce",
    "c'est quoi",
    "explique",
    "expliquer",
    "définir",
    "définition",
    "signifie",
    "how",
    "why",
    "what is",
    "explain",
    "define",
];
