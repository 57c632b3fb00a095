use super::keywords::{
    BUSINESS_SIZE_KEYWORDS, CATEGORY_KEYWORDS, EXPLANATION_VERBS, GENERAL_AI_PHRASES,
    GREETING_PHRASES, PRICING_KEYWORDS, PRIORITY_KEYWORDS, TOOL_NOUNS,
};
use crate::models::{Priority, UserIntent};
use regex::Regex;

lazy_static::lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+(?:-[\p{L}\p{N}]+)*").unwrap();
}

const MIN_KEYWORD_CHARS: usize = 3;
const MAX_GENERAL_TOKENS: usize = 2;
/// Plural and feminine endings accepted after a single-word trigger.
const INFLECTIONS: [&str; 4] = ["s", "x", "e", "es"];

/// A normalized question with its word tokens, hyphenated words also split into parts.
struct Question {
    text: String,
    words: Vec<String>,
}

impl Question {
    fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let mut words = vec![];
        for word in WORD.find_iter(&text).map(|m| m.as_str()) {
            words.push(word.to_string());
            if word.contains('-') {
                words.extend(word.split('-').map(str::to_string));
            }
        }
        Self { text, words }
    }

    /// Single-word triggers must match a whole word (optionally inflected), so "free"
    /// does not fire on "freelance". Phrases keep substring matching.
    fn mentions(&self, trigger: &str) -> bool {
        if is_single_word(trigger) {
            self.words.iter().any(|word| is_inflection_of(word, trigger))
        } else {
            self.text.contains(trigger)
        }
    }

    fn mentions_any(&self, triggers: &[&str]) -> bool {
        triggers.iter().any(|trigger| self.mentions(trigger))
    }
}

/// Read a question into a [`UserIntent`]. Pure and total: any input yields an intent.
pub fn analyze(question: &str) -> UserIntent {
    let question = Question::new(question);

    let categories = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| question.mentions_any(keywords))
        .map(|(slug, _)| slug.to_string())
        .collect();

    UserIntent {
        keywords: keywords(&question.text),
        categories,
        pricing_preference: first_match(&question, PRICING_KEYWORDS),
        business_size: first_match(&question, BUSINESS_SIZE_KEYWORDS),
        priority: first_match(&question, PRIORITY_KEYWORDS).unwrap_or(Priority::Features),
        is_general_question: is_general_question(&question),
    }
}

fn normalize(question: &str) -> String {
    question.trim().to_lowercase().replace('\u{2019}', "'")
}

fn keywords(text: &str) -> Vec<String> {
    let mut found: Vec<String> = vec![];
    for word in WORD.find_iter(text).map(|m| m.as_str()) {
        if word.chars().count() >= MIN_KEYWORD_CHARS && !found.iter().any(|k| k == word) {
            found.push(word.to_string());
        }
    }
    found
}

fn is_single_word(trigger: &str) -> bool {
    WORD.find(trigger)
        .map_or(false, |m| m.start() == 0 && m.end() == trigger.len())
}

fn is_inflection_of(word: &str, trigger: &str) -> bool {
    match word.strip_prefix(trigger) {
        Some("") => true,
        Some(ending) => INFLECTIONS.contains(&ending),
        None => false,
    }
}

fn first_match<T: Copy>(question: &Question, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, triggers)| question.mentions_any(triggers))
        .map(|(value, _)| *value)
}

fn is_general_question(question: &Question) -> bool {
    question.mentions_any(GENERAL_AI_PHRASES)
        || question.mentions_any(GREETING_PHRASES)
        || question.text.split_whitespace().count() <= MAX_GENERAL_TOKENS
        || (!question.mentions_any(TOOL_NOUNS) && question.mentions_any(EXPLANATION_VERBS))
}
