use std::collections::{HashMap, HashSet};

use ahash::RandomState;

use super::TokenNormalizer;

/// Irregular plural -> singular
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("people", "person"),
    ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"),
    ("lice", "louse"), ("oxen", "ox"), ("dice", "die"), ("data", "datum"),
    ("criteria", "criterion"), ("phenomena", "phenomenon"), ("indices", "index"),
    ("matrices", "matrix"), ("vertices", "vertex"), ("analyses", "analysis"),
    ("theses", "thesis"), ("crises", "crisis"), ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"), ("bases", "basis"), ("axes", "axis"),
    ("cacti", "cactus"), ("fungi", "fungus"), ("nuclei", "nucleus"),
    ("stimuli", "stimulus"), ("alumni", "alumnus"), ("radii", "radius"),
    ("wolves", "wolf"), ("knives", "knife"), ("leaves", "leaf"), ("lives", "life"),
    ("wives", "wife"), ("halves", "half"), ("selves", "self"), ("shelves", "shelf"),
    ("thieves", "thief"), ("loaves", "loaf"), ("calves", "calf"), ("elves", "elf"),
    ("scarves", "scarf"), ("potatoes", "potato"), ("tomatoes", "tomato"),
    ("heroes", "hero"), ("echoes", "echo"), ("vetoes", "veto"), ("goes", "go"),
    ("quizzes", "quiz"), ("buses", "bus"), ("gases", "gas"),
];

/// Words ending in `s` that are already singular
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "economics", "politics",
    "athletics", "ethics", "always", "perhaps", "hers", "ours", "yours", "theirs",
    "whereas", "besides", "towards", "afterwards", "sometimes", "across",
];

/// Regular plural suffix rules, longest first
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("zzes", "zz"),
    ("xes", "x"),
];

/// Singular endings the bare `s` rule must not touch
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Dictionary-free noun lemmatizer
///
/// Reduces plural nouns to their singular form with an irregular-form table
/// followed by suffix rules. Tokens that match nothing are returned unchanged.
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    irregular: HashMap<&'static str, &'static str, RandomState>,
    invariant: HashSet<&'static str, RandomState>,
}

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_NOUNS.iter().copied().collect(),
            invariant: INVARIANT_NOUNS.iter().copied().collect(),
        }
    }

    fn strip(token: &str, suffix: &str) -> String {
        token[..token.len() - suffix.len()].to_string()
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenNormalizer for RuleLemmatizer {
    fn normalize(&self, token: &str) -> String {
        if let Some(lemma) = self.irregular.get(token) {
            return (*lemma).to_string();
        }
        if token.chars().count() <= 3 || self.invariant.contains(token) {
            return token.to_string();
        }
        // fishermen, chairmen, salesmen
        if token.ends_with("smen") || token.ends_with("rmen") {
            return format!("{}man", Self::strip(token, "men"));
        }
        if !token.ends_with('s') {
            return token.to_string();
        }
        for (suffix, replacement) in SUFFIX_RULES {
            if token.ends_with(suffix) {
                return format!("{}{}", Self::strip(token, suffix), replacement);
            }
        }
        if token.ends_with("ies") {
            // ties -> tie, cities -> city
            let stem = Self::strip(token, "ies");
            return if stem.chars().count() <= 1 {
                format!("{}ie", stem)
            } else {
                format!("{}y", stem)
            };
        }
        if PROTECTED_ENDINGS.iter().any(|end| token.ends_with(end)) {
            return token.to_string();
        }
        Self::strip(token, "s")
    }
}
