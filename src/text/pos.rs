use std::collections::HashMap;

use ahash::RandomState;

/// Part-of-speech tagging capability
///
/// Output must have the same length and order as the input; empty input
/// yields an empty output.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

/// Closed-class words and a few frequent open-class ones, Penn Treebank tags
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("another", "DT"), ("both", "DT"),
    // prepositions, subordinating conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"),
    ("below", "IN"), ("from", "IN"), ("over", "IN"), ("under", "IN"), ("since", "IN"),
    ("until", "IN"), ("while", "IN"), ("because", "IN"), ("if", "IN"), ("than", "IN"),
    ("as", "IN"), ("although", "IN"), ("though", "IN"), ("whether", "IN"), ("upon", "IN"),
    ("within", "IN"), ("without", "IN"), ("across", "IN"), ("along", "IN"), ("among", "IN"),
    ("around", "IN"), ("behind", "IN"), ("beyond", "IN"), ("near", "IN"), ("toward", "IN"),
    ("towards", "IN"), ("like", "IN"),
    ("up", "RP"), ("down", "RP"), ("out", "RP"), ("off", "RP"),
    // coordinating conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    ("to", "TO"),
    // pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("she", "PRP"), ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    // wh-words
    ("which", "WDT"), ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // auxiliaries
    ("be", "VB"), ("is", "VBZ"), ("has", "VBZ"), ("does", "VBZ"), ("are", "VBP"),
    ("am", "VBP"), ("have", "VBP"), ("do", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("had", "VBD"), ("did", "VBD"), ("been", "VBN"), ("being", "VBG"),
    // adverbs
    ("not", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"), ("just", "RB"),
    ("only", "RB"), ("now", "RB"), ("then", "RB"), ("here", "RB"), ("there", "RB"),
    ("always", "RB"), ("never", "RB"), ("often", "RB"), ("again", "RB"), ("soon", "RB"),
    ("still", "RB"), ("already", "RB"), ("quite", "RB"), ("rather", "RB"), ("fast", "RB"),
    ("so", "RB"), ("well", "RB"), ("once", "RB"),
    // adjectives
    ("good", "JJ"), ("new", "JJ"), ("old", "JJ"), ("great", "JJ"), ("big", "JJ"),
    ("small", "JJ"), ("quick", "JJ"), ("lazy", "JJ"), ("brown", "JJ"), ("other", "JJ"),
    ("same", "JJ"), ("own", "JJ"), ("few", "JJ"), ("more", "JJR"), ("most", "JJS"),
    ("amazing", "JJ"),
    // numbers
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
    ("oh", "UH"), ("wow", "UH"), ("yes", "UH"),
];

/// Suffix heuristics for words missing from the lexicon, checked in order
const SUFFIX_TAGS: &[(&str, &str)] = &[
    ("ing", "VBG"),
    ("ed", "VBD"),
    ("ly", "RB"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ment", "NN"),
    ("ness", "NN"),
    ("ity", "NN"),
    ("ance", "NN"),
    ("ence", "NN"),
    ("ship", "NN"),
    ("ism", "NN"),
    ("ist", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ive", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("less", "JJ"),
    ("ical", "JJ"),
    ("ish", "JJ"),
    ("est", "JJS"),
];

/// Lexicon and suffix based tagger emitting Penn Treebank tags
///
/// Unknown words fall back to suffix heuristics, then to noun/verb guesses
/// based on the previous tag.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, &'static str, RandomState>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    fn guess(&self, token: &str, position: usize, prev: Option<&'static str>) -> &'static str {
        let lower = token.to_lowercase();

        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return *tag;
        }
        if token.chars().all(|c| c.is_numeric()) {
            return "CD";
        }

        // base form after "to" or a modal
        if matches!(prev, Some("TO") | Some("MD")) {
            return "VB";
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        let plural = lower.len() > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is");

        if capitalized && position > 0 {
            return if plural { "NNPS" } else { "NNP" };
        }

        let char_count = lower.chars().count();
        for (suffix, tag) in SUFFIX_TAGS {
            if lower.ends_with(suffix) && char_count > suffix.len() + 1 {
                // have/be + -ed is a participle
                if *tag == "VBD" && matches!(prev, Some("VBZ") | Some("VBP") | Some("VBD") | Some("VBN")) {
                    return "VBN";
                }
                return *tag;
            }
        }

        match prev {
            // subject pronoun or plural noun followed by an unknown word
            Some("PRP") | Some("NNS") | Some("NNPS") if !plural => "VBP",
            Some("PRP") | Some("NN") | Some("NNP") if plural => "VBZ",
            _ if plural => "NNS",
            _ => "NN",
        }
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut prev: Option<&'static str> = None;
        for (position, token) in tokens.iter().enumerate() {
            let tag = self.guess(token, position, prev);
            tagged.push((token.clone(), tag.to_string()));
            prev = Some(tag);
        }
        tagged
    }
}
