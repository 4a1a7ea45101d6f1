use std::collections::HashMap;

use ahash::RandomState;
use indexmap::IndexMap;

/// TermFrequency struct
/// Counts how often each term occurs in one token stream.
///
/// # Examples
/// ```
/// use nlp_text_pipeline::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("fox");
/// term_freq.add_term("dog");
/// term_freq.add_term("fox");
///
/// assert_eq!(term_freq.term_count("fox"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: HashMap<String, u64, RandomState>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: HashMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Occurrence count for a specific term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Unique terms in dictionary order (ascending)
    pub fn sorted_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.term_count.keys().cloned().collect();
        terms.sort_unstable();
        terms
    }

    /// Counts for every entry of `terms`, in that order
    /// Entries never seen map to 0.
    pub fn counts_over<T>(&self, terms: &[T]) -> IndexMap<String, u64>
    where
        T: AsRef<str>,
    {
        terms
            .iter()
            .map(|term| (term.as_ref().to_string(), self.term_count(term.as_ref())))
            .collect()
    }

    /// Probability P(term) = count / total
    /// Returns 0.0 if total is 0
    #[inline]
    pub fn probability(&self, term: &str) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        (self.term_count(term) as f64) / (self.total_term_count as f64)
    }
}
