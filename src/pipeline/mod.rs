pub mod options;
pub mod request;
pub mod results;

use std::{fmt, marker::PhantomData, sync::LazyLock};

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::{
    config::PipelineConfig,
    error::Result,
    text::{
        cleaner::{clean_text, lowercase},
        normalize::{RuleLemmatizer, SnowballStemmer, TokenNormalizer},
        pos::{LexiconTagger, PosTagger},
        stopwords::StopwordSet,
        tokenizer::tokenize,
    },
    vectorizer::{
        tfidf::{SentenceTFIDFEngine, TFIDFEngine},
        vocabulary::{bag_of_words, extract_vocabulary, term_frequency},
    },
};

pub use options::{Options, StagePlan};
pub use request::ProcessRequest;
pub use results::{ResultKey, Results};

static GLOBAL_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::new);

/// Text preprocessing pipeline
///
/// Holds the read-only linguistic collaborators shared by every request:
/// stemmer, lemmatizer, POS tagger and the default stopword set. None of them
/// is mutated after construction, so one instance can serve any number of
/// threads.
///
/// `Pipeline<E>` is generic over the TF-IDF engine `E`
/// (`SentenceTFIDFEngine` by default).
pub struct Pipeline<E = SentenceTFIDFEngine>
where
    E: TFIDFEngine,
{
    stemmer: Box<dyn TokenNormalizer>,
    lemmatizer: Box<dyn TokenNormalizer>,
    tagger: Box<dyn PosTagger>,
    default_stopwords: StopwordSet,
    _marker: PhantomData<E>,
}

impl Pipeline {
    /// Pipeline with the built-in collaborators
    pub fn new() -> Self {
        Self::from_parts(
            Box::new(SnowballStemmer::default()),
            Box::new(RuleLemmatizer::new()),
            Box::new(LexiconTagger::new()),
            StopwordSet::english(),
        )
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        let stopwords = if config.replace_default_stopwords {
            StopwordSet::from_words(&config.extra_stopwords)
        } else {
            StopwordSet::english().extended(&config.extra_stopwords)
        };
        debug!(
            stemmer = ?config.stemmer_language,
            stopwords = stopwords.len(),
            "building pipeline from config"
        );
        Self::from_parts(
            Box::new(SnowballStemmer::new(config.stemmer_language)),
            Box::new(RuleLemmatizer::new()),
            Box::new(LexiconTagger::new()),
            stopwords,
        )
    }

    /// Process-wide instance, built on first use
    pub fn global() -> &'static Pipeline {
        &GLOBAL_PIPELINE
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Pipeline<E>
where
    E: TFIDFEngine,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("default_stopwords", &self.default_stopwords.len())
            .finish_non_exhaustive()
    }
}

/// Construction with custom collaborators
impl<E> Pipeline<E>
where
    E: TFIDFEngine,
{
    pub fn from_parts(
        stemmer: Box<dyn TokenNormalizer>,
        lemmatizer: Box<dyn TokenNormalizer>,
        tagger: Box<dyn PosTagger>,
        default_stopwords: StopwordSet,
    ) -> Self {
        Self {
            stemmer,
            lemmatizer,
            tagger,
            default_stopwords,
            _marker: PhantomData,
        }
    }

    pub fn with_stemmer(mut self, stemmer: Box<dyn TokenNormalizer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Box<dyn TokenNormalizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }
}

/// Processing
impl<E> Pipeline<E>
where
    E: TFIDFEngine,
{
    /// Run the stages `options` require over `text`
    ///
    /// Empty or whitespace-only text returns only `original_text`. Otherwise
    /// each stage runs when its trigger is set and its input exists, and only
    /// stages that ran appear in the result. Never fails; rejecting empty
    /// requests is `ProcessRequest::validate`'s job.
    #[instrument(level = "debug", skip_all, fields(text_len = text.len()))]
    pub fn process(&self, text: &str, options: &Options, custom_stopwords: Option<&[String]>) -> Results {
        let mut results = Results::new(text);
        if text.trim().is_empty() {
            debug!("empty text, no stage runs");
            return results;
        }

        let plan = StagePlan::resolve(options);
        trace!(?plan, "stage plan resolved");

        let cleaned = if plan.clean {
            let cleaned = clean_text(text);
            debug!(len = cleaned.len(), "cleaned text");
            results.cleaned_text = Some(cleaned.clone());
            cleaned
        } else {
            text.to_string()
        };

        let lowered = if plan.lowercase {
            let lowered = lowercase(&cleaned);
            results.lowercased_text = Some(lowered.clone());
            lowered
        } else {
            cleaned
        };

        let tokens = plan.tokenize.then(|| tokenize(&lowered));
        if let Some(tokens) = &tokens {
            debug!(count = tokens.len(), "tokenized");
            results.tokens = Some(tokens.clone());
        }

        let filtered = match &tokens {
            Some(tokens) if plan.remove_stopwords => {
                let filtered = self.default_stopwords.filter(tokens, custom_stopwords);
                debug!(kept = filtered.len(), dropped = tokens.len() - filtered.len(), "stopwords removed");
                results.filtered_tokens = Some(filtered.clone());
                filtered
            }
            Some(tokens) => tokens.clone(),
            None => Vec::new(),
        };

        // lemmatization and stemming are exclusive by plan
        let processing = if plan.lemmatize {
            let lemmas = self.lemmatizer.normalize_all(&filtered);
            debug!(count = lemmas.len(), "lemmatized");
            results.lemmatized_tokens = Some(lemmas.clone());
            lemmas
        } else if plan.stem {
            let stems = self.stemmer.normalize_all(&filtered);
            debug!(count = stems.len(), "stemmed");
            results.stemmed_tokens = Some(stems.clone());
            stems
        } else {
            filtered
        };

        let vocabulary = (plan.vocabulary && !processing.is_empty()).then(|| extract_vocabulary(&processing));

        if let Some(vocabulary) = &vocabulary {
            debug!(size = vocabulary.len(), "vocabulary extracted");

            if plan.bag_of_words {
                let bow = bag_of_words(&processing, vocabulary);
                if plan.term_frequency {
                    results.term_frequency = Some(term_frequency(&bow));
                }
                results.bag_of_words = Some(bow);
            }

            if plan.tfidf {
                results.tfidf = Some(E::tfidf(&lowered, &processing, vocabulary));
                debug!("tf-idf computed");
            }
        }
        results.vocabulary = vocabulary;

        if plan.pos_tags {
            if let Some(tokens) = &tokens {
                results.pos_tags = Some(self.tagger.tag(tokens));
                debug!(count = tokens.len(), "pos tagged");
            }
        }

        debug!(keys = results.keys().len(), "processing finished");
        results
    }

    /// Validate a request, then process it
    pub fn handle(&self, request: &ProcessRequest) -> Result<Results> {
        request.validate()?;
        Ok(self.process(
            &request.text,
            &request.options,
            request.custom_stopwords.as_deref(),
        ))
    }

    /// Handle independent requests in parallel
    /// Output order matches `requests`.
    pub fn process_batch(&self, requests: &[ProcessRequest]) -> Vec<Result<Results>> {
        debug!(requests = requests.len(), "processing batch");
        requests.par_iter().map(|request| self.handle(request)).collect()
    }
}
