pub mod term;
pub mod tfidf;
pub mod vocabulary;
