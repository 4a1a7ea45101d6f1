pub mod cleaner;
pub mod normalize;
pub mod pos;
pub mod stopwords;
pub mod tokenizer;
