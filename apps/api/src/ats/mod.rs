// ATS keyword scoring: resume text extraction, tokenization, stopword filtering
// and keyword-overlap scoring behind a single multipart endpoint.

pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod tokenizer;
