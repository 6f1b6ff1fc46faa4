//! Keyword overlap scoring between a resume and a job description.
//!
//! Algorithm:
//! 1. Lower-case and tokenize both texts.
//! 2. Keep alphabetic tokens that are not stopwords.
//! 3. score = |resume ∩ job| / |job| × 100, rounded to two decimals (ties to even).
//!
//! Overlap is exact-token and unordered: no stemming, weighting or synonyms.

use std::collections::{BTreeSet, HashSet};

use crate::ats::lexicon::Lexicon;
use crate::ats::tokenizer::word_tokenize;

/// Result of comparing one resume against one job description.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    /// 0.0 – 100.0, two decimal places.
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub job_keyword_count: usize,
}

/// Distinct lower-cased, alphabetic, non-stopword tokens of `text`.
pub fn extract_keywords(text: &str, lexicon: &Lexicon) -> HashSet<String> {
    word_tokenize(&text.to_lowercase())
        .into_iter()
        .filter(|token| is_alphabetic(token) && !lexicon.is_stopword(token))
        .collect()
}

pub fn score_keywords(resume_text: &str, job_description: &str, lexicon: &Lexicon) -> KeywordScore {
    let resume_keywords = extract_keywords(resume_text, lexicon);
    let job_keywords = extract_keywords(job_description, lexicon);

    let matched: BTreeSet<String> = job_keywords
        .intersection(&resume_keywords)
        .cloned()
        .collect();

    // A description with nothing scorable in it matches nothing.
    let score = if job_keywords.is_empty() {
        tracing::warn!("Job description has no keywords after filtering; scoring 0");
        0.0
    } else {
        round_to_hundredths(matched.len() as f64 / job_keywords.len() as f64 * 100.0)
    };

    KeywordScore {
        score,
        matched,
        job_keyword_count: job_keywords.len(),
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Half-way cases go to the even neighbour: 3.125 → 3.12, 0.625 → 0.62.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
