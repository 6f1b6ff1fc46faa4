use std::sync::Arc;

use crate::ats::extract::TextExtractor;
use crate::ats::lexicon::Lexicon;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stopword set, loaded once before the listener binds.
    pub lexicon: Arc<Lexicon>,
    /// Pluggable text extractor. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(lexicon: Arc<Lexicon>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { lexicon, extractor }
    }
}
