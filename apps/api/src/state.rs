use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::KeywordScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable keyword scorer. Default: ExactKeywordScorer.
    pub scorer: Arc<dyn KeywordScorer>,
}
