//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the tip service, which owns the text generator and the daily
//! tip cache. The cache is created once per process and shared by all
//! requests.

use std::sync::Arc;

use crate::llm::TextGenerator;
use crate::services::cache::DailyTipCache;
use crate::services::tip::TipService;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub tips: Arc<TipService>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        let daily_cache = Arc::new(DailyTipCache::new());
        Self { tips: Arc::new(TipService::new(llm, daily_cache)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
