//! Tip service — prompt → model text → structured tip.
//!
//! DESIGN
//! ======
//! Builds a daily or keyword prompt, calls the configured text generator,
//! and parses the answer with `tip::parse`. The daily variant consults the
//! `DailyTipCache` first and writes it after a fresh parse; the keyword
//! variant never touches the cache. Upstream errors propagate unchanged so
//! each endpoint can apply its own policy. No retries.

use std::sync::Arc;

use time::Date;
use tracing::{debug, info};

use super::cache::DailyTipCache;
use crate::llm::{LlmError, TextGenerator};
use crate::tip::{self, StructuredTip};

/// Topic used for the default title of the daily tip.
pub const DAILY_TOPIC: &str = "Daily";
/// Topic used when a keyword request carries a blank keyword.
pub const GENERAL_TOPIC: &str = "General";

const FORMAT_INSTRUCTIONS: &str = "\
Format the answer exactly like this, with each label at the start of its own line:
Title: <short catchy title>
Tip: <one or two sentences with the core advice>
Explanation: <why this matters, two or three sentences>
Action Steps:
1. <first concrete step>
2. <second concrete step>
3. <third concrete step>
Closing: <one short motivational sentence>
Do not use JSON or code blocks.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TipError {
    #[error(transparent)]
    Llm(#[from] LlmError),
}

// =============================================================================
// PROMPTS
// =============================================================================

#[must_use]
pub fn daily_prompt() -> String {
    format!(
        "You are a friendly cybersecurity expert. Write one practical daily cybersecurity tip \
         for everyday internet users.\n\n{FORMAT_INSTRUCTIONS}"
    )
}

#[must_use]
pub fn keyword_prompt(keyword: &str) -> String {
    format!(
        "You are a friendly cybersecurity expert. Write one concise, practical cybersecurity tip \
         about \"{keyword}\" for everyday internet users.\n\n{FORMAT_INSTRUCTIONS}"
    )
}

// =============================================================================
// SERVICE
// =============================================================================

pub struct TipService {
    llm: Arc<dyn TextGenerator>,
    daily_cache: Arc<DailyTipCache>,
}

impl TipService {
    #[must_use]
    pub fn new(llm: Arc<dyn TextGenerator>, daily_cache: Arc<DailyTipCache>) -> Self {
        Self { llm, daily_cache }
    }

    /// Return today's tip, calling the model at most once per cached day.
    ///
    /// # Errors
    ///
    /// Returns [`TipError::Llm`] if the model call fails on a cache miss.
    pub async fn daily_tip(&self, today: Date) -> Result<StructuredTip, TipError> {
        if let Some(cached) = self.daily_cache.get(today) {
            debug!(%today, "tip: daily cache hit");
            return Ok(cached);
        }
        debug!(%today, "tip: daily cache miss");

        let raw = self.llm.generate(&daily_prompt()).await?;
        let parsed = tip::parse(&raw, DAILY_TOPIC);
        self.daily_cache.put(today, parsed.clone());

        info!(%today, title = %parsed.title, steps = parsed.action_steps.len(), "tip: daily tip generated");
        Ok(parsed)
    }

    /// Return a fresh tip about `keyword`. A blank keyword asks for a
    /// general tip.
    ///
    /// # Errors
    ///
    /// Returns [`TipError::Llm`] if the model call fails.
    pub async fn tip_by_keyword(&self, keyword: &str) -> Result<StructuredTip, TipError> {
        let keyword = keyword.trim();
        let (prompt, topic) =
            if keyword.is_empty() { (daily_prompt(), GENERAL_TOPIC) } else { (keyword_prompt(keyword), keyword) };

        let raw = self.llm.generate(&prompt).await?;
        let parsed = tip::parse(&raw, topic);

        info!(%topic, title = %parsed.title, steps = parsed.action_steps.len(), "tip: keyword tip generated");
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "tip_test.rs"]
mod tests;
