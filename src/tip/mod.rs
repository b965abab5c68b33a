//! Tip — structured cybersecurity advice recovered from model text.
//!
//! DESIGN
//! ======
//! The model is asked for a loosely formatted answer (`Title:`, `Tip:`,
//! `Explanation:`, `Action Steps:`, `Closing:`), but nothing guarantees it
//! follows the format. Parsing is split into three pure stages:
//!
//! - `classify` decides whether a line opens a named section.
//! - `normalize` strips marker prefixes and list bullets.
//! - `parse` drives both line by line and falls back to positional
//!   extraction when no tip body was recognized.
//!
//! Parsing is total: any input string yields a `StructuredTip`.

pub mod classify;
pub mod normalize;
pub mod parse;

use serde::{Deserialize, Serialize};

pub use classify::{SectionTag, classify};
pub use parse::parse;

/// Closing line used when the model response has no closing section.
pub const DEFAULT_CLOSING: &str = "Stay alert, stay updated, and stay secure online!";

// =============================================================================
// STRUCTURED TIP
// =============================================================================

/// A cybersecurity tip in the fixed response schema.
///
/// Serialized with camelCase keys (`actionSteps`) to match the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTip {
    pub title: String,
    /// Empty when no tip body was recovered; the parser uses this as its
    /// fallback trigger.
    pub tip: String,
    pub explanation: String,
    /// Steps in the order they appeared in the source text.
    pub action_steps: Vec<String>,
    pub closing: String,
}

impl StructuredTip {
    /// Default-valued tip for `topic`: templated title, default closing,
    /// everything else empty.
    #[must_use]
    pub fn skeleton(topic: &str) -> Self {
        Self {
            title: format!("{topic} Security Tip"),
            tip: String::new(),
            explanation: String::new(),
            action_steps: Vec::new(),
            closing: DEFAULT_CLOSING.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
