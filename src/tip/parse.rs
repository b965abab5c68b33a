//! Tip parser — segments raw model text into a `StructuredTip`.
//!
//! DESIGN
//! ======
//! A single pass over trimmed, non-blank lines. Each line either opens a
//! section (per `classify`) or continues the current one. The open section
//! is buffered and written into the result when the next section starts or
//! input ends.
//!
//! When no tip body is recovered, the structured result for title, tip,
//! explanation, and steps is replaced by positional extraction. The closing
//! is never touched by the fallback.

use super::classify::{SectionTag, classify};
use super::normalize::{action_step, strip_bullet, strip_marker};
use super::StructuredTip;

pub const FALLBACK_TIP: &str = "Keep your software updated and think twice before clicking unexpected links.";
pub const FALLBACK_EXPLANATION: &str =
    "Most attacks exploit known vulnerabilities or human error, so small daily habits block the majority of threats.";
pub const FALLBACK_ACTION_STEP: &str = "Review the security settings of your most important accounts today.";

/// Line indices used by the positional fallback.
const FALLBACK_TIP_LINES: std::ops::Range<usize> = 1..3;
const FALLBACK_EXPLANATION_LINES: std::ops::Range<usize> = 3..5;
const FALLBACK_ACTION_LINES: std::ops::Range<usize> = 5..8;

// =============================================================================
// SECTION BUFFER
// =============================================================================

/// Lines collected for the currently open section.
#[derive(Debug, Default)]
struct SectionBuffer {
    tag: Option<SectionTag>,
    lines: Vec<String>,
}

impl SectionBuffer {
    /// Flush into `tip`, then open `tag` seeded with the rest of `header`.
    fn open(&mut self, tag: SectionTag, header: &str, tip: &mut StructuredTip) {
        self.finalize(tip);
        self.tag = Some(tag);
        if tag != SectionTag::Actions {
            let seed = strip_marker(header, tag);
            if !seed.is_empty() {
                self.lines.push(seed);
            }
        }
    }

    fn push(&mut self, line: &str) {
        match self.tag {
            Some(SectionTag::Actions) => self.lines.extend(action_step(line)),
            Some(_) => self.lines.push(line.to_string()),
            // Text before the first header belongs to no section.
            None => {}
        }
    }

    /// Write buffered lines into `tip` under the open tag and reset.
    fn finalize(&mut self, tip: &mut StructuredTip) {
        let lines = std::mem::take(&mut self.lines);
        let Some(tag) = self.tag.take() else {
            return;
        };
        if lines.is_empty() {
            return;
        }
        match tag {
            SectionTag::Title => tip.title = lines.join(" "),
            SectionTag::Tip => tip.tip = lines.join(" "),
            SectionTag::Explanation => tip.explanation = lines.join(" "),
            SectionTag::Actions => tip.action_steps = lines,
            SectionTag::Closing => tip.closing = lines.join(" "),
        }
    }
}

// =============================================================================
// PARSE
// =============================================================================

/// Parse raw model output into a `StructuredTip`.
///
/// Never fails: empty input yields `StructuredTip::skeleton(topic)`, and
/// text without a recognizable tip section goes through the positional
/// fallback.
#[must_use]
pub fn parse(raw: &str, topic: &str) -> StructuredTip {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut tip = StructuredTip::skeleton(topic);
    let mut buffer = SectionBuffer::default();

    for line in &lines {
        match classify(line) {
            Some(tag) => buffer.open(tag, line, &mut tip),
            None => buffer.push(line),
        }
    }
    buffer.finalize(&mut tip);

    if tip.tip.is_empty() && !lines.is_empty() {
        apply_fallback(&mut tip, &lines);
    }
    tip
}

/// Derive title, tip, explanation, and steps from line positions.
fn apply_fallback(tip: &mut StructuredTip, lines: &[&str]) {
    tip.title = lines[0].to_string();
    tip.tip = join_range(lines, FALLBACK_TIP_LINES).unwrap_or_else(|| FALLBACK_TIP.to_string());
    tip.explanation =
        join_range(lines, FALLBACK_EXPLANATION_LINES).unwrap_or_else(|| FALLBACK_EXPLANATION.to_string());

    let steps: Vec<String> = lines
        .get(FALLBACK_ACTION_LINES.start..lines.len().min(FALLBACK_ACTION_LINES.end))
        .unwrap_or_default()
        .iter()
        .map(|line| strip_bullet(line))
        .filter(|step| !step.is_empty())
        .collect();
    tip.action_steps = if steps.is_empty() { vec![FALLBACK_ACTION_STEP.to_string()] } else { steps };
}

/// Join the lines in `range` that exist, or `None` if none do.
fn join_range(lines: &[&str], range: std::ops::Range<usize>) -> Option<String> {
    let end = lines.len().min(range.end);
    let slice = lines.get(range.start..end)?;
    (!slice.is_empty()).then(|| slice.join(" "))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
