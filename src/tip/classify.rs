//! Section classifier — maps a line to the section it opens, if any.
//!
//! Matching is case-insensitive substring containment so that markers
//! decorated with emphasis (`**Tip:**`, `🔐 Title:`) still match. The table
//! order is the tie-break priority when a line contains several markers.

/// Named section of a model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Title,
    Tip,
    Explanation,
    Actions,
    Closing,
}

/// Marker phrases per section, lower-case, in priority order.
pub const SECTION_MARKERS: &[(SectionTag, &[&str])] = &[
    (SectionTag::Title, &["title:"]),
    (SectionTag::Tip, &["tip:"]),
    (SectionTag::Explanation, &["explanation:", "why it matters:", "why this matters:"]),
    (SectionTag::Actions, &["action steps:", "steps to take:", "what to do:"]),
    (SectionTag::Closing, &["closing:", "remember:", "final thought:"]),
];

impl SectionTag {
    /// Marker phrases that open this section.
    #[must_use]
    pub fn markers(self) -> &'static [&'static str] {
        for (tag, markers) in SECTION_MARKERS {
            if *tag == self {
                return markers;
            }
        }
        &[]
    }
}

/// Return the section `line` opens, or `None` if it continues the current one.
///
/// Markers are ASCII, so ASCII lowercasing is enough and keeps byte offsets
/// aligned with the original line for `normalize::strip_marker`.
#[must_use]
pub fn classify(line: &str) -> Option<SectionTag> {
    let lower = line.to_ascii_lowercase();
    SECTION_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
