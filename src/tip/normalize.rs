//! Line normalizer — strips section markers and list bullets.

use super::classify::SectionTag;

/// Action steps shorter than this (in characters, after stripping) are noise.
pub const MIN_ACTION_STEP_CHARS: usize = 4;

/// Leading/trailing decoration removed around marker remainders.
fn is_emphasis(c: char) -> bool {
    c.is_whitespace() || matches!(c, '*' | '_' | '#' | '~' | '`' | ':')
}

/// Return the content that follows `tag`'s marker on `line`.
///
/// Everything up to and including the earliest marker occurrence is
/// removed, along with surrounding emphasis. The result may be empty when
/// the header sits on its own line. A line without any of the tag's
/// markers is returned trimmed.
#[must_use]
pub fn strip_marker(line: &str, tag: SectionTag) -> String {
    let lower = line.to_ascii_lowercase();
    let cut = tag
        .markers()
        .iter()
        .filter_map(|marker| lower.find(marker).map(|pos| pos + marker.len()))
        .min();

    let rest = match cut {
        Some(end) => &line[end..],
        None => line,
    };
    rest.trim_matches(is_emphasis).to_string()
}

/// Remove a single leading enumeration glyph (`1.`, `2)`, `-`, `•`, `*`).
///
/// Digits only count as a glyph when followed by `.` or `)`, so content
/// such as `2FA everywhere` is left alone.
#[must_use]
pub fn strip_bullet(line: &str) -> String {
    let line = line.trim();

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = if digits > 0 {
        let after = &line[digits..];
        after.strip_prefix(&['.', ')'][..]).unwrap_or(line)
    } else if let Some(after) = line.strip_prefix(&['-', '•', '*'][..]) {
        after.strip_prefix(&['.', ')'][..]).unwrap_or(after)
    } else {
        line
    };

    rest.trim().to_string()
}

/// Normalize a line collected under `Action Steps`; `None` when it is noise.
#[must_use]
pub fn action_step(line: &str) -> Option<String> {
    let step = strip_bullet(line);
    (step.chars().count() >= MIN_ACTION_STEP_CHARS).then_some(step)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
