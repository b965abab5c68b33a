use super::*;

#[test]
fn plain_markers_classify() {
    assert_eq!(classify("Title: Lock it down"), Some(SectionTag::Title));
    assert_eq!(classify("Tip: Use a password manager"), Some(SectionTag::Tip));
    assert_eq!(classify("Explanation: Reused passwords leak"), Some(SectionTag::Explanation));
    assert_eq!(classify("Action Steps:"), Some(SectionTag::Actions));
    assert_eq!(classify("Closing: Stay safe"), Some(SectionTag::Closing));
}

#[test]
fn alternate_phrases_classify() {
    assert_eq!(classify("Why it matters: attackers reuse leaks"), Some(SectionTag::Explanation));
    assert_eq!(classify("Why this matters:"), Some(SectionTag::Explanation));
    assert_eq!(classify("Steps to take:"), Some(SectionTag::Actions));
    assert_eq!(classify("What to do:"), Some(SectionTag::Actions));
    assert_eq!(classify("Remember: updates matter"), Some(SectionTag::Closing));
    assert_eq!(classify("Final thought: be careful"), Some(SectionTag::Closing));
}

#[test]
fn decorated_and_mixed_case_markers_classify() {
    assert_eq!(classify("**ACTION STEPS:**"), Some(SectionTag::Actions));
    assert_eq!(classify("🔐 **Title:** Strong Passwords"), Some(SectionTag::Title));
    assert_eq!(classify("### tip: patch early"), Some(SectionTag::Tip));
}

#[test]
fn plain_lines_are_continuations() {
    assert_eq!(classify("1. Enable MFA"), None);
    assert_eq!(classify("Attackers love reused passwords."), None);
    assert_eq!(classify("Tip without a colon"), None);
}

#[test]
fn table_order_breaks_ties() {
    // Contains both "title:" and "tip:".
    assert_eq!(classify("Title: Tip: combined"), Some(SectionTag::Title));
    // Contains both "tip:" and "remember:".
    assert_eq!(classify("Remember: this tip: matters"), Some(SectionTag::Tip));
}

#[test]
fn markers_lookup_matches_table() {
    assert_eq!(SectionTag::Title.markers(), &["title:"]);
    assert_eq!(SectionTag::Actions.markers().len(), 3);
    assert!(SectionTag::Closing.markers().contains(&"remember:"));
}
