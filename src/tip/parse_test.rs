use super::*;
use crate::tip::DEFAULT_CLOSING;

const STRUCTURED: &str = "\
Title: Lock Down Your Logins
Tip: Use a unique password for every account.
Explanation: When one site leaks, reused passwords let attackers into the rest.
Action Steps:
1. Install a password manager
2. Replace reused passwords
3. Enable 2FA
Closing: Small habits, big protection.
";

// =========================================================================
// structured input
// =========================================================================

#[test]
fn structured_template_recovers_every_field() {
    let tip = parse(STRUCTURED, "Daily");
    assert_eq!(tip.title, "Lock Down Your Logins");
    assert_eq!(tip.tip, "Use a unique password for every account.");
    assert_eq!(tip.explanation, "When one site leaks, reused passwords let attackers into the rest.");
    assert_eq!(tip.action_steps, vec!["Install a password manager", "Replace reused passwords", "Enable 2FA"]);
    assert_eq!(tip.closing, "Small habits, big protection.");
}

#[test]
fn markdown_decorated_template_parses() {
    let raw = "\
🔐 **Title:** Patch Promptly

**Tip:**
Turn on automatic updates.

**Why it matters:**
Most exploits target bugs that already have fixes.
Attackers scan for unpatched systems.

**What to do:**
- Enable auto-update on your OS
- Update browser extensions

**Remember:** Updates are armor.";
    let tip = parse(raw, "Patching");
    assert_eq!(tip.title, "Patch Promptly");
    assert_eq!(tip.tip, "Turn on automatic updates.");
    assert_eq!(
        tip.explanation,
        "Most exploits target bugs that already have fixes. Attackers scan for unpatched systems."
    );
    assert_eq!(tip.action_steps, vec!["Enable auto-update on your OS", "Update browser extensions"]);
    assert_eq!(tip.closing, "Updates are armor.");
}

#[test]
fn multi_line_sections_join_with_single_space() {
    let raw = "Tip: Check links\n  before you click them.  \nExplanation: x";
    let tip = parse(raw, "Links");
    assert_eq!(tip.tip, "Check links before you click them.");
}

#[test]
fn action_steps_example_from_header_line() {
    let raw = "Tip: t\n**Action Steps:**\n1. Use a password manager\n2. Enable 2FA";
    let tip = parse(raw, "Passwords");
    assert_eq!(tip.action_steps, vec!["Use a password manager", "Enable 2FA"]);
}

#[test]
fn action_header_content_on_same_line_is_dropped() {
    let raw = "Tip: t\nAction Steps: inline text\n- Real step";
    let tip = parse(raw, "Topic");
    assert_eq!(tip.action_steps, vec!["Real step"]);
}

#[test]
fn bare_bullet_is_discarded() {
    let raw = "Tip: t\nAction Steps:\n- \n- Lock your screen\n3.";
    let tip = parse(raw, "Topic");
    assert_eq!(tip.action_steps, vec!["Lock your screen"]);
}

#[test]
fn action_order_is_preserved() {
    let raw = "Tip: t\nSteps to take:\n3. Third\n1. First\n2. Second";
    let tip = parse(raw, "Topic");
    assert_eq!(tip.action_steps, vec!["Third", "First", "Second"]);
}

#[test]
fn missing_sections_keep_defaults() {
    let tip = parse("Tip: Lock your phone.", "Mobile");
    assert_eq!(tip.title, "Mobile Security Tip");
    assert_eq!(tip.tip, "Lock your phone.");
    assert!(tip.explanation.is_empty());
    assert!(tip.action_steps.is_empty());
    assert_eq!(tip.closing, DEFAULT_CLOSING);
}

#[test]
fn header_without_content_keeps_default() {
    let tip = parse("Title:\nTip: body\nClosing:", "Topic");
    assert_eq!(tip.title, "Topic Security Tip");
    assert_eq!(tip.closing, DEFAULT_CLOSING);
}

#[test]
fn preamble_before_first_header_is_ignored() {
    let tip = parse("Sure! Here is your tip.\nTip: Back up weekly.", "Backups");
    assert_eq!(tip.tip, "Back up weekly.");
    assert_eq!(tip.title, "Backups Security Tip");
}

#[test]
fn repeated_section_keeps_last_occurrence() {
    let tip = parse("Tip: first\nTip: second", "Topic");
    assert_eq!(tip.tip, "second");
}

// =========================================================================
// empty input
// =========================================================================

#[test]
fn empty_input_returns_skeleton() {
    let tip = parse("", "Daily");
    assert_eq!(tip, StructuredTip::skeleton("Daily"));
    assert_eq!(tip.tip, "");
    assert!(tip.action_steps.is_empty());
}

#[test]
fn blank_lines_only_returns_skeleton() {
    assert_eq!(parse("\n   \n\t\n", "Daily"), StructuredTip::skeleton("Daily"));
}

// =========================================================================
// fallback
// =========================================================================

#[test]
fn unstructured_input_falls_back_positionally() {
    let raw = "\
Beware of Phishing
Never click links in unexpected emails.
Verify the sender first.
Phishing is the top cause of breaches.
One click can install malware.
1. Hover over links
2. Report suspicious mail
- Delete it
Extra line ignored";
    let tip = parse(raw, "Phishing");
    assert_eq!(tip.title, "Beware of Phishing");
    assert_eq!(tip.tip, "Never click links in unexpected emails. Verify the sender first.");
    assert_eq!(tip.explanation, "Phishing is the top cause of breaches. One click can install malware.");
    assert_eq!(tip.action_steps, vec!["Hover over links", "Report suspicious mail", "Delete it"]);
    assert_eq!(tip.closing, DEFAULT_CLOSING);
}

#[test]
fn single_line_falls_back_to_generic_text() {
    let tip = parse("Stay safe out there", "Daily");
    assert_eq!(tip.title, "Stay safe out there");
    assert_eq!(tip.tip, FALLBACK_TIP);
    assert_eq!(tip.explanation, FALLBACK_EXPLANATION);
    assert_eq!(tip.action_steps, vec![FALLBACK_ACTION_STEP]);
}

#[test]
fn two_lines_fill_tip_from_second_line() {
    let tip = parse("Heading\nOnly one tip line", "Daily");
    assert_eq!(tip.tip, "Only one tip line");
    assert_eq!(tip.explanation, FALLBACK_EXPLANATION);
}

#[test]
fn fallback_discards_structured_fields_but_keeps_closing() {
    let raw = "Title: Ignored Title\nExplanation: ignored\nClosing: Keep this closing.";
    let tip = parse(raw, "Topic");
    assert_eq!(tip.title, "Title: Ignored Title");
    assert_eq!(tip.tip, "Explanation: ignored Closing: Keep this closing.");
    assert_eq!(tip.explanation, FALLBACK_EXPLANATION);
    assert_eq!(tip.closing, "Keep this closing.");
}

// =========================================================================
// purity
// =========================================================================

#[test]
fn parse_is_deterministic() {
    assert_eq!(parse(STRUCTURED, "Daily"), parse(STRUCTURED, "Daily"));
    let raw = "a line\nanother line";
    assert_eq!(parse(raw, "X"), parse(raw, "X"));
}
