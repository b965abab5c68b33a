use super::*;

#[test]
fn skeleton_uses_topic_in_title() {
    let tip = StructuredTip::skeleton("Phishing");
    assert_eq!(tip.title, "Phishing Security Tip");
    assert!(tip.tip.is_empty());
    assert!(tip.explanation.is_empty());
    assert!(tip.action_steps.is_empty());
    assert_eq!(tip.closing, DEFAULT_CLOSING);
}

#[test]
fn serializes_with_camel_case_keys() {
    let mut tip = StructuredTip::skeleton("Daily");
    tip.action_steps = vec!["Enable MFA".into()];
    let json = serde_json::to_value(&tip).unwrap();
    assert_eq!(json["title"], "Daily Security Tip");
    assert_eq!(json["actionSteps"], serde_json::json!(["Enable MFA"]));
    assert!(json.get("action_steps").is_none());
    assert_eq!(json.as_object().unwrap().len(), 5);
}

#[test]
fn deserializes_api_shape() {
    let json = r#"{"title":"T","tip":"t","explanation":"e","actionSteps":["a","b"],"closing":"c"}"#;
    let tip: StructuredTip = serde_json::from_str(json).unwrap();
    assert_eq!(tip.action_steps, vec!["a", "b"]);
    assert_eq!(tip.closing, "c");
}
