use super::*;
use crate::rules::FindingKind;

#[test]
fn findings_render_as_json_array() {
    let findings = vec![
        Finding {
            rule_id: "call-value".to_string(),
            category: "possible use of call.value()".to_string(),
            kind: FindingKind::Flagged,
            line: Some(3),
            detail: "Use of call.value() on line 3".to_string(),
        },
        Finding {
            rule_id: "random-function".to_string(),
            category: "possible random functions".to_string(),
            kind: FindingKind::Clean,
            line: None,
            detail: "No random functions detected by this test".to_string(),
        },
    ];

    let output = JsonFormatter.format(&findings).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["rule_id"], "call-value");
    assert_eq!(array[0]["kind"], "flagged");
    assert_eq!(array[0]["line"], 3);
    assert_eq!(array[1]["kind"], "clean");
    assert!(array[1]["line"].is_null());
}

#[test]
fn empty_findings_render_as_empty_array() {
    let output = JsonFormatter.format(&[]).unwrap();

    assert_eq!(output.trim(), "[]");
}

#[test]
fn output_ends_with_newline() {
    let output = JsonFormatter.format(&[]).unwrap();

    assert!(output.ends_with('\n'));
}
