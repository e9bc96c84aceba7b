use super::*;

struct StubRule;

impl RuleCheck for StubRule {
    fn id(&self) -> &'static str {
        "stub-rule"
    }

    fn category(&self) -> &'static str {
        "stub category"
    }

    fn evaluate(&self, _doc: &SourceDocument) -> Result<Finding> {
        Ok(Finding::clean(self, "nothing to see"))
    }
}

#[test]
fn flagged_finding_carries_line_and_detail() {
    let finding = Finding::flagged(&StubRule, 7, "trouble on line 7".to_string());

    assert!(finding.is_flagged());
    assert!(!finding.is_clean());
    assert_eq!(finding.rule_id, "stub-rule");
    assert_eq!(finding.category, "stub category");
    assert_eq!(finding.line, Some(7));
    assert_eq!(finding.detail, "trouble on line 7");
}

#[test]
fn clean_finding_has_no_line() {
    let finding = Finding::clean(&StubRule, "all quiet");

    assert!(finding.is_clean());
    assert_eq!(finding.line, None);
    assert_eq!(finding.detail, "all quiet");
}

#[test]
fn analysis_error_finding_is_error_kind() {
    let finding = Finding::analysis_error(&StubRule, "rule blew up".to_string());

    assert!(finding.is_error());
    assert!(!finding.is_flagged());
    assert_eq!(finding.line, None);
}

#[test]
fn finding_serializes_with_lowercase_kind() {
    let finding = Finding::flagged(&StubRule, 3, "detail".to_string());

    let value = serde_json::to_value(&finding).unwrap();
    assert_eq!(value["rule_id"], "stub-rule");
    assert_eq!(value["kind"], "flagged");
    assert_eq!(value["line"], 3);
}

#[test]
fn clean_finding_serializes_null_line() {
    let finding = Finding::clean(&StubRule, "all quiet");

    let value = serde_json::to_value(&finding).unwrap();
    assert_eq!(value["kind"], "clean");
    assert!(value["line"].is_null());
}
