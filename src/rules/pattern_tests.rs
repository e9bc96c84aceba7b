use super::*;
use crate::error::SolsniffError;

fn sample_rule() -> PatternRule {
    PatternRule::new(
        "sample",
        "sample category",
        r"magic\(",
        |line| format!("magic on line {line}"),
        "no magic here",
    )
    .unwrap()
}

#[test]
fn first_match_is_flagged_with_line_number() {
    let rule = sample_rule();
    let doc = SourceDocument::new("one\ntwo magic()\nthree magic()\n".to_string());

    let finding = rule.evaluate(&doc).unwrap();

    assert!(finding.is_flagged());
    assert_eq!(finding.line, Some(2));
    assert_eq!(finding.detail, "magic on line 2");
}

#[test]
fn later_occurrences_are_not_reported() {
    // First-match-only policy: one finding even with repeated instances.
    let rule = sample_rule();
    let doc = SourceDocument::new("magic()\nmagic()\nmagic()\n".to_string());

    let finding = rule.evaluate(&doc).unwrap();

    assert_eq!(finding.line, Some(1));
}

#[test]
fn no_match_is_clean_with_negative_message() {
    let rule = sample_rule();
    let doc = SourceDocument::new("nothing interesting\n".to_string());

    let finding = rule.evaluate(&doc).unwrap();

    assert!(finding.is_clean());
    assert_eq!(finding.line, None);
    assert_eq!(finding.detail, "no magic here");
}

#[test]
fn empty_document_is_clean() {
    let rule = sample_rule();
    let doc = SourceDocument::new(String::new());

    assert!(rule.evaluate(&doc).unwrap().is_clean());
}

#[test]
fn malformed_pattern_fails_at_construction() {
    let result = PatternRule::new(
        "broken",
        "broken category",
        r"(unclosed",
        |line| format!("{line}"),
        "never",
    );

    assert!(matches!(
        result,
        Err(SolsniffError::InvalidPattern { ref pattern, .. }) if pattern == r"(unclosed"
    ));
}
