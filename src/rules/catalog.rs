use crate::error::Result;

use super::{PatternRule, RuleCheck, UncheckedSendRule};

// The patterns approximate lexical structure (brace pairing, statement
// boundaries) without parsing; false positives and negatives are expected.
// Loop bodies are bounded by whatever the character classes happen to span
// up to the first transfer/send call.

const RANDOM_PATTERN: &str = r"\s+\w*rand\w*\(";
const FOR_LOOP_PATTERN: &str =
    r"for\s*\([\w\s]+;\s*[\w\s<>=.()]+;\s*[\w\s+\-()]+\)\s*\{[\w\s\\()\[\].]+(?:transfer\(|send\()";
const DO_LOOP_PATTERN: &str = r"do\s*\{[\w\s\\()\[\].]+(?:transfer\(|send\()";
const WHILE_LOOP_PATTERN: &str =
    r"while\s*\([\w\s<>=.()]+\)\s*\{[\w\s\\()\[\].]+(?:transfer\(|send\()";
const REQUIRED_TRANSFER_PATTERN: &str = r"require\(.+\.(?:transfer|send)\(.*\)\);";
const BALANCE_REQUIREMENT_PATTERN: &str =
    r"(?:require|assert)\(.+\.(?:balanceOf|balance)\s*[<>=]+\s*\w+\);";
const ARITHMETIC_PATTERN: &str = r"[\w\[\].]+\s*(?:\+=|-=|\*=|/=|\+|-|\*|/)\s*[\w\[\].]+\s*;";
const CALL_VALUE_PATTERN: &str = r"call\.value\(";

/// Builds the builtin rule catalog in its fixed report order.
///
/// # Errors
/// Returns [`crate::SolsniffError::InvalidPattern`] if any hard-coded
/// pattern fails to compile; a defect to surface at startup, not recover
/// from.
pub fn builtin_rules() -> Result<Vec<Box<dyn RuleCheck>>> {
    let mut rules: Vec<Box<dyn RuleCheck>> = Vec::new();

    rules.push(Box::new(PatternRule::new(
        "random-function",
        "possible random functions",
        RANDOM_PATTERN,
        |line| {
            format!(
                "Line {line} contains a possible random function definition or call - \
                 be wary of relying on on-chain pseudorandomness for any critical functionality"
            )
        },
        "No random functions detected by this test",
    )?));

    rules.extend(loop_rules()?);

    rules.push(Box::new(PatternRule::new(
        "required-transfer",
        "possible functions containing required transfers",
        REQUIRED_TRANSFER_PATTERN,
        |line| {
            format!(
                "Required transfer detected on line {line} - any subsequent code \
                 contained in this function may be susceptible to DOS"
            )
        },
        "No required transfers detected by this test",
    )?));

    rules.push(Box::new(PatternRule::new(
        "balance-requirement",
        "possible ether balance requirements",
        BALANCE_REQUIREMENT_PATTERN,
        |line| {
            format!(
                "Balance requirement detected on line {line} - ensure that contract \
                 functionality does not depend on exact ether balance requirements \
                 due to forced ether sends"
            )
        },
        "No ether balance requirements detected by this test",
    )?));

    rules.push(Box::new(PatternRule::new(
        "unsafe-arithmetic",
        "possible unchecked arithmetic",
        ARITHMETIC_PATTERN,
        |line| {
            format!(
                "Unchecked arithmetic operation on line {line} - integer overflow or \
                 underflow can occur when results are not range checked; consider a \
                 safe math library"
            )
        },
        "No unchecked arithmetic detected by this test",
    )?));

    rules.push(Box::new(PatternRule::new(
        "call-value",
        "possible use of call.value()",
        CALL_VALUE_PATTERN,
        |line| {
            format!(
                "Use of call.value() on line {line} - forwarding value with an external \
                 call carries reentrancy risk; update state before the call or use a \
                 reentrancy guard"
            )
        },
        "No call.value() usage detected by this test",
    )?));

    rules.push(Box::new(UncheckedSendRule::new()?));

    Ok(rules)
}

fn loop_rules() -> Result<Vec<Box<dyn RuleCheck>>> {
    let for_rule = PatternRule::new(
        "transfer-in-for-loop",
        "possible for loops containing transfers",
        FOR_LOOP_PATTERN,
        |line| {
            format!(
                "For loop construct on line {line} appears to contain a transfer - \
                 disbursement of funds could be stalled by an attacker"
            )
        },
        "No for loops containing transfers detected by this test",
    )?;

    let do_rule = PatternRule::new(
        "transfer-in-do-loop",
        "possible do loops containing transfers",
        DO_LOOP_PATTERN,
        |line| {
            format!(
                "Do loop construct on line {line} appears to contain a transfer - \
                 disbursement of funds could be stalled by an attacker"
            )
        },
        "No do loops containing transfers detected by this test",
    )?;

    let while_rule = PatternRule::new(
        "transfer-in-while-loop",
        "possible while loops containing transfers",
        WHILE_LOOP_PATTERN,
        |line| {
            format!(
                "While loop construct on line {line} appears to contain a transfer - \
                 disbursement of funds could be stalled by an attacker"
            )
        },
        "No while loops containing transfers detected by this test",
    )?;

    Ok(vec![
        Box::new(for_rule),
        Box::new(do_rule),
        Box::new(while_rule),
    ])
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
