//! Step naming-convention lint.
//!
//! Each rule is a `(predicate, message)` pair. Rules are evaluated
//! independently so a method reports every convention it breaks.

use crate::model::{MethodInfo, TraitInfo};
use regex::Regex;
use std::sync::LazyLock;

/// A standalone `the`, `a` or `no` qualifying the subject of a `should`.
static RE_QUALIFIED_SHOULD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:the|a|no)\b.*\bshould\b").unwrap());

/// A single naming convention.
pub struct Rule {
    /// Returns `true` when the method violates the rule.
    pub violated: fn(&MethodInfo) -> bool,
    pub message: &'static str,
}

/// Conventions in reporting order.
pub static RULES: &[Rule] = &[
    Rule {
        violated: has_multiple_steps,
        message: "Multiple steps found",
    },
    Rule {
        violated: given_lacks_following,
        message: "Missing \"following\" in the step",
    },
    Rule {
        violated: when_lacks_subject,
        message: "Missing \"I \" in the step",
    },
    Rule {
        violated: then_lacks_assert_name,
        message: "Missing \"Assert\" in the method name",
    },
    Rule {
        violated: then_name_has_should,
        message: "Assert method contains \"Should\" but should not.",
    },
    Rule {
        violated: then_lacks_should,
        message: "Missing \"should\" in the step",
    },
    Rule {
        violated: then_lacks_qualifier,
        message: "Missing \"the\", \"a\" or \"no\" in the step",
    },
    Rule {
        violated: lacks_example,
        message: "Missing example",
    },
];

fn has_multiple_steps(m: &MethodInfo) -> bool {
    m.doc.steps.len() > 1
}

fn given_lacks_following(m: &MethodInfo) -> bool {
    is_given(m) && !step(m).contains("following")
}

fn when_lacks_subject(m: &MethodInfo) -> bool {
    is_when(m) && !step(m).contains("I ")
}

fn then_lacks_assert_name(m: &MethodInfo) -> bool {
    is_then(m) && !m.name.contains("Assert")
}

fn then_name_has_should(m: &MethodInfo) -> bool {
    is_then(m) && m.name.contains("Should")
}

fn then_lacks_should(m: &MethodInfo) -> bool {
    is_then(m) && !step(m).contains("should")
}

fn then_lacks_qualifier(m: &MethodInfo) -> bool {
    is_then(m) && !RE_QUALIFIED_SHOULD.is_match(step(m))
}

fn lacks_example(m: &MethodInfo) -> bool {
    m.doc.example.is_empty()
}

/// Lint every method, trait by trait, returning formatted findings.
pub fn validate(info: &TraitInfo) -> Vec<String> {
    let mut findings = Vec::new();
    for trait_doc in info.iter() {
        for method in &trait_doc.methods {
            for message in check_method(method) {
                findings.push(format_finding(method, message));
            }
        }
    }
    tracing::debug!(
        traits = info.len(),
        findings = findings.len(),
        "validated step conventions"
    );
    findings
}

/// Messages of every rule the method violates, in rule order.
pub fn check_method(method: &MethodInfo) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.violated)(method))
        .map(|rule| rule.message)
        .collect()
}

fn format_finding(method: &MethodInfo, message: &str) -> String {
    format!("  {}::{} - {}\n", method.class_name, method.name, message)
}

/// Step the conventions apply to: the first one.
fn step(method: &MethodInfo) -> &str {
    method.doc.steps.first().map(String::as_str).unwrap_or("")
}

fn is_given(method: &MethodInfo) -> bool {
    step(method).starts_with("@Given")
}

fn is_when(method: &MethodInfo) -> bool {
    step(method).starts_with("@When")
}

fn is_then(method: &MethodInfo) -> bool {
    step(method).starts_with("@Then")
}
