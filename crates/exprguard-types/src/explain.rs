//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would be rejected.
    pub before: &'static str,
    /// Input that passes the guard.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_GUARD_REJECT_EXPRESSIONS => Some(explain_reject_expressions()),
        ids::CODE_EXPRESSION_NOT_ALLOWED => Some(explain_expression_not_allowed()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_GUARD_REJECT_EXPRESSIONS]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_EXPRESSION_NOT_ALLOWED]
}

fn explain_reject_expressions() -> Explanation {
    Explanation {
        title: "Reject Expression Values",
        description: "\
Inspects the watched attributes of a resource or operation and flags any value that
contains an unresolved `${...}` expression, at any depth of nesting.

Some consumers only understand literal values. Sending them an expression would
either fail later or silently store the placeholder text:
- Operations are flagged with a deferred rejection policy
- Whole resources fail immediately, naming every offending attribute",
        remediation: "\
Resolve the expression before sending the value:
- Replace `${...}` with the literal value it resolves to
- Or stop watching the attribute if the consumer supports expressions for it",
        examples: ExamplePair {
            before: r#"{"enabled": "${env.ENABLED:true}", "max-pool-size": 20}"#,
            after: r#"{"enabled": true, "max-pool-size": 20}"#,
        },
    }
}

fn explain_expression_not_allowed() -> Explanation {
    Explanation {
        title: "Expression Not Allowed",
        description: "\
A watched attribute holds a value containing an unresolved expression.

The value may be a plain string such as `${jboss.bind.address}`, an expression
embedded in a longer string, or an expression nested inside a list or object.",
        remediation: "\
Replace the expression with its resolved literal value in every nested position.",
        examples: ExamplePair {
            before: r#"{"hosts": ["localhost", "${remote.host}"]}"#,
            after: r#"{"hosts": ["localhost", "10.0.0.12"]}"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_has_an_explanation() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("guard.unknown").is_none());
    }
}
