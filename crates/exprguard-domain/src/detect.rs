//! Expression detection over model value trees.

use crate::model::AttributeLookup;
use crate::value::ModelValue;
use crate::watch::WatchSet;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Full-string match of `.*\$\{.*\}.*`: any `${...}` substring qualifies.
///
/// `(?s)` lets the wildcards cross line breaks, unlike a plain full match where a
/// value such as `"a\n${x}"` would slip through despite holding a placeholder.
static EXPRESSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A.*\$\{.*\}.*\z").expect("expression pattern is a valid regex")
});

/// Whether `value` contains an unresolved `${...}` expression anywhere.
pub fn is_expression_string(value: &str) -> bool {
    EXPRESSION_PATTERN.is_match(value)
}

/// Whether `value` contains an expression at any depth.
pub fn contains_expression(value: &ModelValue) -> bool {
    match value {
        ModelValue::Undefined
        | ModelValue::Boolean(_)
        | ModelValue::Long(_)
        | ModelValue::Double(_) => false,
        ModelValue::String(s) | ModelValue::Expression(s) => is_expression_string(s),
        ModelValue::List(items) => items.iter().any(contains_expression),
        ModelValue::Object(members) => members.iter().any(|(_, v)| contains_expression(v)),
        ModelValue::Property(_, v) => contains_expression(v),
    }
}

/// Watched attributes of `model` whose defined value contains an expression.
///
/// An empty set means the model passes.
pub fn check_model<M>(watched: &WatchSet, model: &M) -> BTreeSet<String>
where
    M: AttributeLookup + ?Sized,
{
    let mut offending = BTreeSet::new();
    for name in watched.iter() {
        let Some(value) = model.get_defined(name) else {
            continue;
        };
        if contains_expression(value) {
            tracing::debug!(attribute = name, "expression found in watched attribute");
            offending.insert(name.to_string());
        }
    }
    offending
}
