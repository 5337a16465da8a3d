//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Lexical expression detection on strings
//! - Recursive detection over nested lists, objects and properties
//! - Model checking against arbitrary watch sets

use crate::detect::{check_model, contains_expression, is_expression_string};
use crate::guard::RejectExpressionValues;
use crate::model::{Operation, ResourceModel};
use crate::transform::OperationTransformer;
use crate::value::ModelValue;
use crate::watch::WatchSet;
use exprguard_types::ResourceAddress;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strings over a small alphabet rich in expression delimiters.
fn arb_delimited_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab${}\n ]{0,12}").unwrap()
}

/// Strings that can never form an expression.
fn arb_literal_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 .:/-]{0,16}").unwrap()
}

fn arb_attribute_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z-]{0,8}").unwrap()
}

/// Leaf values that hold no expression.
fn arb_literal_leaf() -> impl Strategy<Value = ModelValue> {
    prop_oneof![
        Just(ModelValue::Undefined),
        any::<bool>().prop_map(ModelValue::Boolean),
        any::<i64>().prop_map(ModelValue::Long),
        (-1.0e6f64..1.0e6).prop_map(ModelValue::Double),
        arb_literal_string().prop_map(ModelValue::String),
        arb_literal_string().prop_map(ModelValue::Expression),
    ]
}

/// Nested values built from literal leaves only.
fn arb_literal_tree() -> impl Strategy<Value = ModelValue> {
    arb_literal_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(ModelValue::List),
            prop::collection::vec((arb_attribute_name(), inner.clone()), 0..6)
                .prop_map(ModelValue::Object),
            (arb_attribute_name(), inner).prop_map(|(k, v)| ModelValue::property(k, v)),
        ]
    })
}

/// Wrap `leaf` in one list/object/property layer per entry, next to literal siblings.
fn bury(leaf: ModelValue, layers: Vec<(u8, ModelValue)>) -> ModelValue {
    layers
        .into_iter()
        .fold(leaf, |acc, (kind, sibling)| match kind % 3 {
            0 => ModelValue::list([sibling, acc]),
            1 => ModelValue::object([("sibling", sibling), ("buried", acc)]),
            _ => ModelValue::property("buried", acc),
        })
}

/// Reference oracle: a `${` followed anywhere later by `}`.
fn has_placeholder_substring(s: &str) -> bool {
    s.find("${")
        .is_some_and(|start| s[start + 2..].contains('}'))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn string_detection_matches_substring_oracle(s in arb_delimited_string()) {
        prop_assert_eq!(is_expression_string(&s), has_placeholder_substring(&s));
    }

    #[test]
    fn embedded_placeholder_is_always_detected(
        prefix in arb_delimited_string(),
        body in arb_literal_string(),
        suffix in arb_delimited_string(),
    ) {
        let value = format!("{prefix}${{{body}}}{suffix}");
        prop_assert!(is_expression_string(&value));
    }

    #[test]
    fn literal_trees_never_contain_expressions(tree in arb_literal_tree()) {
        prop_assert!(!contains_expression(&tree));
    }

    #[test]
    fn buried_expression_is_found_at_any_depth(
        body in arb_literal_string(),
        layers in prop::collection::vec((any::<u8>(), arb_literal_tree()), 0..8),
    ) {
        let tree = bury(ModelValue::string(format!("${{{body}}}")), layers);
        prop_assert!(contains_expression(&tree));
    }

    #[test]
    fn check_model_reports_only_watched_defined_offenders(
        attrs in prop::collection::btree_map(arb_attribute_name(), arb_delimited_string(), 0..8),
        watched in prop::collection::vec(arb_attribute_name(), 0..8),
    ) {
        let model: ResourceModel = attrs
            .iter()
            .map(|(k, v)| (k.clone(), ModelValue::string(v.clone())))
            .collect();
        let watched = WatchSet::from_names(watched);

        let offending = check_model(&watched, &model);

        for name in &offending {
            prop_assert!(watched.contains(name));
            prop_assert!(has_placeholder_substring(&attrs[name]));
        }
        for name in watched.iter() {
            if attrs.get(name).is_some_and(|v| has_placeholder_substring(v)) {
                prop_assert!(offending.contains(name));
            }
        }
    }

    #[test]
    fn operation_guard_is_idempotent_and_never_edits_payload(
        params in prop::collection::btree_map(arb_attribute_name(), arb_delimited_string(), 0..6),
        watched in prop::collection::vec(arb_attribute_name(), 0..6),
    ) {
        let guard = RejectExpressionValues::from_names(watched);
        let op = params.iter().fold(
            Operation::new("add", ResourceAddress::root()),
            |op, (k, v)| op.with_param(k.clone(), ModelValue::string(v.clone())),
        );

        let first = guard.transform_operation(&ResourceAddress::root(), op.clone()).unwrap();
        let second = guard.transform_operation(&ResourceAddress::root(), op.clone()).unwrap();

        prop_assert_eq!(&first.operation, &op);
        prop_assert_eq!(first, second);
    }
}
