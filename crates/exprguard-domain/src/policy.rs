use crate::model::Operation;
use crate::value::ModelValue;
use std::collections::BTreeSet;

/// Offending attribute names behind a deferred rejection.
///
/// The description is rendered on demand; nothing is captured besides the names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionRejection {
    attributes: BTreeSet<String>,
}

impl ExpressionRejection {
    pub fn new(attributes: BTreeSet<String>) -> Self {
        Self { attributes }
    }

    pub fn single<S: Into<String>>(attribute: S) -> Self {
        Self {
            attributes: BTreeSet::from([attribute.into()]),
        }
    }

    pub fn attributes(&self) -> &BTreeSet<String> {
        &self.attributes
    }

    pub fn describe(&self) -> String {
        exprguard_types::expression_not_allowed(&self.attributes)
    }
}

/// Decision attached to a transformed operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RejectionPolicy {
    /// Never reject.
    #[default]
    Accept,
    /// Reject the operation once it has executed successfully.
    Reject(ExpressionRejection),
}

impl RejectionPolicy {
    /// Whether an operation that produced `prepared_result` must be rejected.
    pub fn reject_operation(&self, _prepared_result: &ModelValue) -> bool {
        matches!(self, RejectionPolicy::Reject(_))
    }

    pub fn failure_description(&self) -> Option<String> {
        match self {
            RejectionPolicy::Accept => None,
            RejectionPolicy::Reject(rejection) => Some(rejection.describe()),
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, RejectionPolicy::Reject(_))
    }

    pub fn rejected_attributes(&self) -> Option<&BTreeSet<String>> {
        match self {
            RejectionPolicy::Accept => None,
            RejectionPolicy::Reject(rejection) => Some(rejection.attributes()),
        }
    }
}

/// Transformation applied to the operation result on its way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultTransform {
    /// Return the original result unchanged.
    #[default]
    Original,
}

impl ResultTransform {
    /// Applied by the pipeline to the consumer's result before handing it back.
    pub fn transform_result(&self, result: ModelValue) -> ModelValue {
        match self {
            ResultTransform::Original => result,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransformedOperation {
    pub operation: Operation,
    pub rejection: RejectionPolicy,
    pub result: ResultTransform,
}

impl TransformedOperation {
    /// Forward `operation` unmodified with the default policy.
    pub fn pass_through(operation: Operation) -> Self {
        Self::new(operation, RejectionPolicy::Accept)
    }

    pub fn new(operation: Operation, rejection: RejectionPolicy) -> Self {
        Self {
            operation,
            rejection,
            result: ResultTransform::Original,
        }
    }
}
