//! Pure expression-rejection guard (no IO).
//!
//! Input: a resource snapshot or an operation constructed elsewhere.
//! Output: a deferred rejection policy (operations) or an eager error (resources).

#![forbid(unsafe_code)]

pub mod detect;
pub mod error;
pub mod model;
pub mod policy;
pub mod transform;
pub mod value;
pub mod watch;

mod guard;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use detect::{check_model, contains_expression, is_expression_string};
pub use error::GuardError;
pub use guard::{RejectExpressionValues, WriteAttributeTransformer};
pub use model::{AttributeDefinition, AttributeLookup, Operation, ResourceModel};
pub use policy::{ExpressionRejection, RejectionPolicy, ResultTransform, TransformedOperation};
pub use transform::{
    OperationTransformer, PassThroughOperationTransformer, PassThroughResourceTransformer,
    ResourceTransformationContext, ResourceTransformer,
};
pub use value::{ModelType, ModelValue};
pub use watch::WatchSet;
