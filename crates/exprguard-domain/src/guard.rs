use crate::detect::{check_model, contains_expression};
use crate::error::GuardError;
use crate::model::{AttributeDefinition, AttributeLookup, Operation, ResourceModel};
use crate::policy::{ExpressionRejection, RejectionPolicy, TransformedOperation};
use crate::transform::{
    OperationTransformer, PassThroughResourceTransformer, ResourceTransformationContext,
    ResourceTransformer,
};
use crate::watch::WatchSet;
use exprguard_types::ids::{PARAM_NAME, PARAM_VALUE};
use exprguard_types::ResourceAddress;

/// Rejects watched attributes whose values contain unresolved expressions.
///
/// Operations get a deferred [`RejectionPolicy`]; whole resources fail eagerly.
#[derive(Clone, Debug, Default)]
pub struct RejectExpressionValues {
    watched: WatchSet,
}

impl RejectExpressionValues {
    pub fn new(watched: WatchSet) -> Self {
        Self { watched }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(WatchSet::from_names(names))
    }

    pub fn from_definitions<'a, I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = &'a AttributeDefinition>,
    {
        Self::new(WatchSet::from_definitions(definitions))
    }

    pub fn watched(&self) -> &WatchSet {
        &self.watched
    }

    /// Transformer for single-attribute `write-attribute` requests.
    pub fn write_attribute_transformer(&self) -> WriteAttributeTransformer<'_> {
        WriteAttributeTransformer {
            watched: &self.watched,
        }
    }
}

impl OperationTransformer for RejectExpressionValues {
    fn transform_operation(
        &self,
        address: &ResourceAddress,
        operation: Operation,
    ) -> Result<TransformedOperation, GuardError> {
        let attributes = check_model(&self.watched, &operation);
        if attributes.is_empty() {
            return Ok(TransformedOperation::pass_through(operation));
        }

        tracing::info!(
            %address,
            operation = %operation.name,
            ?attributes,
            "operation flagged for rejection"
        );
        let rejection = RejectionPolicy::Reject(ExpressionRejection::new(attributes));
        Ok(TransformedOperation::new(operation, rejection))
    }
}

impl ResourceTransformer for RejectExpressionValues {
    fn transform_resource(
        &self,
        ctx: &mut ResourceTransformationContext,
        address: &ResourceAddress,
        resource: &ResourceModel,
    ) -> Result<(), GuardError> {
        let attributes = check_model(&self.watched, resource);
        if !attributes.is_empty() {
            tracing::info!(%address, ?attributes, "resource rejected");
            return Err(GuardError::ExpressionsNotAllowed {
                address: address.clone(),
                attributes,
            });
        }
        PassThroughResourceTransformer.transform_resource(ctx, address, resource)
    }
}

/// Guard for `write-attribute` requests; borrows the watch set of its parent guard.
#[derive(Clone, Copy, Debug)]
pub struct WriteAttributeTransformer<'a> {
    watched: &'a WatchSet,
}

impl<'a> WriteAttributeTransformer<'a> {
    pub fn new(watched: &'a WatchSet) -> Self {
        Self { watched }
    }
}

impl OperationTransformer for WriteAttributeTransformer<'_> {
    fn transform_operation(
        &self,
        address: &ResourceAddress,
        operation: Operation,
    ) -> Result<TransformedOperation, GuardError> {
        let attribute = operation
            .get_defined(PARAM_NAME)
            .ok_or_else(|| GuardError::MissingParameter {
                address: address.clone(),
                parameter: PARAM_NAME,
            })?
            .as_scalar_string()
            .ok_or_else(|| GuardError::InvalidParameter {
                address: address.clone(),
                parameter: PARAM_NAME,
            })?;

        let rejected = self.watched.contains(&attribute)
            && operation
                .get_defined(PARAM_VALUE)
                .is_some_and(contains_expression);
        if !rejected {
            return Ok(TransformedOperation::pass_through(operation));
        }

        tracing::info!(%address, %attribute, "write-attribute flagged for rejection");
        let rejection = RejectionPolicy::Reject(ExpressionRejection::single(attribute));
        Ok(TransformedOperation::new(operation, rejection))
    }
}
