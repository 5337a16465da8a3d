//! Seams between the guard and the surrounding transformation pipeline.

use crate::error::GuardError;
use crate::model::{Operation, ResourceModel};
use crate::policy::TransformedOperation;
use exprguard_types::ResourceAddress;

/// Transforms a change request before it is sent to a consumer.
pub trait OperationTransformer {
    fn transform_operation(
        &self,
        address: &ResourceAddress,
        operation: Operation,
    ) -> Result<TransformedOperation, GuardError>;
}

/// Transforms a resource snapshot before it is sent to a consumer.
pub trait ResourceTransformer {
    fn transform_resource(
        &self,
        ctx: &mut ResourceTransformationContext,
        address: &ResourceAddress,
        resource: &ResourceModel,
    ) -> Result<(), GuardError>;
}

/// Collects the resources accepted for the consumer, in processing order.
#[derive(Clone, Debug, Default)]
pub struct ResourceTransformationContext {
    accepted: Vec<(ResourceAddress, ResourceModel)>,
}

impl ResourceTransformationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transformed_resource(&mut self, address: ResourceAddress, resource: ResourceModel) {
        self.accepted.push((address, resource));
    }

    pub fn accepted(&self) -> &[(ResourceAddress, ResourceModel)] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<(ResourceAddress, ResourceModel)> {
        self.accepted
    }
}

/// Default resource handling: forward the snapshot unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughResourceTransformer;

impl ResourceTransformer for PassThroughResourceTransformer {
    fn transform_resource(
        &self,
        ctx: &mut ResourceTransformationContext,
        address: &ResourceAddress,
        resource: &ResourceModel,
    ) -> Result<(), GuardError> {
        ctx.add_transformed_resource(address.clone(), resource.clone());
        Ok(())
    }
}

/// Default operation handling: forward the operation unchanged.
///
/// For pipelines that register a transformer for every operation and need one
/// for operations no guard cares about.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughOperationTransformer;

impl OperationTransformer for PassThroughOperationTransformer {
    fn transform_operation(
        &self,
        _address: &ResourceAddress,
        operation: Operation,
    ) -> Result<TransformedOperation, GuardError> {
        Ok(TransformedOperation::pass_through(operation))
    }
}
