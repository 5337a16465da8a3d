//! The `check` use case: resolve the watch set, run the guard, produce a report.

use anyhow::Context;
use exprguard_domain::{
    Operation, OperationTransformer, RejectExpressionValues, ResourceModel,
    ResourceTransformationContext, ResourceTransformer, TransformedOperation,
};
use exprguard_settings::{Overrides, ResolvedConfig};
use exprguard_types::{
    ids, GuardMode, GuardReport, ResourceAddress, ToolMeta, Verdict, SCHEMA_GUARD_REPORT_V1,
};
use std::collections::BTreeSet;
use time::OffsetDateTime;

/// What to check, as JSON text.
#[derive(Clone, Debug)]
pub enum CheckTarget<'a> {
    /// A resource snapshot: a JSON object of attribute values.
    Resource {
        snapshot_json: &'a str,
        address: ResourceAddress,
    },
    /// An operation: `{"operation": ..., "address": ..., ...parameters}`.
    Operation { operation_json: &'a str },
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub target: CheckTarget<'a>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: GuardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// The transformed operation, for operation checks.
    pub transformed: Option<TransformedOperation>,
}

/// Run the check use case: parse config, build the guard, evaluate the target.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, the watch set is then empty).
    let cfg = if input.config_text.trim().is_empty() {
        exprguard_settings::ExprguardConfigV1::default()
    } else {
        exprguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = exprguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(watched = resolved.watched.len(), "resolved watch set");

    let guard = RejectExpressionValues::new(resolved.watched.clone());

    let (outcome, transformed) = match input.target {
        CheckTarget::Resource {
            snapshot_json,
            address,
        } => {
            let resource: ResourceModel =
                serde_json::from_str(snapshot_json).context("parse resource snapshot")?;
            (check_resource(&guard, address, &resource)?, None)
        }
        CheckTarget::Operation { operation_json } => {
            let operation: Operation =
                serde_json::from_str(operation_json).context("parse operation")?;
            let (outcome, transformed) = check_operation(&guard, operation)?;
            (outcome, Some(transformed))
        }
    };

    let finished_at = OffsetDateTime::now_utc();
    let failed = !outcome.attributes.is_empty();
    let report = GuardReport {
        schema: SCHEMA_GUARD_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "exprguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        mode: outcome.mode,
        address: outcome.address,
        verdict: if failed { Verdict::Fail } else { Verdict::Pass },
        check_id: failed.then(|| ids::CHECK_GUARD_REJECT_EXPRESSIONS.to_string()),
        code: failed.then(|| ids::CODE_EXPRESSION_NOT_ALLOWED.to_string()),
        message: outcome.message,
        attributes: outcome.attributes.into_iter().collect(),
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
        transformed,
    })
}

/// Exit code for a verdict: 0 on pass, 2 when expressions were found.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

struct Outcome {
    mode: GuardMode,
    address: ResourceAddress,
    attributes: BTreeSet<String>,
    message: Option<String>,
}

fn check_resource(
    guard: &RejectExpressionValues,
    address: ResourceAddress,
    resource: &ResourceModel,
) -> anyhow::Result<Outcome> {
    let mut ctx = ResourceTransformationContext::new();
    match guard.transform_resource(&mut ctx, &address, resource) {
        Ok(()) => Ok(Outcome {
            mode: GuardMode::Resource,
            address,
            attributes: BTreeSet::new(),
            message: None,
        }),
        Err(err) => match err.attributes() {
            Some(attributes) => Ok(Outcome {
                mode: GuardMode::Resource,
                attributes: attributes.clone(),
                message: Some(err.to_string()),
                address,
            }),
            None => Err(err).context("transform resource"),
        },
    }
}

fn check_operation(
    guard: &RejectExpressionValues,
    operation: Operation,
) -> anyhow::Result<(Outcome, TransformedOperation)> {
    let address = operation.address.clone();
    let (mode, transformed) = if operation.is_write_attribute() {
        let transformed = guard
            .write_attribute_transformer()
            .transform_operation(&address, operation)
            .context("transform write-attribute operation")?;
        (GuardMode::WriteAttribute, transformed)
    } else {
        let transformed = guard
            .transform_operation(&address, operation)
            .context("transform operation")?;
        (GuardMode::Operation, transformed)
    };

    let outcome = Outcome {
        mode,
        address,
        attributes: transformed
            .rejection
            .rejected_attributes()
            .cloned()
            .unwrap_or_default(),
        message: transformed.rejection.failure_description(),
    };
    Ok((outcome, transformed))
}
