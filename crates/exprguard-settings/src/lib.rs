//! Config parsing and watch-set resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AttributeDefinitionConfig, ExprguardConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `exprguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ExprguardConfigV1> {
    let cfg: ExprguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective watch set (config attributes + definitions + overrides).
pub fn resolve_config(
    cfg: ExprguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file, pretty-printed.
pub fn config_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ExprguardConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}
