use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "exprguard.config.v1";

/// `exprguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExprguardConfigV1 {
    /// Optional schema string for tooling (`exprguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Attribute names that must never hold unresolved expressions.
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Attribute definitions; every definition's name is watched.
    #[serde(default)]
    pub definitions: Vec<AttributeDefinitionConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeDefinitionConfig {
    pub name: String,

    /// Value type: `string`, `boolean`, `long`, `double`, `list`, `object`, ...
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}
