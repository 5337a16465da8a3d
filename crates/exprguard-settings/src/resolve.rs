use crate::model::{ExprguardConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use exprguard_domain::{AttributeDefinition, ModelType, WatchSet};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Extra attribute names to watch (e.g. from the command line).
    pub attributes: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// Validated definitions; their types are accepted for forward compatibility only.
    pub definitions: Vec<AttributeDefinition>,
    pub watched: WatchSet,
}

pub fn resolve_config(
    cfg: ExprguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut definitions = Vec::with_capacity(cfg.definitions.len());
    for (idx, def) in cfg.definitions.iter().enumerate() {
        validate_name(&def.name).with_context(|| format!("invalid definition #{idx}"))?;
        let value_type = match def.value_type.as_deref() {
            Some(ty) => parse_model_type(ty)
                .with_context(|| format!("invalid type for definition {}", def.name))?,
            None => ModelType::String,
        };
        definitions.push(AttributeDefinition::new(def.name.clone(), value_type));
    }

    let mut names = Vec::new();
    for name in cfg.attributes.iter().chain(overrides.attributes.iter()) {
        validate_name(name)?;
        names.push(name.clone());
    }
    names.extend(definitions.iter().map(|d| d.name().to_string()));

    Ok(ResolvedConfig {
        definitions,
        watched: WatchSet::from_names(names),
    })
}

fn validate_name(name: &str) -> anyhow::Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("attribute name must not be empty");
    }
    if name.trim() != name {
        anyhow::bail!("attribute name must not have surrounding whitespace: {name:?}");
    }
    Ok(())
}

fn parse_model_type(v: &str) -> anyhow::Result<ModelType> {
    v.parse::<ModelType>().map_err(|e| {
        anyhow::anyhow!("{e} (expected undefined|boolean|long|double|string|expression|list|object|property)")
    })
}
