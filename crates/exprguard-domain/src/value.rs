use exprguard_types::ids::{JSON_EXPRESSION_KEY, JSON_PROPERTY_KEY};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// A configuration value: one attribute's value or a nested sub-value.
///
/// The JSON form is the natural one, plus two reserved single-key objects:
/// `{"EXPRESSION_VALUE": "..."}` and `{"PROPERTY_VALUE": {"name": value}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum ModelValue {
    #[default]
    Undefined,
    Boolean(bool),
    Long(i64),
    Double(f64),
    String(String),
    Expression(String),
    List(Vec<ModelValue>),
    /// Ordered key/value group.
    Object(Vec<(String, ModelValue)>),
    /// A single key/value pair.
    Property(String, Box<ModelValue>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Undefined,
    Boolean,
    Long,
    Double,
    String,
    Expression,
    List,
    Object,
    Property,
}

impl ModelType {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Undefined => "undefined",
            ModelType::Boolean => "boolean",
            ModelType::Long => "long",
            ModelType::Double => "double",
            ModelType::String => "string",
            ModelType::Expression => "expression",
            ModelType::List => "list",
            ModelType::Object => "object",
            ModelType::Property => "property",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(ModelType::Undefined),
            "boolean" | "bool" => Ok(ModelType::Boolean),
            "long" | "int" => Ok(ModelType::Long),
            "double" => Ok(ModelType::Double),
            "string" => Ok(ModelType::String),
            "expression" => Ok(ModelType::Expression),
            "list" => Ok(ModelType::List),
            "object" => Ok(ModelType::Object),
            "property" => Ok(ModelType::Property),
            other => Err(format!("unknown model type: {other}")),
        }
    }
}

impl ModelValue {
    pub fn string<S: Into<String>>(s: S) -> Self {
        ModelValue::String(s.into())
    }

    pub fn expression<S: Into<String>>(s: S) -> Self {
        ModelValue::Expression(s.into())
    }

    pub fn list<I: IntoIterator<Item = ModelValue>>(items: I) -> Self {
        ModelValue::List(items.into_iter().collect())
    }

    pub fn object<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, ModelValue)>,
        K: Into<String>,
    {
        ModelValue::Object(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn property<K: Into<String>>(name: K, value: ModelValue) -> Self {
        ModelValue::Property(name.into(), Box::new(value))
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, ModelValue::Undefined)
    }

    pub fn model_type(&self) -> ModelType {
        match self {
            ModelValue::Undefined => ModelType::Undefined,
            ModelValue::Boolean(_) => ModelType::Boolean,
            ModelValue::Long(_) => ModelType::Long,
            ModelValue::Double(_) => ModelType::Double,
            ModelValue::String(_) => ModelType::String,
            ModelValue::Expression(_) => ModelType::Expression,
            ModelValue::List(_) => ModelType::List,
            ModelValue::Object(_) => ModelType::Object,
            ModelValue::Property(_, _) => ModelType::Property,
        }
    }

    /// Text of a scalar value; `None` for undefined and structured values.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            ModelValue::Boolean(b) => Some(b.to_string()),
            ModelValue::Long(n) => Some(n.to_string()),
            ModelValue::Double(d) => Some(d.to_string()),
            ModelValue::String(s) | ModelValue::Expression(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// First member with the given key, when this is an object.
    pub fn get(&self, key: &str) -> Option<&ModelValue> {
        match self {
            ModelValue::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        ModelValue::String(value.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        ModelValue::String(value)
    }
}

impl From<bool> for ModelValue {
    fn from(value: bool) -> Self {
        ModelValue::Boolean(value)
    }
}

impl From<i64> for ModelValue {
    fn from(value: i64) -> Self {
        ModelValue::Long(value)
    }
}

impl From<JsonValue> for ModelValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ModelValue::Undefined,
            JsonValue::Bool(b) => ModelValue::Boolean(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => ModelValue::Long(i),
                None => ModelValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => ModelValue::String(s),
            JsonValue::Array(items) => {
                ModelValue::List(items.into_iter().map(ModelValue::from).collect())
            }
            JsonValue::Object(map) => object_from_json(map),
        }
    }
}

fn object_from_json(map: Map<String, JsonValue>) -> ModelValue {
    if map.len() == 1 {
        if let Some(JsonValue::String(expr)) = map.get(JSON_EXPRESSION_KEY) {
            return ModelValue::Expression(expr.clone());
        }
        if let Some(JsonValue::Object(prop)) = map.get(JSON_PROPERTY_KEY)
            && prop.len() == 1
            && let Some((name, value)) = prop.iter().next()
        {
            return ModelValue::property(name.clone(), ModelValue::from(value.clone()));
        }
    }
    ModelValue::Object(
        map.into_iter()
            .map(|(k, v)| (k, ModelValue::from(v)))
            .collect(),
    )
}

impl From<ModelValue> for JsonValue {
    fn from(value: ModelValue) -> Self {
        match value {
            ModelValue::Undefined => JsonValue::Null,
            ModelValue::Boolean(b) => JsonValue::Bool(b),
            ModelValue::Long(n) => JsonValue::Number(n.into()),
            ModelValue::Double(d) => Number::from_f64(d)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ModelValue::String(s) => JsonValue::String(s),
            ModelValue::Expression(s) => {
                let mut map = Map::new();
                map.insert(JSON_EXPRESSION_KEY.to_string(), JsonValue::String(s));
                JsonValue::Object(map)
            }
            ModelValue::List(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            ModelValue::Object(members) => JsonValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
            ModelValue::Property(name, value) => {
                let mut prop = Map::new();
                prop.insert(name, JsonValue::from(*value));
                let mut map = Map::new();
                map.insert(JSON_PROPERTY_KEY.to_string(), JsonValue::Object(prop));
                JsonValue::Object(map)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_scalars_map_to_model_kinds() {
        assert_eq!(ModelValue::from(json!(null)), ModelValue::Undefined);
        assert_eq!(ModelValue::from(json!(true)), ModelValue::Boolean(true));
        assert_eq!(ModelValue::from(json!(42)), ModelValue::Long(42));
        assert_eq!(ModelValue::from(json!(1.5)), ModelValue::Double(1.5));
        assert_eq!(ModelValue::from(json!("x")), ModelValue::string("x"));
    }

    #[test]
    fn reserved_keys_decode_expression_and_property() {
        assert_eq!(
            ModelValue::from(json!({"EXPRESSION_VALUE": "${a}"})),
            ModelValue::expression("${a}")
        );
        assert_eq!(
            ModelValue::from(json!({"PROPERTY_VALUE": {"k": "${v}"}})),
            ModelValue::property("k", ModelValue::string("${v}"))
        );
    }

    #[test]
    fn reserved_key_with_extra_members_stays_an_object() {
        let value = ModelValue::from(json!({"EXPRESSION_VALUE": "${a}", "other": 1}));
        assert_eq!(value.model_type(), ModelType::Object);
        assert_eq!(value.get("other"), Some(&ModelValue::Long(1)));
    }

    #[test]
    fn object_member_order_is_preserved() {
        let value: ModelValue = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let ModelValue::Object(members) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = members.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn serializes_expression_and_property_with_reserved_keys() {
        let value = ModelValue::list([
            ModelValue::expression("${x}"),
            ModelValue::property("p", ModelValue::Long(1)),
        ]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            json!([{"EXPRESSION_VALUE": "${x}"}, {"PROPERTY_VALUE": {"p": 1}}])
        );
        let back: ModelValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn scalar_string_covers_scalars_only() {
        assert_eq!(
            ModelValue::string("enabled").as_scalar_string().as_deref(),
            Some("enabled")
        );
        assert_eq!(ModelValue::Long(7).as_scalar_string().as_deref(), Some("7"));
        assert_eq!(ModelValue::Undefined.as_scalar_string(), None);
        assert_eq!(ModelValue::list([]).as_scalar_string(), None);
    }

    #[test]
    fn model_type_names_round_trip_through_from_str() {
        for ty in [
            ModelType::Undefined,
            ModelType::Boolean,
            ModelType::Long,
            ModelType::Double,
            ModelType::String,
            ModelType::Expression,
            ModelType::List,
            ModelType::Object,
            ModelType::Property,
        ] {
            assert_eq!(ty.as_str().parse::<ModelType>(), Ok(ty));
        }
        assert!("map".parse::<ModelType>().is_err());
    }
}
