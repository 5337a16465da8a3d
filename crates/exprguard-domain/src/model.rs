use crate::value::{ModelType, ModelValue};
use exprguard_types::ids::{PARAM_NAME, PARAM_VALUE, WRITE_ATTRIBUTE_OPERATION};
use exprguard_types::ResourceAddress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lookup of attribute values by name, skipping undefined values.
pub trait AttributeLookup {
    /// The value of `name` if present and defined.
    fn get_defined(&self, name: &str) -> Option<&ModelValue>;

    fn has_defined(&self, name: &str) -> bool {
        self.get_defined(name).is_some()
    }
}

/// Point-in-time view of one resource's attribute values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceModel {
    pub attributes: BTreeMap<String, ModelValue>,
}

impl ResourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>>(mut self, name: K, value: ModelValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

impl FromIterator<(String, ModelValue)> for ResourceModel {
    fn from_iter<T: IntoIterator<Item = (String, ModelValue)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl AttributeLookup for ResourceModel {
    fn get_defined(&self, name: &str) -> Option<&ModelValue> {
        self.attributes.get(name).filter(|v| v.is_defined())
    }
}

impl AttributeLookup for BTreeMap<String, ModelValue> {
    fn get_defined(&self, name: &str) -> Option<&ModelValue> {
        self.get(name).filter(|v| v.is_defined())
    }
}

/// Lets a pipeline check a raw object node (e.g. an operation body) without a wrapper.
impl AttributeLookup for ModelValue {
    fn get_defined(&self, name: &str) -> Option<&ModelValue> {
        self.get(name).filter(|v| v.is_defined())
    }
}

/// A proposed change request against one resource.
///
/// JSON form: `{"operation": "<name>", "address": "/a=b", ...parameters}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operation")]
    pub name: String,

    #[serde(default)]
    pub address: ResourceAddress,

    #[serde(flatten)]
    pub parameters: BTreeMap<String, ModelValue>,
}

impl Operation {
    pub fn new<S: Into<String>>(name: S, address: ResourceAddress) -> Self {
        Self {
            name: name.into(),
            address,
            parameters: BTreeMap::new(),
        }
    }

    /// A `write-attribute` request setting `attribute` to `value`.
    pub fn write_attribute(address: ResourceAddress, attribute: &str, value: ModelValue) -> Self {
        Self::new(WRITE_ATTRIBUTE_OPERATION, address)
            .with_param(PARAM_NAME, ModelValue::string(attribute))
            .with_param(PARAM_VALUE, value)
    }

    pub fn with_param<K: Into<String>>(mut self, name: K, value: ModelValue) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn is_write_attribute(&self) -> bool {
        self.name == WRITE_ATTRIBUTE_OPERATION
    }
}

impl AttributeLookup for Operation {
    fn get_defined(&self, name: &str) -> Option<&ModelValue> {
        self.parameters.get_defined(name)
    }
}

/// Descriptor of a configurable attribute.
///
/// Only `name` feeds the watch set. `value_type` is validated and carried for
/// callers that describe their attributes; detection never reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub name: String,
    pub value_type: ModelType,
}

impl AttributeDefinition {
    pub fn new<S: Into<String>>(name: S, value_type: ModelType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
