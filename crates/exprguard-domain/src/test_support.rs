use crate::guard::RejectExpressionValues;
use crate::model::{Operation, ResourceModel};
use crate::value::ModelValue;
use exprguard_types::ResourceAddress;

pub fn address() -> ResourceAddress {
    ResourceAddress::root()
        .append("subsystem", "datasources")
        .append("data-source", "ExampleDS")
}

pub fn guard(names: &[&str]) -> RejectExpressionValues {
    RejectExpressionValues::from_names(names.iter().copied())
}

pub fn resource(attrs: Vec<(&str, ModelValue)>) -> ResourceModel {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

pub fn add_operation(params: Vec<(&str, ModelValue)>) -> Operation {
    params
        .into_iter()
        .fold(Operation::new("add", address()), |op, (k, v)| {
            op.with_param(k, v)
        })
}

pub fn write_attribute(name: &str, value: ModelValue) -> Operation {
    Operation::write_attribute(address(), name, value)
}

pub fn text(s: &str) -> ModelValue {
    ModelValue::string(s)
}
