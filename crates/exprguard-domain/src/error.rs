use exprguard_types::ResourceAddress;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Eager failure naming every attribute that holds an expression.
    #[error("{address}: {}", exprguard_types::expression_not_allowed(.attributes))]
    ExpressionsNotAllowed {
        address: ResourceAddress,
        attributes: BTreeSet<String>,
    },

    #[error("{address}: required parameter '{parameter}' is missing or undefined")]
    MissingParameter {
        address: ResourceAddress,
        parameter: &'static str,
    },

    #[error("{address}: parameter '{parameter}' must be a scalar value")]
    InvalidParameter {
        address: ResourceAddress,
        parameter: &'static str,
    },
}

impl GuardError {
    /// Offending attributes, for errors raised by expression detection.
    pub fn attributes(&self) -> Option<&BTreeSet<String>> {
        match self {
            GuardError::ExpressionsNotAllowed { attributes, .. } => Some(attributes),
            _ => None,
        }
    }
}
