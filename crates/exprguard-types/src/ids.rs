//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_GUARD_REJECT_EXPRESSIONS: &str = "guard.reject_expressions";

// Codes: guard.reject_expressions
pub const CODE_EXPRESSION_NOT_ALLOWED: &str = "expression_not_allowed";

// Well-known operation names and parameters.
pub const WRITE_ATTRIBUTE_OPERATION: &str = "write-attribute";
pub const PARAM_NAME: &str = "name";
pub const PARAM_VALUE: &str = "value";

// Reserved keys in the JSON form of model values.
pub const JSON_EXPRESSION_KEY: &str = "EXPRESSION_VALUE";
pub const JSON_PROPERTY_KEY: &str = "PROPERTY_VALUE";
