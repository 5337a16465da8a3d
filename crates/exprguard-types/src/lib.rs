//! Stable DTOs and IDs used across the exprguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted guard report
//! - stable string IDs and codes
//! - canonical resource address handling
//! - failure messages and the explain registry

#![forbid(unsafe_code)]

pub mod address;
pub mod explain;
pub mod ids;
pub mod message;
pub mod receipt;

pub use address::{AddressParseError, ResourceAddress};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use message::expression_not_allowed;
pub use receipt::{GuardMode, GuardReport, ToolMeta, Verdict, SCHEMA_GUARD_REPORT_V1};
