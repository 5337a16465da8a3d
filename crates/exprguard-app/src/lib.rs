//! Use case orchestration for exprguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings and domain
//! layers and turn guard outcomes into reports. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput, CheckTarget};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{format_summary, serialize_report};
