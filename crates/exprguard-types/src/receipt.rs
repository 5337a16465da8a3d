use crate::ResourceAddress;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for guard reports.
pub const SCHEMA_GUARD_REPORT_V1: &str = "exprguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Which guard path produced the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuardMode {
    Resource,
    Operation,
    WriteAttribute,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub mode: GuardMode,
    pub address: ResourceAddress,
    pub verdict: Verdict,

    /// Attributes found holding expressions (sorted, unique).
    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn failing_report_serializes_stable_fields() {
        let report = GuardReport {
            schema: SCHEMA_GUARD_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "exprguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2024-01-01 0:00 UTC),
            finished_at: datetime!(2024-01-01 0:00 UTC),
            mode: GuardMode::WriteAttribute,
            address: ResourceAddress::root().append("subsystem", "ee"),
            verdict: Verdict::Fail,
            attributes: vec!["enabled".to_string()],
            check_id: Some(crate::ids::CHECK_GUARD_REJECT_EXPRESSIONS.to_string()),
            code: Some(crate::ids::CODE_EXPRESSION_NOT_ALLOWED.to_string()),
            message: Some("boom".to_string()),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "write-attribute");
        assert_eq!(json["verdict"], "fail");
        assert_eq!(json["address"], "/subsystem=ee");
        assert_eq!(json["started_at"], "2024-01-01T00:00:00Z");

        let back: GuardReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn passing_report_omits_failure_fields() {
        let report = GuardReport {
            schema: SCHEMA_GUARD_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "exprguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2024-01-01 0:00 UTC),
            finished_at: datetime!(2024-01-01 0:00 UTC),
            mode: GuardMode::Resource,
            address: ResourceAddress::root(),
            verdict: Verdict::Pass,
            attributes: Vec::new(),
            check_id: None,
            code: None,
            message: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("message").is_none());
        assert!(json.get("code").is_none());
    }
}
