//! Core data types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Static description of one industrial machine's identity, status, metrics
/// and fault list. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub id: String,
    pub status: MachineStatus,
    /// Metric name to current value, e.g. `mold_temp_c` -> 198.4
    pub metrics: BTreeMap<String, f64>,
    pub faults: Vec<FaultEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    Operational,
    Warning,
    Critical,
}

/// Code/label pair describing one detected fault condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultEntry {
    pub code: String,
    pub label: String,
}

/// Question submitted to the ask-ai endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    /// Validate the inbound JSON body explicitly before constructing the
    /// request: `question` must be present and must be a string.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value.get("question") {
            Some(serde_json::Value::String(question)) => Ok(Self {
                question: question.clone(),
            }),
            Some(other) => Err(Error::invalid_field(
                "question",
                format!("expected a string, got {}", json_type_name(other)),
            )),
            None => Err(Error::invalid_field("question", "missing required field")),
        }
    }
}

/// Answer returned by the ask-ai endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ask_request_accepts_string_question() {
        let request = AskRequest::from_value(&json!({ "question": "Why?" })).unwrap();
        assert_eq!(request.question, "Why?");
    }

    #[test]
    fn ask_request_rejects_missing_question() {
        let err = AskRequest::from_value(&json!({})).unwrap_err();
        match err {
            Error::InvalidField { field, .. } => assert_eq!(field, "question"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ask_request_rejects_non_string_question() {
        let err = AskRequest::from_value(&json!({ "question": 42 })).unwrap_err();
        match err {
            Error::InvalidField { field, reason } => {
                assert_eq!(field, "question");
                assert!(reason.contains("a number"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn machine_status_serializes_lowercase() {
        let value = serde_json::to_value(MachineStatus::Operational).unwrap();
        assert_eq!(value, json!("operational"));
    }
}
