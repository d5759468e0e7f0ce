use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object-created notification as delivered by the storage service.
///
/// Records are kept as raw JSON so that one malformed record does not fail
/// deserialization of the whole event; each record is parsed on its own when
/// the pipeline reaches it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawEvent")]
pub struct NotificationEvent {
    #[serde(rename = "Records")]
    pub records: Vec<Value>,
    /// Why the event itself could not be read as a list of records.
    #[serde(skip_serializing)]
    pub rejected: Option<String>,
}

/// Wire shape before `Records` is checked.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "Records", default)]
    records: Value,
}

impl From<RawEvent> for NotificationEvent {
    fn from(raw: RawEvent) -> Self {
        match raw.records {
            Value::Null => Self::default(),
            Value::Array(records) => Self {
                records,
                rejected: None,
            },
            other => Self {
                records: Vec::new(),
                rejected: Some(format!(
                    "invalid notification event: Records must be a list, found {}",
                    json_kind(&other)
                )),
            },
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// The part of a notification record the resizer cares about:
/// `{"s3": {"object": {"key": "..."}}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl NotificationEvent {
    /// Event naming a single object, as the local smoke test sends it.
    pub fn for_key(key: &str) -> Self {
        Self {
            records: vec![serde_json::json!({ "s3": { "object": { "key": key } } })],
            rejected: None,
        }
    }

    /// Read an invocation payload of any shape. Never fails: a payload that is
    /// not a notification becomes an event with no records and a `rejected`
    /// reason.
    pub fn from_payload(payload: Value) -> Self {
        serde_json::from_value(payload).unwrap_or_else(|e| Self {
            records: Vec::new(),
            rejected: Some(format!("invalid notification event: {}", e)),
        })
    }
}

impl NotificationRecord {
    /// Parse one raw record and return its object key.
    ///
    /// Fails when the `s3.object.key` path is missing, is not a string, or is empty.
    pub fn key_from_value(raw: &Value) -> Result<String, String> {
        let record: NotificationRecord = serde_json::from_value(raw.clone())
            .map_err(|e| format!("invalid notification record: {}", e))?;

        if record.s3.object.key.is_empty() {
            return Err("invalid notification record: empty object key".to_string());
        }

        Ok(record.s3.object.key)
    }
}
