/// Usage payload decoding.
///
/// A payload is a JSON object embedded as a string inside a record. Nothing
/// about its schema is trusted: it is decoded into a loose map and every
/// field is checked for presence and numeric type on read.
use serde_json::{Map, Value};

/// A decoded payload object.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePayload {
    fields: Map<String, Value>,
}

impl UsagePayload {
    /// Decode a payload string. Fails if the string is not JSON or the JSON
    /// is not an object.
    pub fn decode(raw: &str) -> Result<Self, PayloadDecodeError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(other) => Err(PayloadDecodeError::NotAnObject {
                found: json_kind(&other),
            }),
            Err(e) => Err(PayloadDecodeError::Malformed { source: e }),
        }
    }

    pub fn tokens_in(&self) -> Option<f64> {
        self.number("tokensIn")
    }

    pub fn tokens_out(&self) -> Option<f64> {
        self.number("tokensOut")
    }

    pub fn cache_writes(&self) -> Option<f64> {
        self.number("cacheWrites")
    }

    pub fn cache_reads(&self) -> Option<f64> {
        self.number("cacheReads")
    }

    pub fn cost(&self) -> Option<f64> {
        self.number("cost")
    }

    pub fn latency_ms(&self) -> Option<f64> {
        self.number("latencyMs")
    }

    pub fn ttft_ms(&self) -> Option<f64> {
        self.number("ttftMs")
    }

    /// Any JSON number. Strings, booleans and nulls read as absent.
    fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a payload string could not be used.
#[derive(Debug)]
pub enum PayloadDecodeError {
    Malformed { source: serde_json::Error },
    NotAnObject { found: &'static str },
}

impl std::fmt::Display for PayloadDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadDecodeError::Malformed { source } => {
                write!(f, "payload is not valid JSON: {source}")
            }
            PayloadDecodeError::NotAnObject { found } => {
                write!(f, "payload is a JSON {found}, expected an object")
            }
        }
    }
}

impl std::error::Error for PayloadDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadDecodeError::Malformed { source } => Some(source),
            PayloadDecodeError::NotAnObject { .. } => None,
        }
    }
}
