// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SERVICE_NAME: &str = "ml-chat-handler";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Any JSON value; only strings get a rule-based reply.
    pub message: Value,
    /// Opaque, echoed back as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl ChatRequest {
    /// Pull the fields out of a decoded body. `None` unless the body is a
    /// non-empty object carrying a `message` key.
    pub fn from_body(body: Value) -> Option<Self> {
        let Value::Object(mut fields) = body else {
            return None;
        };
        let message = fields.remove("message")?;
        let timestamp = fields.remove("timestamp");
        Some(Self { message, timestamp })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: Value,
    pub status: String,
}

impl ChatResponse {
    pub fn success(response: String, timestamp: Option<Value>) -> Self {
        Self {
            response,
            timestamp: timestamp.unwrap_or_else(|| Value::String(String::new())),
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl ServiceStatus {
    pub fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// There is never a loaded model; replies come from keyword rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
    pub model_type: String,
    pub status: String,
}

impl ModelStatus {
    pub fn current() -> Self {
        Self {
            model_loaded: false,
            model_type: "rule-based".to_string(),
            status: "ready".to_string(),
        }
    }
}
