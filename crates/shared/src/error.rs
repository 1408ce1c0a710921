use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the address store on a failure status.
///
/// Stores disagree on where the readable text lives, so each candidate key is
/// kept separately; `message` wins over `error`, which wins over `erro`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
            ..Self::default()
        }
    }

    /// First non-blank string among `message`, `error`, `erro`.
    pub fn readable_message(&self) -> Option<String> {
        [&self.message, &self.error, &self.erro]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
                _ => None,
            })
    }

    /// Best-effort extraction of a human-readable message from a raw response body.
    ///
    /// JSON bodies yield their readable message field; anything else that is
    /// non-blank is used verbatim.
    pub fn message_from_body(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(parsed) = serde_json::from_str::<ApiError>(trimmed) {
            return parsed.readable_message();
        }
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return None;
        }
        Some(trimmed.to_string())
    }
}
