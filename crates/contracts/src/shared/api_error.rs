use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level validation reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub field: String,
    pub detail: String,
}

/// Error body returned by the API, also used for transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub validations: Vec<FieldValidation>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            validations: Vec::new(),
        }
    }

    /// Request never produced a decodable API response.
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            message: "Unable to reach the server".to_string(),
            detail: Some(detail.into()),
            validations: Vec::new(),
        }
    }

    pub fn with_validation(mut self, field: impl Into<String>, detail: impl Into<String>) -> Self {
        self.validations.push(FieldValidation {
            field: field.into(),
            detail: detail.into(),
        });
        self
    }

    /// Server-side message for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.validations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.detail.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_validations() {
        let body = r#"{
            "message": "Validation failed.",
            "validations": [{"field": "name", "detail": "Workspace name already exists."}]
        }"#;
        let error: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(error.to_string(), "Validation failed.");
        assert_eq!(error.field_error("name"), Some("Workspace name already exists."));
        assert_eq!(error.field_error("region"), None);
        assert_eq!(error.detail, None);
    }

    #[test]
    fn test_network_error_keeps_detail() {
        let error = ApiError::network("HTTP 502");
        assert_eq!(error.detail.as_deref(), Some("HTTP 502"));
        assert!(error.validations.is_empty());
    }
}
