//! Module for responses returned from the EstateTrust API.

use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize)]
struct InnerValidationError {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InnerDetail {
    Message(String),
    Validation(Vec<InnerValidationError>),
}

#[derive(Deserialize)]
struct InnerError {
    detail: Option<InnerDetail>,
    message: Option<String>,
}

/// A field-level error reported by the server's request validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `body.email`.
    pub location: String,
    pub message: String,
}

impl From<InnerValidationError> for ValidationError {
    fn from(value: InnerValidationError) -> Self {
        let location = value
            .loc
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        Self {
            location,
            message: value.msg,
        }
    }
}

/// An error returned from the EstateTrust API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status {status})")]
pub struct Error {
    status: u16,
    message: String,
    validation_errors: Vec<ValidationError>,
}

impl Error {
    /// Creates a new [`Error`] with a plain message.
    pub fn new<S: Into<String>>(status: u16, message: S) -> Self {
        Self {
            status,
            message: message.into(),
            validation_errors: Vec::new(),
        }
    }

    /// Builds the error from a non-success response.
    ///
    /// The `detail` field is used when present, then `message`. Bodies that carry neither
    /// are described by their status code.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let fallback = || format!("Request failed with status code {}", status);
        let inner = match serde_json::from_slice::<InnerError>(body) {
            Ok(v) => v,
            Err(_) => return Self::new(status, fallback()),
        };
        match (inner.detail, inner.message) {
            (Some(InnerDetail::Message(message)), _) if !message.is_empty() => {
                Self::new(status, message)
            }
            (Some(InnerDetail::Validation(errors)), _) if !errors.is_empty() => {
                let validation_errors = errors
                    .into_iter()
                    .map(ValidationError::from)
                    .collect::<Vec<_>>();
                let message = validation_errors
                    .iter()
                    .map(|v| format!("{}: {}", v.location, v.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                Self {
                    status,
                    message,
                    validation_errors,
                }
            }
            (_, Some(message)) if !message.is_empty() => Self::new(status, message),
            _ => Self::new(status, fallback()),
        }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the message sent by the server.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }
}

/// Response of the create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct CreateResponse {
    /// Identifier of the created resource, when the server reports it.
    pub uuid_pk: Option<String>,
    pub message: Option<String>,
}

/// Response of endpoints that only acknowledge the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string() {
        let error = Error::from_body(401, br#"{"detail":"Invalid credentials"}"#);
        assert_eq!(error.status(), 401);
        assert_eq!(error.message(), "Invalid credentials");
    }

    #[test]
    fn detail_validation_list() {
        let body = br#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error.email"}]}"#;
        let error = Error::from_body(422, body);
        assert_eq!(error.validation_errors().len(), 1);
        assert_eq!(error.validation_errors()[0].location, "body.email");
        assert_eq!(
            error.message(),
            "body.email: value is not a valid email address"
        );
    }

    #[test]
    fn non_json_body() {
        let error = Error::from_body(502, b"<html>Bad gateway</html>");
        assert_eq!(error.message(), "Request failed with status code 502");
    }
}
