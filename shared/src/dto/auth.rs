use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::profile::UserProfile;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
///
/// `password_confirmation` follows the backend's form-validation naming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Authentication payload (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: UserProfile,
}

/// Error body returned by the backend on non-2xx responses.
///
/// Both fields are optional because proxies and legacy routes return bare
/// text or `{"error": "..."}` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_accepts_error_alias() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
        assert!(body.errors.is_empty());
    }

    #[test]
    fn test_error_response_field_errors() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"message": "The given data was invalid.", "errors": {"email": ["The email has already been taken."]}}"#,
        )
        .unwrap();
        assert_eq!(body.errors["email"], vec!["The email has already been taken."]);
    }

    #[test]
    fn test_register_request_wire_names() {
        let req = RegisterRequest {
            email: "a@b.co".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password_confirmation"], "secret123");
    }
}
