//! # Response Envelope Decoding
//!
//! Newer endpoints wrap payloads as `{"status": "success", "data": {...}}`;
//! legacy endpoints return the payload directly. Each endpoint lists the
//! JSON pointers where its payload may live, most specific first
//! (`/data/profile` before `/profile` before the whole body), and
//! [`extract`] takes the first candidate that decodes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{ApiError, Result};

/// Reject success responses whose envelope reports a failure.
pub(crate) fn ensure_success(body: &Value, operation: &'static str) -> Result<()> {
    let Some(status) = body.get("status").and_then(Value::as_str) else {
        return Ok(());
    };
    if status.eq_ignore_ascii_case("success") || status.eq_ignore_ascii_case("ok") {
        return Ok(());
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{operation}: server reported status '{status}'"));
    Err(ApiError::malformed(message))
}

/// Decode the payload at the first matching pointer in `candidates`.
///
/// `""` addresses the whole body. Null or absent candidates are skipped; a
/// candidate that is present but fails to decode falls through to the next.
pub(crate) fn extract<T: DeserializeOwned>(body: &Value, candidates: &[&str], operation: &'static str) -> Result<T> {
    let mut last_error = None;

    for pointer in candidates {
        let Some(value) = body.pointer(pointer).filter(|v| !v.is_null()) else {
            continue;
        };
        match T::deserialize(value) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => last_error = Some(e),
        }
    }

    tracing::error!(operation, candidates = ?candidates, "No known response shape matched");
    let err = ApiError::malformed(format!("{operation}: unexpected response shape"));
    Err(match last_error {
        Some(source) => err.with_source(source),
        None => err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        id: i64,
    }

    const PROFILE: &[&str] = &["/data/profile", "/profile", "/data", ""];

    #[test]
    fn test_nested_shape_wins() {
        let body = json!({"status": "success", "data": {"profile": {"id": 1}}, "profile": {"id": 2}});
        assert_eq!(extract::<Profile>(&body, PROFILE, "test").unwrap(), Profile { id: 1 });
    }

    #[test]
    fn test_legacy_shapes() {
        assert_eq!(extract::<Profile>(&json!({"profile": {"id": 2}}), PROFILE, "test").unwrap().id, 2);
        assert_eq!(extract::<Profile>(&json!({"data": {"id": 3}}), PROFILE, "test").unwrap().id, 3);
        assert_eq!(extract::<Profile>(&json!({"id": 4}), PROFILE, "test").unwrap().id, 4);
    }

    #[test]
    fn test_undecodable_candidate_falls_through() {
        let body = json!({"data": {"profile": "hidden"}, "profile": {"id": 5}});
        assert_eq!(extract::<Profile>(&body, PROFILE, "test").unwrap().id, 5);
    }

    #[test]
    fn test_no_match_is_server_error() {
        let err = extract::<Profile>(&json!({"data": {"name": "x"}}), PROFILE, "test").unwrap_err();
        assert_eq!(err.kind, crate::core::ErrorKind::Server);
        assert!(err.caused_by.is_some());
    }

    #[test]
    fn test_failed_envelope_status() {
        let err = ensure_success(&json!({"status": "error", "message": "Insufficient balance"}), "test").unwrap_err();
        assert_eq!(err.kind, crate::core::ErrorKind::Server);
        assert_eq!(err.user_message(), "Insufficient balance");
        assert!(ensure_success(&json!({"status": "success"}), "test").is_ok());
        assert!(ensure_success(&json!([1, 2]), "test").is_ok());
    }
}
