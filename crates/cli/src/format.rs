//! JSON response formatting.
//!
//! Successful output is the pretty-printed JSON value. Failures use the
//! same body an HTTP front end would send:
//! `{"error": "<status text>", "message": "<detail>"}`.

use horizondb::{status_text, Error};
use serde::Serialize;
use serde_json::json;

/// Pretty-print any serializable response body.
pub fn format_output<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format_failure(500, &format!("cannot encode response: {}", e)))
}

/// Error body for a catalog error.
pub fn format_error(err: &Error) -> String {
    format_failure(err.status_code(), &err.to_string())
}

/// Error body for an arbitrary status code.
pub fn format_failure(status_code: u16, message: &str) -> String {
    json!({
        "error": status_text(status_code),
        "message": message,
    })
    .to_string()
}
