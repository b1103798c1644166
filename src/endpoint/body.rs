//! Response body normalization
//!
//! Turns the declarative body of an endpoint definition into the bytes served
//! for every request. Runs once, when the endpoint is built.

use crate::config::RawBody;
use crate::logger::Log;
use hyper::body::Bytes;

/// Content type that switches the raw body to JSON passthrough
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Compute the cached response body
///
/// 1. A raw body is re-encoded as compact JSON when `content_type` is
///    `application/json`; otherwise it must be a JSON string literal whose
///    decoded text becomes the body.
/// 2. A non-empty `string_body` replaces whatever step 1 produced.
///
/// Failures are logged and leave the body unset; nothing is returned as error.
pub fn build_body(
    response_body: Option<&RawBody>,
    string_body: &str,
    content_type: &str,
    log: &dyn Log,
) -> Option<Bytes> {
    let mut body = None;

    if let Some(raw) = response_body {
        if content_type == JSON_CONTENT_TYPE {
            body = json_body(raw, log);
        } else {
            match serde_json::from_str::<String>(raw.get()) {
                Ok(text) => body = Some(assign(Bytes::from(text), log)),
                Err(e) => log.printf(format_args!("Response body is not a JSON string: {e}")),
            }
        }
    }

    if !string_body.is_empty() {
        body = Some(assign(Bytes::copy_from_slice(string_body.as_bytes()), log));
    }

    body
}

fn json_body(raw: &RawBody, log: &dyn Log) -> Option<Bytes> {
    let encoded = serde_json::from_str::<serde_json::Value>(raw.get())
        .and_then(|value| serde_json::to_vec(&value));

    match encoded {
        Ok(bytes) => Some(assign(Bytes::from(bytes), log)),
        Err(e) => {
            log.error(&e, "Marshal Json");
            None
        }
    }
}

fn assign(body: Bytes, log: &dyn Log) -> Bytes {
    log.printf(format_args!(
        "Setting Reply Body of {}",
        String::from_utf8_lossy(&body)
    ));
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::memory::MemoryLog;

    fn build(raw: Option<&str>, string_body: &str, content_type: &str) -> Option<Bytes> {
        let log = MemoryLog::default();
        let raw = raw.map(RawBody::new);
        build_body(raw.as_ref(), string_body, content_type, &log)
    }

    #[test]
    fn test_json_content_type_reencodes_compactly() {
        let body = build(Some(r#"{ "a" : 1 }"#), "", JSON_CONTENT_TYPE);
        assert_eq!(body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn test_json_content_type_keeps_key_order() {
        let body = build(Some(r#"{"z":1,"a":[true,null]}"#), "", JSON_CONTENT_TYPE);
        assert_eq!(body.as_deref(), Some(br#"{"z":1,"a":[true,null]}"#.as_slice()));
    }

    #[test]
    fn test_json_content_type_string_literal_stays_quoted() {
        let body = build(Some(r#""hello""#), "", JSON_CONTENT_TYPE);
        assert_eq!(body.as_deref(), Some(br#""hello""#.as_slice()));
    }

    #[test]
    fn test_json_content_type_keeps_numbers_as_written() {
        let raw = r#"{"big":12345678901234567890123,"f":1e2,"neg":-0.5E-3}"#;
        let body = build(Some(raw), "", JSON_CONTENT_TYPE);
        assert_eq!(body.as_deref(), Some(raw.as_bytes()));
    }

    #[test]
    fn test_plain_content_type_decodes_string_literal() {
        let body = build(Some(r#""hello""#), "", "text/plain");
        assert_eq!(body.as_deref(), Some(b"hello".as_slice()));
    }

    #[test]
    fn test_plain_content_type_malformed_json_leaves_body_unset() {
        let log = MemoryLog::default();
        let raw = RawBody::new("{not json");
        let body = build_body(Some(&raw), "", "text/plain", &log);
        assert!(body.is_none());
        assert!(log.contains("Response body is not a JSON string"));
        assert!(log.errors().is_empty());
    }

    #[test]
    fn test_plain_content_type_non_string_json_leaves_body_unset() {
        assert!(build(Some(r#"{"a":1}"#), "", "text/plain").is_none());
    }

    #[test]
    fn test_malformed_json_in_json_mode_reports_error() {
        let log = MemoryLog::default();
        let raw = RawBody::new("{\"a\":");
        let body = build_body(Some(&raw), "", JSON_CONTENT_TYPE, &log);
        assert!(body.is_none());
        assert_eq!(log.errors().len(), 1);
        assert!(log.errors()[0].starts_with("Marshal Json"));
    }

    #[test]
    fn test_string_body_overrides_response_body() {
        let body = build(Some(r#"{"a":1}"#), "plain wins", JSON_CONTENT_TYPE);
        assert_eq!(body.as_deref(), Some(b"plain wins".as_slice()));

        let body = build(Some("{broken"), "still wins", "text/plain");
        assert_eq!(body.as_deref(), Some(b"still wins".as_slice()));
    }

    #[test]
    fn test_no_body_sources() {
        assert!(build(None, "", JSON_CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_assignments_are_logged() {
        let log = MemoryLog::default();
        let raw = RawBody::new(r#""first""#);
        build_body(Some(&raw), "second", "text/plain", &log);
        assert!(log.contains("Setting Reply Body of first"));
        assert!(log.contains("Setting Reply Body of second"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = build(Some(r#"{"k":[1,2,3]}"#), "", JSON_CONTENT_TYPE);
        let second = build(Some(r#"{"k":[1,2,3]}"#), "", JSON_CONTENT_TYPE);
        assert_eq!(first, second);
    }
}
