//! Per-request handling of a mock endpoint
//!
//! Diagnose (read body, emit request record) → optional verbose dump →
//! reply (delay, headers, status, cached body). Every failure degrades
//! locally; the request is always answered.

use super::Endpoint;
use crate::routing::PathVars;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use hyper::http::request::Parts;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Diagnostic record emitted for every handled request
#[derive(Debug, Serialize)]
struct RequestRecord<'a> {
    endpoint: &'a str,
    path: &'a str,
    content_type: &'a str,
    body: &'a str,
}

impl Endpoint {
    /// Serve one request routed to this endpoint
    pub async fn handle<B>(&self, req: Request<B>, vars: &PathVars) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let def = &self.definition;
        self.log.printf(format_args!(
            "Handling endpoint {} {} {}",
            def.name, def.method, def.path
        ));

        let (parts, body) = req.into_parts();
        let body_text = match body.collect().await {
            Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).into_owned(),
            Err(e) => {
                self.log
                    .printf(format_args!("Unable to read request body: {e}"));
                String::new()
            }
        };

        self.emit_request_record(&parts, &body_text);

        if self.verbose {
            self.dump_request(&parts, &body_text, vars);
        }

        self.reply().await
    }

    fn emit_request_record(&self, parts: &Parts, body: &str) {
        let record = RequestRecord {
            endpoint: &self.definition.name,
            path: &self.definition.path,
            content_type: parts
                .headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(""),
            body,
        };

        match serde_json::to_string(&record) {
            Ok(json) => self.log.printf(format_args!("Request:{json}")),
            Err(e) => self.log.error(&e, "Unable to encode request record"),
        }
    }

    fn dump_request(&self, parts: &Parts, body: &str, vars: &PathVars) {
        self.log.print(&raw_request(parts, body));

        if !vars.is_empty() {
            self.log.print("Values:");
            for (key, value) in vars {
                self.log.printf(format_args!("Key: {key}, Value: {value}"));
            }
        }
    }

    async fn reply(&self) -> Response<Full<Bytes>> {
        let def = &self.definition;

        if def.reply_delay > 0 {
            self.log
                .printf(format_args!("Waiting for {}ms", def.reply_delay));
            tokio::time::sleep(Duration::from_millis(def.reply_delay)).await;
        }

        self.log.printf(format_args!(
            "Send Response: {} {} Body: {}",
            def.response,
            def.content_type,
            self.cached_body
                .as_ref()
                .map(|b| String::from_utf8_lossy(b))
                .unwrap_or_default()
        ));

        let body = self.cached_body.clone().unwrap_or_default();
        let mut response = Response::new(Full::new(body));

        let headers = response.headers_mut();
        for (key, value) in &def.header {
            let name = match HeaderName::from_bytes(key.as_bytes()) {
                Ok(name) => name,
                Err(e) => {
                    self.log.error(&e, &format!("Skipping header {key}"));
                    continue;
                }
            };
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.insert(name, value);
                }
                Err(e) => self.log.error(&e, &format!("Skipping header {key}")),
            }
        }

        if !def.content_type.is_empty() {
            match HeaderValue::from_str(&def.content_type) {
                Ok(value) => {
                    headers.insert(CONTENT_TYPE, value);
                }
                Err(e) => self.log.error(&e, "Skipping Content-Type"),
            }
        }

        *response.status_mut() = match StatusCode::from_u16(def.response) {
            Ok(status) => status,
            Err(e) => {
                self.log
                    .error(&e, &format!("Invalid status {}, replying 500", def.response));
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        response
    }
}

/// Render the request as it arrived on the wire: request line, headers, body
fn raw_request(parts: &Parts, body: &str) -> String {
    let target = parts
        .uri
        .path_and_query()
        .map_or("/", hyper::http::uri::PathAndQuery::as_str);

    let mut dump = String::new();
    dump.push_str(&format!("{} {target} {:?}\r\n", parts.method, parts.version));
    for (name, value) in &parts.headers {
        dump.push_str(&format!("{name}: {}\r\n", String::from_utf8_lossy(value.as_bytes())));
    }
    dump.push_str("\r\n");
    dump.push_str(body);
    dump
}
