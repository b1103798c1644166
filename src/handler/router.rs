//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route lookup, then either the
//! matched endpoint or a 404/405 fallback.

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::routing::Lookup;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match state.routes.lookup(&method, &path) {
        Lookup::Found(endpoint, vars) => endpoint.handle(req, &vars).await,
        Lookup::MethodNotAllowed => {
            logger::log_unmatched_request(method.as_str(), &path, 405);
            http::build_405_response()
        }
        Lookup::NotFound => {
            logger::log_unmatched_request(method.as_str(), &path, 404);
            http::build_404_response()
        }
    };

    Ok(response)
}
