//! Routing module
//!
//! Maps method + path to the mock endpoint registered for it:
//! - Path patterns with `{name}` variables
//! - First registered match wins

mod matcher;

pub use matcher::{PathPattern, PathVars};

use crate::endpoint::Endpoint;
use hyper::Method;
use std::sync::Arc;

/// Result of a route lookup
#[derive(Debug)]
pub enum Lookup<'a> {
    Found(&'a Arc<Endpoint>, PathVars),
    /// The path is known, but not for this method
    MethodNotAllowed,
    NotFound,
}

#[derive(Debug)]
struct RouteEntry {
    method: Method,
    pattern: PathPattern,
    endpoint: Arc<Endpoint>,
}

/// Route table, in registration order
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an endpoint under its own method and path
    pub fn register(&mut self, endpoint: Arc<Endpoint>) -> Result<(), String> {
        let def = endpoint.definition();
        let method = Method::from_bytes(def.method.to_ascii_uppercase().as_bytes())
            .map_err(|e| format!("Invalid method '{}' for endpoint '{}': {e}", def.method, def.name))?;
        let pattern = PathPattern::parse(&def.path);

        self.routes.push(RouteEntry {
            method,
            pattern,
            endpoint,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Lookup<'_> {
        let mut path_known = false;

        for route in &self.routes {
            if let Some(vars) = route.pattern.match_path(path) {
                if route.method == *method {
                    return Lookup::Found(&route.endpoint, vars);
                }
                path_known = true;
            }
        }

        if path_known {
            Lookup::MethodNotAllowed
        } else {
            Lookup::NotFound
        }
    }
}
