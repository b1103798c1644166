//! Mock endpoint module
//!
//! An `Endpoint` is a resolved endpoint definition: the declarative response
//! plus the body bytes computed once at construction. It is immutable and
//! shared by every request routed to it.

mod body;
mod reply;

use body::build_body;

use crate::config::EndpointDefinition;
use crate::logger::Log;
use hyper::body::Bytes;
use std::sync::Arc;

pub struct Endpoint {
    definition: EndpointDefinition,
    cached_body: Option<Bytes>,
    verbose: bool,
    log: Arc<dyn Log>,
}

impl Endpoint {
    /// Resolve a definition, computing its response body once
    ///
    /// `default_verbose` applies when the definition does not set `verbose`.
    pub fn new(definition: EndpointDefinition, default_verbose: bool, log: Arc<dyn Log>) -> Self {
        let cached_body = build_body(
            definition.response_body.as_ref(),
            &definition.string_body,
            &definition.content_type,
            log.as_ref(),
        );
        let verbose = definition.verbose.unwrap_or(default_verbose);

        Self {
            definition,
            cached_body,
            verbose,
            log,
        }
    }

    pub const fn definition(&self) -> &EndpointDefinition {
        &self.definition
    }

}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("definition", &self.definition)
            .field("cached_body", &self.cached_body)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::body::JSON_CONTENT_TYPE;
    use crate::config::RawBody;
    use crate::logger::memory::MemoryLog;

    #[test]
    fn test_body_is_cached_at_construction() {
        let log = Arc::new(MemoryLog::default());
        let mut def = EndpointDefinition::new("json", "/json");
        def.content_type = JSON_CONTENT_TYPE.to_string();
        def.response_body = Some(RawBody::new(r#"{"a": 1}"#));

        let endpoint = Endpoint::new(def, false, log.clone());
        assert_eq!(endpoint.cached_body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
        assert!(log.contains("Setting Reply Body of {\"a\":1}"));
    }

    #[test]
    fn test_verbose_override() {
        let log: Arc<dyn Log> = Arc::new(MemoryLog::default());
        let mut def = EndpointDefinition::new("quiet", "/quiet");

        assert!(Endpoint::new(def.clone(), true, log.clone()).verbose);
        assert!(!Endpoint::new(def.clone(), false, log.clone()).verbose);

        def.verbose = Some(false);
        assert!(!Endpoint::new(def, true, log).verbose);
    }
}
