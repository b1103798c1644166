// Endpoint definitions module
// Declarative mock endpoint descriptions and the file loader for them

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Raw JSON text of a configured response body
///
/// Holds either arbitrary structured data or a JSON-encoded string literal.
/// The text is not validated here; decoding happens when the endpoint is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(String);

impl RawBody {
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through `Value` lets TOML tables and JSON objects share one path;
        // `arbitrary_precision` keeps JSON numbers as written
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::new(value.to_string()))
    }
}

/// Declarative description of one mock response
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDefinition {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default = "default_method", alias = "Method")]
    pub method: String,
    #[serde(alias = "Path")]
    pub path: String,
    #[serde(default, alias = "ContentType")]
    pub content_type: String,
    #[serde(default, alias = "ResponseBody")]
    pub response_body: Option<RawBody>,
    #[serde(default, alias = "StringBody")]
    pub string_body: String,
    /// Milliseconds to wait before replying
    #[serde(default, alias = "ReplyDelay")]
    pub reply_delay: u64,
    /// HTTP status code
    #[serde(default = "default_response", alias = "Response")]
    pub response: u16,
    #[serde(default, alias = "Header")]
    pub header: HashMap<String, String>,
    /// Per-endpoint override of `logging.verbose`
    #[serde(default, alias = "Verbose")]
    pub verbose: Option<bool>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_method() -> String {
    "GET".to_string()
}

const fn default_response() -> u16 {
    200
}

impl EndpointDefinition {
    /// Minimal definition answering `GET path` with an empty 200
    #[cfg(test)]
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            method: default_method(),
            path: path.to_string(),
            content_type: String::new(),
            response_body: None,
            string_body: String::new(),
            reply_delay: 0,
            response: default_response(),
            header: HashMap::new(),
            verbose: None,
        }
    }
}

/// Endpoint file wrapper (`[[endpoints]]` in TOML, `{"endpoints": [...]}` in JSON)
#[derive(Debug, Deserialize)]
struct EndpointFile {
    #[serde(default)]
    endpoints: Vec<EndpointDefinition>,
}

/// Failure to read or parse an endpoint definitions file
#[derive(Debug)]
pub enum EndpointLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for EndpointLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read endpoint file: {e}"),
            Self::Json(e) => write!(f, "invalid JSON endpoint file: {e}"),
            Self::Toml(e) => write!(f, "invalid TOML endpoint file: {e}"),
        }
    }
}

impl std::error::Error for EndpointLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Toml(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for EndpointLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for EndpointLoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<toml::de::Error> for EndpointLoadError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

/// Load endpoint definitions from a `.toml` or JSON file
pub fn load_endpoints(path: &Path) -> Result<Vec<EndpointDefinition>, EndpointLoadError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let file: EndpointFile = toml::from_str(&content)?;
        return Ok(file.endpoints);
    }

    // Picked by the leading byte: untagged enums lose exact numbers
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(&content)?)
    } else {
        let file: EndpointFile = serde_json::from_str(&content)?;
        Ok(file.endpoints)
    }
}
