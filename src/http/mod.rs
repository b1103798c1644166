//! HTTP protocol layer module
//!
//! Fallback responses for requests that no mock endpoint answers.

pub mod response;

pub use response::{build_404_response, build_405_response};
