//! Request handler module
//!
//! Dispatches each request to the mock endpoint registered for its method
//! and path.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
