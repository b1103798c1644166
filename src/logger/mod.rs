//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - The `Log` capability consumed by endpoints (`print`, `printf`, `error`)
//! - Server lifecycle logging
//! - File-based logging support

pub mod writer;

#[cfg(test)]
pub mod memory;

use crate::config::Config;
use std::fmt;
use std::net::SocketAddr;

/// Logging capability consumed by endpoint construction and request handling
pub trait Log: Send + Sync {
    /// Emit a diagnostic message
    fn print(&self, message: &str);

    /// Emit a formatted diagnostic message
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.print(&args.to_string());
    }

    /// Report an error together with what was being attempted
    fn error(&self, err: &dyn std::error::Error, context: &str);
}

/// `Log` implementation backed by the global log writer
#[derive(Debug, Default, Clone, Copy)]
pub struct ServerLog;

impl Log for ServerLog {
    fn print(&self, message: &str) {
        write_info(message);
    }

    fn error(&self, err: &dyn std::error::Error, context: &str) {
        write_error(&format!("[ERROR] {context}: {err}"));
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.info_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    if let Some(w) = writer::get() {
        w.write_info(message);
    } else {
        println!("{}", writer::timestamped(message));
    }
}

fn write_error(message: &str) {
    if let Some(w) = writer::get() {
        w.write_error(message);
    } else {
        eprintln!("{}", writer::timestamped(message));
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, endpoint_count: usize) {
    write_info("======================================");
    write_info("Mock server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Serving {endpoint_count} endpoint(s) from {}",
        config.endpoints.file
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.logging.verbose {
        write_info("Verbose request dumps enabled");
    }
    if let Some(ref path) = config.logging.info_log_file {
        write_info(&format!("Info log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================");
}

pub fn log_endpoint_registered(method: &str, path: &str, name: &str) {
    write_info(&format!("[Route] {method} {path} -> {name}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_unmatched_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[Unmatched] {method} {path} - {status}"));
}

pub fn log_shutdown() {
    write_info("[Shutdown] Stopping accept loop, in-flight requests finish in background");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
