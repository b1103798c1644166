// Application state module
// Immutable state shared by every connection task

use super::types::Config;
use crate::logger::Log;
use crate::routing::RouteTable;
use std::sync::Arc;

/// Application state
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    /// Error channel for transport failures on served connections
    pub log: Arc<dyn Log>,
}

impl AppState {
    pub fn new(config: Config, routes: RouteTable, log: Arc<dyn Log>) -> Self {
        Self {
            config,
            routes,
            log,
        }
    }
}
