use std::path::Path;
use std::sync::Arc;

mod config;
mod endpoint;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

use endpoint::Endpoint;
use logger::{Log, ServerLog};
use routing::RouteTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Build the runtime with the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let log: Arc<dyn Log> = Arc::new(ServerLog);
    let routes = build_routes(&cfg, &log)?;
    let endpoint_count = routes.len();

    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg, routes, log));

    logger::log_server_start(&addr, &state.config, endpoint_count);
    server::start_server_loop(listener, state, server::signal::shutdown_signal()).await;
    Ok(())
}

/// Load endpoint definitions and resolve each one into the route table
fn build_routes(
    cfg: &config::Config,
    log: &Arc<dyn Log>,
) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let definitions = config::load_endpoints(Path::new(&cfg.endpoints.file)).map_err(|e| {
        logger::log_error(&format!("Loading {}: {e}", cfg.endpoints.file));
        e
    })?;

    let mut routes = RouteTable::new();
    for definition in definitions {
        logger::log_endpoint_registered(&definition.method, &definition.path, &definition.name);
        let endpoint = Endpoint::new(definition, cfg.logging.verbose, Arc::clone(log));
        routes.register(Arc::new(endpoint))?;
    }

    if routes.is_empty() {
        logger::log_warning("No endpoints defined; every request will get 404");
    }
    Ok(routes)
}
