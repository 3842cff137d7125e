use tracing_subscriber::{EnvFilter, fmt};

/// Used when RUST_LOG is unset. `TraceLayer` reports requests at debug level.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn init() {
    fmt().with_env_filter(filter(std::env::var("RUST_LOG").ok())).init();
}

fn filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
