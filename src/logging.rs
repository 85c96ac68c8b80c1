use tracing_subscriber::{EnvFilter, fmt};

/// Fallback directives when neither RUST_LOG nor the configured level parses.
const DEFAULT_DIRECTIVES: &str = "trade_api=info,tower_http=info";

pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    fmt().with_env_filter(filter).with_target(false).init();
}
