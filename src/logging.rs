// 🪵 Logging setup
//
// tracing + tracing-subscriber, level controlled via RUST_LOG
// (default: info). Called once from the binary; library code only emits
// events and never installs a subscriber itself.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
