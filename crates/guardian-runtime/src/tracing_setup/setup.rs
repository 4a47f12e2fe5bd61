use std::sync::Once;

use guardian_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter, e.g.
/// `GUARDIAN_LOG=guardian_learning=debug,guardian_storage=warn`.
pub const LOG_ENV: &str = "GUARDIAN_LOG";

const DEFAULT_FILTER: &str = "guardian=info";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable output. Falls back to `guardian=info` when `GUARDIAN_LOG`
/// is unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter_or(DEFAULT_FILTER))
            .init();
    });
}

/// JSON lines, one event per line. Idempotent, and a no-op after `init_tracing`.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(true))
            .with(filter_or(DEFAULT_FILTER))
            .init();
    });
}

/// Initialize from the `observability` config section. `GUARDIAN_LOG` still
/// wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let default = format!("guardian={}", config.log_level);
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter_or(&default));
        if config.json_logs {
            registry.with(fmt::layer().json().with_current_span(true)).init();
        } else {
            registry.with(fmt::layer().with_target(true)).init();
        }
    });
}
